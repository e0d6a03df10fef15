// SPDX-License-Identifier: MIT

//! Terminal frontend for browsing the CV.
//!
//! A raw-mode crossterm loop: full clear + redraw per frame, 200ms input
//! poll. The page model is laid out into lines; the visible window of
//! those lines is the viewport feeding scroll effects — header compaction
//! and one-shot fade-in (elements draw dimmed until first seen).
//!
//! Interaction: `Tab`/`BackTab` cycle a selection cursor over the
//! interactive elements (skill tags, timeline detail toggles, portfolio
//! category buttons); `Enter`/`Space` activate it, dispatching the
//! matching controller event. `l` toggles the language, arrows scroll.

use crate::controller::{Event, PageController};
use crate::effects::{ElementKey, IntersectionWatcher, Span, Viewport, OBSERVER_STARTUP_DELAY};
use crate::i18n::t;
use crate::page::{CardLink, Page};
use anyhow::Result;
use colored::Colorize;
use crossterm::{
    cursor,
    event::{self, Event as TermEvent, KeyCode, KeyEvent},
    execute,
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

/// An interactive element the selection cursor can land on, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    /// Skill tag: (competency block, tag within block).
    Skill(usize, usize),
    /// Timeline entry detail toggle.
    Toggle(usize),
    /// Portfolio category filter button.
    Filter(usize),
}

/// One laid-out body line, attributed to the page element it belongs to.
struct Line {
    text: String,
    key: Option<ElementKey>,
}

pub struct ViewTui;

impl ViewTui {
    pub fn run(controller: &mut PageController) -> Result<()> {
        terminal::enable_raw_mode()?;
        let result = Self::run_inner(controller);
        terminal::disable_raw_mode()?;
        result
    }

    fn run_inner(controller: &mut PageController) -> Result<()> {
        let mut stdout = stdout();
        let mut scroll: u64 = 0;
        let mut selected: usize = 0;
        let started = Instant::now();
        let mut watcher = IntersectionWatcher::new();
        let mut observing = false;

        loop {
            // One-shot registration after the startup delay, so the first
            // render settles before anything starts fading in.
            if !observing && started.elapsed() >= OBSERVER_STARTUP_DELAY {
                watcher.observe(controller.fade_candidates());
                observing = true;
            }

            let (_cols, rows) = terminal::size()?;
            let targets = collect_targets(&controller.page);
            if selected >= targets.len() {
                selected = targets.len().saturating_sub(1);
            }

            let header = layout_header(&controller.page);
            let body = layout_body(&controller.page, &targets, selected);
            let window = (rows as usize).saturating_sub(header.len() + 1).max(1);
            let max_scroll = body.len().saturating_sub(window) as u64;
            scroll = scroll.min(max_scroll);

            if observing {
                let spans = element_spans(&body);
                let viewport = Viewport {
                    top: scroll,
                    height: window as u64,
                };
                let seen = watcher.intersect(viewport, &spans);
                controller.mark_seen(&seen);
            }

            Self::draw(&mut stdout, controller.lang(), &header, &body, scroll, window)?;

            if event::poll(Duration::from_millis(200))? {
                if let TermEvent::Key(KeyEvent { code, .. }) = event::read()? {
                    match code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Char('l') => controller.dispatch(Event::ToggleLanguage),
                        KeyCode::Tab => {
                            if !targets.is_empty() {
                                selected = (selected + 1) % targets.len();
                            }
                        }
                        KeyCode::BackTab => {
                            if !targets.is_empty() {
                                selected = (selected + targets.len() - 1) % targets.len();
                            }
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            scroll = (scroll + 1).min(max_scroll);
                            controller.dispatch(Event::Scrolled(scroll));
                        }
                        KeyCode::Up | KeyCode::Char('k') => {
                            scroll = scroll.saturating_sub(1);
                            controller.dispatch(Event::Scrolled(scroll));
                        }
                        KeyCode::PageDown => {
                            scroll = (scroll + window as u64).min(max_scroll);
                            controller.dispatch(Event::Scrolled(scroll));
                        }
                        KeyCode::PageUp => {
                            scroll = scroll.saturating_sub(window as u64);
                            controller.dispatch(Event::Scrolled(scroll));
                        }
                        KeyCode::Char('g') => {
                            scroll = 0;
                            controller.dispatch(Event::Scrolled(scroll));
                        }
                        KeyCode::Char('G') => {
                            scroll = max_scroll;
                            controller.dispatch(Event::Scrolled(scroll));
                        }
                        KeyCode::Enter | KeyCode::Char(' ') => {
                            activate(controller, targets.get(selected).copied());
                        }
                        _ => {}
                    }
                }
            }
        }

        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn draw(
        stdout: &mut impl Write,
        lang: crate::i18n::Lang,
        header: &[String],
        body: &[Line],
        scroll: u64,
        window: usize,
    ) -> Result<()> {
        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        for line in header {
            writeln!(stdout, "{line}")?;
        }
        let start = scroll as usize;
        for line in body.iter().skip(start).take(window) {
            writeln!(stdout, "{}", line.text)?;
        }
        write!(stdout, "{}", t(lang, "tui.controls").dimmed())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Dispatch the controller event matching an activated target.
fn activate(controller: &mut PageController, target: Option<Target>) {
    match target {
        Some(Target::Skill(block, tag)) => {
            let label = controller
                .page
                .competencies
                .get(block)
                .and_then(|b| b.tags.get(tag))
                .map(|t| t.label.clone());
            if let Some(label) = label {
                controller.dispatch(Event::SkillToggled(label));
            }
        }
        Some(Target::Toggle(entry)) => {
            if let Some(index) = controller.page.timeline.get(entry).map(|e| e.index) {
                controller.dispatch(Event::DetailToggled(index));
            }
        }
        Some(Target::Filter(button)) => {
            let key = controller.page.filters.get(button).map(|b| b.key.clone());
            if let Some(key) = key {
                controller.dispatch(Event::CategorySelected(key));
            }
        }
        None => {}
    }
}

/// Interactive elements in the order layout draws them. Must stay in sync
/// with [`layout_body`], which renders selection state by target index.
fn collect_targets(page: &Page) -> Vec<Target> {
    let mut targets = Vec::new();
    for (b, block) in page.competencies.iter().enumerate() {
        for t in 0..block.tags.len() {
            targets.push(Target::Skill(b, t));
        }
    }
    for (i, entry) in page.timeline.iter().enumerate() {
        if entry.shown {
            targets.push(Target::Toggle(i));
        }
    }
    for f in 0..page.filters.len() {
        targets.push(Target::Filter(f));
    }
    targets
}

/// The pinned header: compact collapses to a single line once scrolled
/// past the threshold.
fn layout_header(page: &Page) -> Vec<String> {
    let name = page.bound_text("hero.name").unwrap_or("");
    let title = page.bound_text("hero.title").unwrap_or("");
    let selector: Vec<String> = page
        .lang_options
        .iter()
        .map(|opt| {
            if opt.active {
                opt.lang.code().to_uppercase().bold().green().to_string()
            } else {
                opt.lang.code().to_uppercase().dimmed().to_string()
            }
        })
        .collect();
    let selector = selector.join("/");

    if page.header_compact {
        return vec![format!("{} — {}  [{}]", name.bold().cyan(), title, selector)];
    }

    let mut lines = Vec::new();
    let greeting = page.bound_text("hero.greeting").unwrap_or("");
    if !greeting.is_empty() {
        lines.push(greeting.italic().to_string());
    }
    lines.push(format!("{}  [{}]", name.bold().cyan(), selector));
    if !title.is_empty() {
        lines.push(title.to_string());
    }
    let tagline = page.bound_text("hero.tagline").unwrap_or("");
    if !tagline.is_empty() {
        lines.push(tagline.dimmed().to_string());
    }
    lines.push(String::new());
    lines
}

fn element_spans(body: &[Line]) -> Vec<(ElementKey, Span)> {
    let mut spans: Vec<(ElementKey, Span)> = Vec::new();
    for (row, line) in body.iter().enumerate() {
        let Some(key) = line.key else { continue };
        match spans.iter_mut().find(|(k, _)| *k == key) {
            Some((_, span)) => {
                span.height = row as u64 + 1 - span.top;
            }
            None => spans.push((
                key,
                Span {
                    top: row as u64,
                    height: 1,
                },
            )),
        }
    }
    spans
}

fn layout_body(page: &Page, targets: &[Target], selected: usize) -> Vec<Line> {
    let mut body = Vec::new();
    let selected_target = targets.get(selected).copied();

    push_section_title(&mut body, page, "about.title");
    if let Some(text) = page.bound_text("about.text") {
        if !text.is_empty() {
            body.push(Line {
                text: format!("  {text}"),
                key: None,
            });
            body.push(Line {
                text: String::new(),
                key: None,
            });
        }
    }

    if !page.competencies.is_empty() {
        push_section_title(&mut body, page, "competencies.title");
        for (b, block) in page.competencies.iter().enumerate() {
            let key = Some(ElementKey::Competency(b));
            let tags: Vec<String> = block
                .tags
                .iter()
                .enumerate()
                .map(|(i, tag)| {
                    let token = format!("[{}]", tag.label);
                    let styled = if tag.active {
                        token.green().bold().to_string()
                    } else if block.seen {
                        token
                    } else {
                        token.dimmed().to_string()
                    };
                    if selected_target == Some(Target::Skill(b, i)) {
                        styled.reversed().to_string()
                    } else {
                        styled
                    }
                })
                .collect();
            let name = if block.seen {
                block.name.bold().to_string()
            } else {
                block.name.dimmed().to_string()
            };
            body.push(Line {
                text: format!("  {name}: {}", tags.join(" ")),
                key,
            });
        }
        body.push(Line {
            text: String::new(),
            key: None,
        });
    }

    if !page.timeline.is_empty() {
        push_section_title(&mut body, page, "experience.title");
        for (i, entry) in page.timeline.iter().enumerate() {
            if !entry.shown {
                continue;
            }
            let key = Some(ElementKey::Timeline(i));
            let head = format!(
                "  {} — {} {}",
                entry.company.bold(),
                entry.title,
                format!("({})", entry.period).dimmed()
            );
            push_faded(&mut body, entry.seen, head, key);
            push_faded(&mut body, entry.seen, format!("    {}", entry.description), key);
            if !entry.tags.is_empty() {
                push_faded(
                    &mut body,
                    entry.seen,
                    format!("    {}", entry.tags.join(" · ").dimmed()),
                    key,
                );
            }
            let toggle = format!("[{}]", entry.toggle_label);
            let toggle = if selected_target == Some(Target::Toggle(i)) {
                toggle.reversed().to_string()
            } else {
                toggle.cyan().to_string()
            };
            body.push(Line {
                text: format!("    {toggle}"),
                key,
            });
            if entry.expanded {
                push_faded(
                    &mut body,
                    entry.seen,
                    format!("    {}", t(page.lang, "timeline.achievements").bold()),
                    key,
                );
                for achievement in &entry.achievements {
                    push_faded(&mut body, entry.seen, format!("      • {achievement}"), key);
                }
            }
            body.push(Line {
                text: String::new(),
                key: None,
            });
        }
    }

    if !page.metrics.is_empty() {
        push_section_title(&mut body, page, "achievements.title");
        for (i, card) in page.metrics.iter().enumerate() {
            let key = Some(ElementKey::Metric(i));
            let text = format!("  {}  {}", card.value.bold().green(), card.label);
            push_faded(&mut body, card.seen, text, key);
        }
        body.push(Line {
            text: String::new(),
            key: None,
        });
    }

    if !page.portfolio.is_empty() {
        push_section_title(&mut body, page, "portfolioSection.title");
        let buttons: Vec<String> = page
            .filters
            .iter()
            .enumerate()
            .map(|(f, button)| {
                let token = if button.active {
                    format!("[{}]", button.label).bold().green().to_string()
                } else {
                    format!("[{}]", button.label)
                };
                if selected_target == Some(Target::Filter(f)) {
                    token.reversed().to_string()
                } else {
                    token
                }
            })
            .collect();
        body.push(Line {
            text: format!("  {}", buttons.join(" ")),
            key: None,
        });
        body.push(Line {
            text: String::new(),
            key: None,
        });

        for (i, card) in page.portfolio.iter().enumerate() {
            if card.hidden {
                continue;
            }
            let key = Some(ElementKey::Portfolio(i));
            let year = card.year.map(|y| format!(" • {y}")).unwrap_or_default();
            push_faded(
                &mut body,
                card.seen,
                format!("  {} {}", card.title.bold(), format!("[{}]", card.kind).dimmed()),
                key,
            );
            push_faded(&mut body, card.seen, format!("    {}{year}", card.platform), key);
            push_faded(&mut body, card.seen, format!("    {}", card.description), key);
            if !card.tags.is_empty() {
                push_faded(
                    &mut body,
                    card.seen,
                    format!("    {}", card.tags.join(" · ").dimmed()),
                    key,
                );
            }
            match &card.link {
                CardLink::Url(url) => push_faded(
                    &mut body,
                    card.seen,
                    format!("    {} {}", t(page.lang, "portfolio.view").green(), url.underline()),
                    key,
                ),
                CardLink::ComingSoon(label) => {
                    push_faded(&mut body, card.seen, format!("    {}", label.italic()), key)
                }
            }
            body.push(Line {
                text: String::new(),
                key: None,
            });
        }
    }

    if let Some(note) = page.bound_text("footer.note") {
        if !note.is_empty() {
            body.push(Line {
                text: note.dimmed().to_string(),
                key: None,
            });
        }
    }

    body
}

fn push_section_title(body: &mut Vec<Line>, page: &Page, path: &str) {
    if let Some(title) = page.bound_text(path) {
        if !title.is_empty() {
            body.push(Line {
                text: title.bold().yellow().to_string(),
                key: None,
            });
        }
    }
}

/// Push a body line, dimming it while its element has not yet faded in.
fn push_faded(body: &mut Vec<Line>, seen: bool, text: String, key: Option<ElementKey>) {
    let text = if seen { text } else { text.dimmed().to_string() };
    body.push(Line { text, key });
}
