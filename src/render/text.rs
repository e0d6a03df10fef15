// SPDX-License-Identifier: MIT

//! Headless text formatting of the page model.
//!
//! Backs the `render` subcommand: prints the whole page as a colored
//! console document, interactivity flattened out (every card shown, every
//! achievement list expanded).

use crate::i18n::t;
use crate::page::{CardLink, Page};
use colored::Colorize;
use std::fmt::Write as _;

pub struct PageFormatter;

impl PageFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, page: &Page) {
        print!("{}", self.format(page));
    }

    pub fn format(&self, page: &Page) -> String {
        let mut out = String::new();
        self.write_header(&mut out, page);
        self.write_competencies(&mut out, page);
        self.write_timeline(&mut out, page);
        self.write_metrics(&mut out, page);
        self.write_portfolio(&mut out, page);
        if let Some(note) = page.bound_text("footer.note") {
            if !note.is_empty() {
                let _ = writeln!(out, "{}", note.dimmed());
            }
        }
        out
    }

    fn bound_or_default<'a>(&self, page: &'a Page, path: &str, default: &'a str) -> &'a str {
        match page.bound_text(path) {
            Some("") | None => default,
            Some(text) => text,
        }
    }

    fn write_header(&self, out: &mut String, page: &Page) {
        let name = self.bound_or_default(page, "hero.name", "—");
        let title = self.bound_or_default(page, "hero.title", "");
        let _ = writeln!(out, "{}", name.bold().cyan());
        if !title.is_empty() {
            let _ = writeln!(out, "{}", title);
        }
        let tagline = self.bound_or_default(page, "hero.tagline", "");
        if !tagline.is_empty() {
            let _ = writeln!(out, "{}", tagline.italic());
        }
        let _ = writeln!(out);

        let about = self.bound_or_default(page, "about.text", "");
        if !about.is_empty() {
            let about_title = self.bound_or_default(page, "about.title", "About");
            let _ = writeln!(out, "{}", about_title.bold().yellow());
            let _ = writeln!(out, "  {about}");
            let _ = writeln!(out);
        }
    }

    fn write_competencies(&self, out: &mut String, page: &Page) {
        if page.competencies.is_empty() {
            return;
        }
        let title = self.bound_or_default(page, "competencies.title", "Competencies");
        let _ = writeln!(out, "{}", title.bold().yellow());
        for block in &page.competencies {
            let tags: Vec<String> = block
                .tags
                .iter()
                .map(|tag| {
                    if tag.active {
                        format!("[{}]", tag.label).green().to_string()
                    } else {
                        format!("[{}]", tag.label)
                    }
                })
                .collect();
            let _ = writeln!(out, "  {}: {}", block.name.bold(), tags.join(" "));
        }
        let _ = writeln!(out);
    }

    fn write_timeline(&self, out: &mut String, page: &Page) {
        if page.timeline.is_empty() {
            return;
        }
        let title = self.bound_or_default(page, "experience.title", "Experience");
        let _ = writeln!(out, "{}", title.bold().yellow());
        for entry in &page.timeline {
            let _ = writeln!(
                out,
                "  {} — {} {}",
                entry.company.bold(),
                entry.title,
                format!("({})", entry.period).dimmed()
            );
            let _ = writeln!(out, "    {}", entry.description);
            if !entry.tags.is_empty() {
                let _ = writeln!(out, "    {}", entry.tags.join(" · ").dimmed());
            }
            if !entry.achievements.is_empty() {
                let _ = writeln!(out, "    {}", t(page.lang, "timeline.achievements").bold());
                for achievement in &entry.achievements {
                    let _ = writeln!(out, "      • {achievement}");
                }
            }
            let _ = writeln!(out);
        }
    }

    fn write_metrics(&self, out: &mut String, page: &Page) {
        if page.metrics.is_empty() {
            return;
        }
        let title = self.bound_or_default(page, "achievements.title", "Achievements");
        let _ = writeln!(out, "{}", title.bold().yellow());
        for card in &page.metrics {
            let _ = writeln!(out, "  {}  {}", card.value.bold().green(), card.label);
        }
        let _ = writeln!(out);
    }

    fn write_portfolio(&self, out: &mut String, page: &Page) {
        if page.portfolio.is_empty() {
            return;
        }
        let title = self.bound_or_default(page, "portfolioSection.title", "Portfolio");
        let _ = writeln!(out, "{}", title.bold().yellow());

        let categories: Vec<&str> = page
            .filters
            .iter()
            .map(|button| button.label.as_str())
            .collect();
        if !categories.is_empty() {
            let _ = writeln!(out, "  {}", categories.join(" | ").dimmed());
        }
        let _ = writeln!(out);

        for card in &page.portfolio {
            let year = card
                .year
                .map(|y| format!(" • {y}"))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "  {} {}",
                card.title.bold(),
                format!("[{}]", card.kind).dimmed()
            );
            let _ = writeln!(out, "    {}{}", card.platform, year);
            let _ = writeln!(out, "    {}", card.description);
            if !card.tags.is_empty() {
                let _ = writeln!(out, "    {}", card.tags.join(" · ").dimmed());
            }
            if let Some(thumbnail) = &card.thumbnail {
                let _ = writeln!(out, "    {} {}", "thumb:".dimmed(), thumbnail.url.dimmed());
            }
            match &card.link {
                CardLink::Url(url) => {
                    let _ = writeln!(
                        out,
                        "    {} {}",
                        t(page.lang, "portfolio.view").green(),
                        url.underline()
                    );
                }
                CardLink::ComingSoon(label) => {
                    let _ = writeln!(out, "    {}", label.italic().dimmed());
                }
            }
            let _ = writeln!(out);
        }
    }
}

impl Default for PageFormatter {
    fn default() -> Self {
        Self::new()
    }
}
