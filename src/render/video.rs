// SPDX-License-Identifier: MIT

//! Video thumbnail derivation for portfolio cards.
//!
//! Only cards of category "video" with a non-empty url get a thumbnail:
//! YouTube hosts through embedded video-id extraction, Facebook hosts
//! through a static placeholder graphic. Unrecognized hosts get none —
//! never an error.

use crate::page::Thumbnail;
use crate::types::PortfolioItem;
use regex::Regex;

/// Inline SVG shown for Facebook-hosted videos, which expose no stable
/// thumbnail endpoint.
const FACEBOOK_PLACEHOLDER: &str = "data:image/svg+xml,%3Csvg xmlns=\"http://www.w3.org/2000/svg\" width=\"480\" height=\"360\"%3E%3Crect width=\"480\" height=\"360\" fill=\"%231877f2\"/%3E%3Ctext x=\"50%25\" y=\"50%25\" dominant-baseline=\"middle\" text-anchor=\"middle\" font-family=\"Arial\" font-size=\"28\" fill=\"white\"%3EFacebook Video%3C/text%3E%3C/svg%3E";

/// Extract the 11-character YouTube video id from any of the common URL
/// shapes: `watch?v=`, `youtu.be/`, `embed/`, `v/`, `/u/<char>/`.
///
/// Returns `None` when the pattern does not match or the captured id is
/// not exactly 11 characters.
pub fn extract_youtube_id(url: &str) -> Option<String> {
    // One fixed pattern covering all shapes; group 7 captures the id.
    let pattern =
        Regex::new(r"^.*((youtu\.be/)|(v/)|(/u/\w/)|(embed/)|(watch\?))\??v?=?([^#&?]*).*")
            .expect("video id pattern is valid");
    let caps = pattern.captures(url)?;
    let id = caps.get(7)?.as_str();
    if id.len() == 11 {
        Some(id.to_string())
    } else {
        None
    }
}

/// Derive the thumbnail for a portfolio item, if any.
pub fn thumbnail_for(item: &PortfolioItem) -> Option<Thumbnail> {
    if item.category != "video" || !item.has_url() {
        return None;
    }
    let url = item.url.as_str();
    if url.contains("youtube.com") || url.contains("youtu.be") {
        let id = extract_youtube_id(url)?;
        Some(Thumbnail {
            url: format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"),
        })
    } else if url.contains("facebook.com") {
        Some(Thumbnail {
            url: FACEBOOK_PLACEHOLDER.to_string(),
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_item(url: &str) -> PortfolioItem {
        serde_json::from_value(serde_json::json!({
            "category": "video",
            "type": "Capsule",
            "platform": "YouTube",
            "title": "t",
            "url": url,
            "tags": []
        }))
        .unwrap()
    }

    #[test]
    fn extracts_id_from_every_supported_shape() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL123",
        ] {
            assert_eq!(
                extract_youtube_id(url).as_deref(),
                Some("dQw4w9WgXcQ"),
                "shape: {url}"
            );
        }
    }

    #[test]
    fn rejects_ids_that_are_not_eleven_characters() {
        assert_eq!(extract_youtube_id("https://youtu.be/short"), None);
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/watch?v=waytoolongvideoid"),
            None
        );
        assert_eq!(extract_youtube_id("https://example.com/clip"), None);
    }

    #[test]
    fn youtube_cards_get_a_derived_thumbnail() {
        let thumb = thumbnail_for(&video_item("https://youtu.be/dQw4w9WgXcQ")).unwrap();
        assert_eq!(
            thumb.url,
            "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
    }

    #[test]
    fn facebook_cards_get_the_placeholder() {
        let thumb = thumbnail_for(&video_item("https://www.facebook.com/watch/?v=123")).unwrap();
        assert!(thumb.url.starts_with("data:image/svg+xml,"));
    }

    #[test]
    fn unrecognized_hosts_and_non_videos_get_none() {
        assert!(thumbnail_for(&video_item("https://vimeo.com/12345")).is_none());
        assert!(thumbnail_for(&video_item("")).is_none());

        let mut web = video_item("https://youtu.be/dQw4w9WgXcQ");
        web.category = "web".to_string();
        assert!(thumbnail_for(&web).is_none());
    }

    #[test]
    fn malformed_youtube_url_means_no_thumbnail() {
        assert!(thumbnail_for(&video_item("https://www.youtube.com/watch?v=bad")).is_none());
    }
}
