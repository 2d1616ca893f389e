use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::model::SnsField;

/// One resolvable SNS link, ready for the front-end adapter to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnsLink {
    pub label: String,
    pub href: String,
}

/// Raw-cell separators: whitespace, `|`, or `,` in any run.
static SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s|,]+").expect("sns split pattern"));

/// Flatten an SNS field into labeled links.
///
/// Mapping variants keep nonempty values in key order with labels guessed
/// from the service key; raw cells are split on whitespace/`|`/`,` with
/// labels guessed from each URL's host. Empty input yields no links.
pub fn links_for(sns: &SnsField) -> Vec<SnsLink> {
    match sns {
        SnsField::Mapping(map) => map
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(k, v)| SnsLink {
                label: guess_label(k),
                href: v.trim().to_string(),
            })
            .collect(),
        SnsField::Raw(s) => SPLIT_RE
            .split(s)
            .filter(|part| !part.is_empty())
            .map(|href| SnsLink {
                label: guess_label(href),
                href: href.to_string(),
            })
            .collect(),
    }
}

/// Guess a display label from a service key or a URL.
fn guess_label(key_or_href: &str) -> String {
    let key = key_or_href.to_lowercase();

    let by_key = if key == "x" || key.contains("twitter") {
        Some("X")
    } else if key.contains("instagram") {
        Some("Instagram")
    } else if key.contains("youtube") {
        Some("YouTube")
    } else if key.contains("tiktok") {
        Some("TikTok")
    } else if key.contains("pixiv") {
        Some("pixiv")
    } else if key.contains("booth") {
        Some("BOOTH")
    } else if key.contains("bluesky") || key.contains("bsky") {
        Some("Bluesky")
    } else if key.contains("threads") {
        Some("Threads")
    } else if key == "note" {
        Some("note")
    } else if key.contains("web") || key.contains("site") || key.contains("homepage") {
        Some("Web")
    } else {
        None
    };
    if let Some(label) = by_key {
        return label.to_string();
    }

    if let Ok(url) = Url::parse(key_or_href) {
        if let Some(host) = url.host_str() {
            let label = match host.trim_start_matches("www.") {
                "x.com" | "twitter.com" => "X",
                "instagram.com" => "Instagram",
                "youtube.com" | "youtu.be" => "YouTube",
                "tiktok.com" => "TikTok",
                h if h.ends_with("pixiv.net") => "pixiv",
                h if h.ends_with("booth.pm") => "BOOTH",
                "bsky.app" => "Bluesky",
                "threads.net" => "Threads",
                "note.com" => "note",
                _ => "Web",
            };
            return label.to_string();
        }
    }
    "Web".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_yields_no_links() {
        assert!(links_for(&SnsField::Raw(String::new())).is_empty());
        assert!(links_for(&SnsField::legacy_mapping(&[])).is_empty());
    }

    #[test]
    fn mapping_skips_blank_services() {
        let sns = SnsField::legacy_mapping(&["https://x.com/a", "", "https://shop.booth.pm/"]);
        let links = links_for(&sns);
        assert_eq!(links.len(), 2);
        // BTreeMap key order: booth before x
        assert_eq!(links[0].label, "BOOTH");
        assert_eq!(links[1].label, "X");
        assert_eq!(links[1].href, "https://x.com/a");
    }

    #[test]
    fn raw_cell_splits_on_mixed_separators() {
        let sns = SnsField::Raw("https://x.com/a | https://pixiv.net/u,https://example.com".into());
        let links = links_for(&sns);
        let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["X", "pixiv", "Web"]);
    }

    #[test]
    fn labels_guessed_from_host() {
        let sns = SnsField::Raw("https://bsky.app/profile/a https://www.youtube.com/@c".into());
        let labels: Vec<String> = links_for(&sns).into_iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Bluesky", "YouTube"]);
    }

    #[test]
    fn unknown_key_without_url_defaults_to_web() {
        assert_eq!(guess_label("myspace"), "Web");
        assert_eq!(guess_label("tumblr"), "Web");
    }
}
