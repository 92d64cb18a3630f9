//! Pure URL predicates. Absence of a match is the only failure signal;
//! these never touch the network and never panic on user input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Platform;

static INSTAGRAM_POST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(www\.)?instagram\.com/(p|reel)/[A-Za-z0-9_-]+/?").unwrap()
});

static INSTAGRAM_PROFILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://(www\.)?instagram\.com/[A-Za-z0-9_.]+/?$").unwrap());

static FACEBOOK_SOURCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(www\.)?facebook\.com/(groups|pages|profile\.php|[A-Za-z0-9_.-]+)/?")
        .unwrap()
});

static NUMERIC_SEGMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\d+/").unwrap());

/// Markers that distinguish a facebook post URL from a plain profile/page URL.
/// Intentionally permissive: post URLs vary widely by surface, and the
/// backend performs the authoritative check.
const FACEBOOK_POST_MARKERS: &[&str] = &[
    "/posts/",
    "/permalink/",
    "/photo",
    "/video",
    "/story",
    "fbid=",
];

pub fn is_single_post_url(platform: Platform, url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }
    match platform {
        Platform::Instagram => INSTAGRAM_POST_RE.is_match(url),
        Platform::Facebook => {
            url.contains("facebook.com")
                && (FACEBOOK_POST_MARKERS.iter().any(|m| url.contains(m))
                    || NUMERIC_SEGMENT_RE.is_match(url))
        }
    }
}

pub fn is_profile_url(platform: Platform, url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return false;
    }
    match platform {
        Platform::Instagram => INSTAGRAM_PROFILE_RE.is_match(url),
        Platform::Facebook => FACEBOOK_SOURCE_RE.is_match(url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instagram_post_and_reel_urls_match() {
        assert!(is_single_post_url(
            Platform::Instagram,
            "https://www.instagram.com/p/ABC123/"
        ));
        assert!(is_single_post_url(
            Platform::Instagram,
            "http://instagram.com/reel/xyz_-42"
        ));
        assert!(is_single_post_url(
            Platform::Instagram,
            "https://www.instagram.com/p/ABC123/?utm_source=share"
        ));
    }

    #[test]
    fn instagram_urls_without_post_segment_fail() {
        assert!(!is_single_post_url(
            Platform::Instagram,
            "https://www.instagram.com/username/"
        ));
        assert!(!is_single_post_url(
            Platform::Instagram,
            "https://www.instagram.com/stories/username/123/"
        ));
        assert!(!is_single_post_url(
            Platform::Instagram,
            "https://example.com/p/ABC123/"
        ));
    }

    #[test]
    fn empty_and_whitespace_input_always_fails() {
        for platform in [Platform::Instagram, Platform::Facebook] {
            assert!(!is_single_post_url(platform, ""));
            assert!(!is_single_post_url(platform, "   "));
            assert!(!is_profile_url(platform, ""));
            assert!(!is_profile_url(platform, "\t"));
        }
    }

    #[test]
    fn facebook_post_markers_are_accepted() {
        for url in [
            "https://www.facebook.com/groups/mygroup/posts/1234/",
            "https://facebook.com/some.page/permalink/999/",
            "https://www.facebook.com/photo.php?fbid=555",
            "https://www.facebook.com/watch/video/?v=1",
            "https://www.facebook.com/story.php?story_fbid=1&id=2",
            "https://m.facebook.com/123456789/",
        ] {
            assert!(is_single_post_url(Platform::Facebook, url), "{}", url);
        }
    }

    #[test]
    fn bare_facebook_profile_is_not_a_post() {
        assert!(!is_single_post_url(
            Platform::Facebook,
            "https://facebook.com/someuser/"
        ));
        assert!(!is_single_post_url(Platform::Facebook, "https://example.com/posts/1"));
    }

    #[test]
    fn instagram_profile_is_anchored_to_username() {
        assert!(is_profile_url(
            Platform::Instagram,
            "https://www.instagram.com/some.user_name/"
        ));
        assert!(is_profile_url(
            Platform::Instagram,
            "https://instagram.com/username"
        ));
        assert!(!is_profile_url(
            Platform::Instagram,
            "https://www.instagram.com/username/posts/"
        ));
        assert!(!is_profile_url(
            Platform::Instagram,
            "https://www.instagram.com/p/ABC123/"
        ));
    }

    #[test]
    fn facebook_bulk_source_is_broadly_accepted() {
        assert!(is_profile_url(
            Platform::Facebook,
            "https://www.facebook.com/groups/123456/"
        ));
        assert!(is_profile_url(
            Platform::Facebook,
            "https://www.facebook.com/pages/My-Page/987/"
        ));
        assert!(is_profile_url(
            Platform::Facebook,
            "https://facebook.com/profile.php?id=42"
        ));
        assert!(is_profile_url(Platform::Facebook, "https://facebook.com/my.page-name"));
        assert!(!is_profile_url(Platform::Facebook, "https://www.facebook.com/"));
        assert!(!is_profile_url(Platform::Facebook, "https://twitter.com/someuser"));
    }
}
