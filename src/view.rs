//! Data-only view models derived from the canonical result. No markup or
//! terminal formatting here; render.rs consumes these.

use crate::models::{AnalysisResult, Comment, CommentFilter, Mode, Platform};

/// Comments visible under the given filter, in canonical order (no re-sort).
pub fn filter_comments(result: &AnalysisResult, filter: CommentFilter) -> Vec<&Comment> {
    result
        .comments
        .iter()
        .filter(|c| filter.matches(c.sentiment))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabCounts {
    pub all: u64,
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
}

/// Tab counts come from the backend's declared totals, never from the
/// materialized comment list (which may be truncated for display).
pub fn tab_counts(result: &AnalysisResult) -> TabCounts {
    TabCounts {
        all: result.total_comments,
        positive: result.sentiment_stats.positive,
        negative: result.sentiment_stats.negative,
        neutral: result.sentiment_stats.neutral,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub subtitle: Option<String>,
}

/// Fixed order: Total, Positive, Negative, Neutral. Percentages are shown
/// as provided by the backend, defaulting to 0 when absent.
pub fn stat_cards(result: &AnalysisResult) -> [StatCard; 4] {
    let stats = &result.sentiment_stats;
    [
        StatCard {
            title: "Total Comments",
            value: result.total_comments.to_string(),
            subtitle: None,
        },
        StatCard {
            title: "Positive",
            value: format!("{}%", stats.positive_percentage),
            subtitle: Some(format!("{} comments", stats.positive)),
        },
        StatCard {
            title: "Negative",
            value: format!("{}%", stats.negative_percentage),
            subtitle: Some(format!("{} comments", stats.negative)),
        },
        StatCard {
            title: "Neutral",
            value: format!("{}%", stats.neutral_percentage),
            subtitle: Some(format!("{} comments", stats.neutral)),
        },
    ]
}

/// Mode/platform-specific loading message, fixed four-entry lookup.
pub fn loading_message(platform: Platform, mode: Mode) -> &'static str {
    match (platform, mode) {
        (Platform::Instagram, Mode::Single) => "Analyzing Instagram Post...",
        (Platform::Instagram, Mode::Bulk) => "Analyzing Instagram Profile...",
        (Platform::Facebook, Mode::Single) => "Analyzing Facebook Post...",
        (Platform::Facebook, Mode::Bulk) => "Analyzing Facebook Group...",
    }
}

pub fn success_notification(result: &AnalysisResult) -> String {
    match result.mode {
        Mode::Bulk => format!(
            "Analysis completed! Analyzed {} posts with {} comments.",
            result.source.total_posts.unwrap_or(0),
            result.total_comments
        ),
        Mode::Single => "Analysis completed successfully!".to_string(),
    }
}
