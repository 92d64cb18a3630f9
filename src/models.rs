use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Facebook,
}

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Single,
    Bulk,
}

/// User input for one analysis submission, keyed by mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestInput {
    Single {
        url: String,
    },
    Bulk {
        source_url: String,
        from_date: Option<NaiveDate>,
        max_posts: u32,
    },
}

impl RequestInput {
    pub fn mode(&self) -> Mode {
        match self {
            RequestInput::Single { .. } => Mode::Single,
            RequestInput::Bulk { .. } => Mode::Bulk,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// One analyzed comment. Immutable after normalization; the client only
/// tags and aggregates, never rewrites comment content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: Option<String>,
    pub username: String,
    pub text: String,
    pub likes: u64,
    pub sentiment: Sentiment,
    pub confidence: Option<f64>,
    /// Backend-assigned category, present only on negative comments.
    pub topic: Option<String>,
}

/// Counts and percentages as declared by the backend. The client renders
/// these as-is and never recomputes or rounds them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentStats {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
    pub positive_percentage: f64,
    pub negative_percentage: f64,
    pub neutral_percentage: f64,
}

/// topic label -> negative comment count
pub type TopicStats = BTreeMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceDescriptor {
    pub url: String,
    pub from_date: Option<String>,
    pub total_posts: Option<u64>,
}

/// Canonical result of the most recent successful analysis. Built once per
/// response, replaced wholesale on the next submission, discarded on reset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub platform: Platform,
    pub mode: Mode,
    pub source: SourceDescriptor,
    pub total_comments: u64,
    pub sentiment_stats: SentimentStats,
    pub topic_stats: TopicStats,
    /// Flattened, sentiment-tagged, sorted by likes descending (stable).
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CommentFilter {
    #[default]
    All,
    Positive,
    Negative,
    Neutral,
}

impl CommentFilter {
    pub fn matches(self, sentiment: Sentiment) -> bool {
        match self {
            CommentFilter::All => true,
            CommentFilter::Positive => sentiment == Sentiment::Positive,
            CommentFilter::Negative => sentiment == Sentiment::Negative,
            CommentFilter::Neutral => sentiment == Sentiment::Neutral,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CommentFilter::All => "all",
            CommentFilter::Positive => "positive",
            CommentFilter::Negative => "negative",
            CommentFilter::Neutral => "neutral",
        }
    }
}
