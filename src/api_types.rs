use serde::Deserialize;
use std::collections::BTreeMap;

use crate::models::Sentiment;

/// Response envelope shared by all three analysis endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    pub data: Option<ApiAnalysis>,
    pub error: Option<String>,
    pub details: Option<ApiErrorDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorDetails {
    #[serde(default)]
    pub solutions: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Success payload. `sentiment_stats` stays optional here so the normalizer
/// can treat its absence as a hard error instead of a serde default.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiAnalysis {
    #[serde(default)]
    pub total_comments: u64,
    pub sentiment_stats: Option<ApiSentimentStats>,
    #[serde(default)]
    pub topic_stats: BTreeMap<String, u64>,
    pub all_comments: Option<ApiComments>,
    pub comments: Option<ApiComments>,
    pub profile_url: Option<String>,
    pub url: Option<String>,
    pub group_url: Option<String>,
    pub from_date: Option<String>,
    pub total_posts: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSentimentStats {
    #[serde(default)]
    pub positive: u64,
    #[serde(default)]
    pub negative: u64,
    #[serde(default)]
    pub neutral: u64,
    // Percentages arrive as floats, rounded server-side to two decimals;
    // whole values still serialize with a fractional part (e.g. 50.0).
    #[serde(default)]
    pub positive_percentage: f64,
    #[serde(default)]
    pub negative_percentage: f64,
    #[serde(default)]
    pub neutral_percentage: f64,
}

/// Comment data arrives either as three sentiment-keyed buckets or as a
/// pre-flattened list, depending on endpoint and backend version.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiComments {
    Buckets(ApiCommentBuckets),
    Flat(Vec<ApiComment>),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiCommentBuckets {
    #[serde(default)]
    pub positive: Vec<ApiComment>,
    #[serde(default)]
    pub negative: Vec<ApiComment>,
    #[serde(default)]
    pub neutral: Vec<ApiComment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiComment {
    pub id: Option<String>,
    pub username: Option<String>,
    #[serde(default)]
    pub text: String,
    pub likes: Option<u64>,
    pub sentiment: Option<Sentiment>,
    pub confidence: Option<f64>,
    pub topic: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_decodes_error_shape() {
        let env: ApiEnvelope = serde_json::from_value(json!({
            "success": false,
            "error": "Post is private",
            "details": { "solutions": ["Use a public post"] }
        }))
        .unwrap();
        assert!(!env.success);
        assert_eq!(env.error.as_deref(), Some("Post is private"));
        assert_eq!(env.details.unwrap().solutions, vec!["Use a public post"]);
    }

    #[test]
    fn bucketed_comments_decode_as_buckets() {
        let c: ApiComments = serde_json::from_value(json!({
            "positive": [{"text": "love it", "likes": 3}],
            "negative": [],
            "neutral": []
        }))
        .unwrap();
        match c {
            ApiComments::Buckets(b) => {
                assert_eq!(b.positive.len(), 1);
                assert_eq!(b.positive[0].likes, Some(3));
            }
            ApiComments::Flat(_) => panic!("expected buckets"),
        }
    }

    #[test]
    fn flat_comments_decode_as_list() {
        let c: ApiComments = serde_json::from_value(json!([
            {"text": "meh", "sentiment": "neutral"}
        ]))
        .unwrap();
        match c {
            ApiComments::Flat(list) => {
                assert_eq!(list.len(), 1);
                assert_eq!(list[0].sentiment, Some(Sentiment::Neutral));
            }
            ApiComments::Buckets(_) => panic!("expected flat list"),
        }
    }

    #[test]
    fn sentiment_percentages_decode_as_floats() {
        // Server-side rounding yields values like 33.33, and whole values
        // still carry a fractional part.
        let stats: ApiSentimentStats = serde_json::from_value(json!({
            "positive": 1,
            "negative": 1,
            "neutral": 1,
            "positive_percentage": 33.33,
            "negative_percentage": 33.33,
            "neutral_percentage": 33.33
        }))
        .unwrap();
        assert_eq!(stats.positive_percentage, 33.33);

        let stats: ApiSentimentStats = serde_json::from_value(json!({
            "positive": 2,
            "negative": 2,
            "neutral": 0,
            "positive_percentage": 50.0,
            "negative_percentage": 50.0,
            "neutral_percentage": 0.0
        }))
        .unwrap();
        assert_eq!(stats.positive_percentage, 50.0);
        assert_eq!(stats.neutral_percentage, 0.0);
    }

    #[test]
    fn analysis_tolerates_missing_optional_fields() {
        let data: ApiAnalysis = serde_json::from_value(json!({
            "total_comments": 0
        }))
        .unwrap();
        assert!(data.sentiment_stats.is_none());
        assert!(data.topic_stats.is_empty());
        assert!(data.all_comments.is_none());
        assert!(data.comments.is_none());
    }
}
