//! Converts raw backend payloads into the canonical `AnalysisResult`.

use tracing::{debug, error};

use crate::api_types::{ApiAnalysis, ApiComment, ApiCommentBuckets, ApiComments, ApiErrorDetails};
use crate::error::ClientError;
use crate::models::{
    AnalysisResult, Comment, Mode, Platform, Sentiment, SentimentStats, SourceDescriptor,
};

/// Backend failure text: the error message, then solutions (or suggestions
/// when no solutions are present) as additional lines. The concatenation
/// order is part of the contract.
pub fn compose_error_message(error: Option<&str>, details: Option<&ApiErrorDetails>) -> String {
    let mut message = error.unwrap_or("Analysis failed").to_string();
    if let Some(details) = details {
        let lines = if !details.solutions.is_empty() {
            &details.solutions
        } else {
            &details.suggestions
        };
        if !lines.is_empty() {
            message.push_str("\n\n");
            message.push_str(&lines.join("\n"));
        }
    }
    message
}

fn domain_comment(raw: ApiComment, sentiment: Sentiment) -> Comment {
    Comment {
        id: raw.id,
        username: raw.username.unwrap_or_else(|| "unknown".to_string()),
        text: raw.text,
        likes: raw.likes.unwrap_or(0),
        sentiment,
        confidence: raw.confidence,
        topic: raw.topic,
    }
}

/// Bucket origin is authoritative: an inline sentiment tag on a bucketed
/// comment is ignored in favor of the bucket it arrived in.
fn flatten_buckets(buckets: ApiCommentBuckets) -> Vec<Comment> {
    let tag = |list: Vec<ApiComment>, sentiment: Sentiment| {
        list.into_iter().map(move |c| domain_comment(c, sentiment))
    };
    tag(buckets.positive, Sentiment::Positive)
        .chain(tag(buckets.negative, Sentiment::Negative))
        .chain(tag(buckets.neutral, Sentiment::Neutral))
        .collect()
}

fn flatten(layout: Option<ApiComments>) -> Vec<Comment> {
    match layout {
        Some(ApiComments::Buckets(buckets)) => flatten_buckets(buckets),
        Some(ApiComments::Flat(list)) => list
            .into_iter()
            .map(|c| {
                let sentiment = c.sentiment.unwrap_or(Sentiment::Neutral);
                domain_comment(c, sentiment)
            })
            .collect(),
        None => Vec::new(),
    }
}

pub fn normalize(
    platform: Platform,
    mode: Mode,
    request_url: &str,
    data: ApiAnalysis,
) -> Result<AnalysisResult, ClientError> {
    // Every downstream view depends on the declared stats; a success payload
    // without them must not be partially rendered.
    let stats = match data.sentiment_stats {
        Some(s) => s,
        None => {
            error!("Success payload missing sentiment_stats - platform={}, mode={:?}", platform.label(), mode);
            return Err(ClientError::MalformedPayload("sentiment_stats"));
        }
    };

    // all_comments takes precedence over comments when both are present.
    let mut comments = flatten(data.all_comments.or(data.comments));

    // Stable sort: ties keep the positive -> negative -> neutral concat order.
    comments.sort_by(|a, b| b.likes.cmp(&a.likes));

    let source = SourceDescriptor {
        url: data
            .profile_url
            .or(data.url)
            .or(data.group_url)
            .unwrap_or_else(|| request_url.to_string()),
        from_date: data.from_date,
        total_posts: data.total_posts,
    };

    debug!(
        "Normalized analysis - total_comments={}, materialized={}, topics={}",
        data.total_comments,
        comments.len(),
        data.topic_stats.len()
    );

    Ok(AnalysisResult {
        platform,
        mode,
        source,
        total_comments: data.total_comments,
        sentiment_stats: SentimentStats {
            positive: stats.positive,
            negative: stats.negative,
            neutral: stats.neutral,
            positive_percentage: stats.positive_percentage,
            negative_percentage: stats.negative_percentage,
            neutral_percentage: stats.neutral_percentage,
        },
        topic_stats: data.topic_stats,
        comments,
    })
}
