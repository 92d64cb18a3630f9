// src/render.rs
use crate::models::{AnalysisResult, Comment, CommentFilter, Mode, Platform, Sentiment};
use crate::view;

pub fn render_dashboard(result: &AnalysisResult, filter: CommentFilter) -> String {
    let mut out = String::new();

    out.push_str("Analysis Results");
    if result.mode == Mode::Bulk {
        let (label, url_label) = match result.platform {
            Platform::Instagram => ("Profile", "Profile"),
            Platform::Facebook => ("Group/Page", "URL"),
        };
        out.push_str(&format!(" - {}\n", label));
        out.push_str(&format!("{}: {}\n", url_label, result.source.url));
        out.push_str(&format!(
            "From: {}\n",
            result.source.from_date.as_deref().unwrap_or("N/A")
        ));
        out.push_str(&format!("Posts: {}\n", result.source.total_posts.unwrap_or(0)));
    } else {
        out.push('\n');
    }

    out.push('\n');
    for card in view::stat_cards(result) {
        match &card.subtitle {
            Some(subtitle) => out.push_str(&format!("{}: {} ({})\n", card.title, card.value, subtitle)),
            None => out.push_str(&format!("{}: {}\n", card.title, card.value)),
        }
    }

    if !result.topic_stats.is_empty() {
        out.push_str("\nNegative Comment Topics:\n");
        for (topic, count) in &result.topic_stats {
            out.push_str(&format!("- {}: {}\n", topic, count));
        }
    }

    let counts = view::tab_counts(result);
    out.push_str(&format!(
        "\nComments [{}] - All ({}) | Positive ({}) | Negative ({}) | Neutral ({})\n",
        filter.label(),
        counts.all,
        counts.positive,
        counts.negative,
        counts.neutral
    ));

    let comments = view::filter_comments(result, filter);
    if comments.is_empty() {
        out.push_str("No comments to display\n");
    } else {
        for comment in comments {
            render_comment(&mut out, comment);
        }
    }

    out
}

fn render_comment(out: &mut String, comment: &Comment) {
    out.push_str(&format!("\n@{}", comment.username));
    if comment.likes > 0 {
        out.push_str(&format!(" ({} likes)", comment.likes));
    }
    out.push('\n');
    out.push_str(&format!("  {}\n", comment.text));
    out.push_str(&format!("  [{}", comment.sentiment.label()));
    if let Some(confidence) = comment.confidence {
        out.push_str(&format!(" ({}%)", (confidence * 100.0).round() as u32));
    }
    out.push(']');
    if comment.sentiment == Sentiment::Negative {
        if let Some(topic) = &comment.topic {
            out.push_str(&format!(" #{}", topic));
        }
    }
    out.push('\n');
}
