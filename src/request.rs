//! Request shaping: endpoint selection, payload construction, and the
//! ordered validation chain. First failure wins; the network is never
//! contacted from here.

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::error::InputError;
use crate::models::{Platform, RequestInput};
use crate::validate;

pub const MAX_POSTS_DEFAULT: u32 = 20;
pub const MAX_POSTS_LIMIT: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKey {
    AnalyzeSingle,
    AnalyzeProfile,
    AnalyzeFacebookGroup,
}

impl EndpointKey {
    pub fn path(self) -> &'static str {
        match self {
            EndpointKey::AnalyzeSingle => "/analyze",
            EndpointKey::AnalyzeProfile => "/analyze-profile",
            EndpointKey::AnalyzeFacebookGroup => "/analyze-facebook-group",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RequestPayload {
    Single {
        url: String,
        platform: Platform,
    },
    Profile {
        profile_url: String,
        from_date: String,
        max_posts: u32,
    },
    Group {
        group_url: String,
        from_date: String,
        max_posts: u32,
    },
}

impl RequestPayload {
    /// The URL the user submitted, as sent to the backend.
    pub fn source_url(&self) -> &str {
        match self {
            RequestPayload::Single { url, .. } => url,
            RequestPayload::Profile { profile_url, .. } => profile_url,
            RequestPayload::Group { group_url, .. } => group_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub endpoint: EndpointKey,
    pub payload: RequestPayload,
}

/// Strip the query string and guarantee exactly one trailing slash.
/// Idempotent: normalizing an already-normalized URL is a no-op.
pub fn normalize_group_url(url: &str) -> String {
    let base = url.split('?').next().unwrap_or(url);
    let mut out = base.to_string();
    if !out.ends_with('/') {
        out.push('/');
    }
    out
}

pub fn build_request(
    platform: Platform,
    input: &RequestInput,
) -> Result<AnalysisRequest, InputError> {
    build_request_at(platform, input, Utc::now().date_naive())
}

/// Validation chain, in contract order: (1) non-empty URL, (2) URL shape,
/// (3) bulk from_date present, (4) from_date not after `today`.
pub fn build_request_at(
    platform: Platform,
    input: &RequestInput,
    today: NaiveDate,
) -> Result<AnalysisRequest, InputError> {
    match input {
        RequestInput::Single { url } => {
            let url = url.trim();
            if url.is_empty() {
                return Err(InputError::url(match platform {
                    Platform::Instagram => "Please enter an Instagram URL",
                    Platform::Facebook => "Please enter a Facebook post URL",
                }));
            }
            if !validate::is_single_post_url(platform, url) {
                return Err(InputError::url(match platform {
                    Platform::Instagram => "Please enter a valid Instagram post or reel URL",
                    Platform::Facebook => {
                        "Please enter a valid Facebook post URL. Copy the full URL from your browser."
                    }
                }));
            }
            Ok(AnalysisRequest {
                endpoint: EndpointKey::AnalyzeSingle,
                payload: RequestPayload::Single {
                    url: url.to_string(),
                    platform,
                },
            })
        }
        RequestInput::Bulk {
            source_url,
            from_date,
            max_posts,
        } => {
            let source = source_url.trim();
            if source.is_empty() {
                return Err(InputError::url(match platform {
                    Platform::Instagram => "Please enter an Instagram profile URL",
                    Platform::Facebook => "Please enter a Facebook group URL",
                }));
            }
            if !validate::is_profile_url(platform, source) {
                return Err(InputError::url(match platform {
                    Platform::Instagram => {
                        "Please enter a valid Instagram profile URL (e.g., https://www.instagram.com/username/)"
                    }
                    Platform::Facebook => {
                        "Please enter a valid Facebook URL (group, page, or profile). Example: https://www.facebook.com/username/ or https://www.facebook.com/groups/123456/"
                    }
                }));
            }
            let from_date =
                from_date.ok_or_else(|| InputError::from_date("Please select a start date"))?;
            if from_date > today {
                return Err(InputError::from_date("Start date cannot be in the future"));
            }
            let from_date = from_date.format("%Y-%m-%d").to_string();
            let max_posts = (*max_posts).clamp(1, MAX_POSTS_LIMIT);
            let (endpoint, payload) = match platform {
                Platform::Instagram => (
                    EndpointKey::AnalyzeProfile,
                    RequestPayload::Profile {
                        profile_url: source.to_string(),
                        from_date,
                        max_posts,
                    },
                ),
                Platform::Facebook => (
                    EndpointKey::AnalyzeFacebookGroup,
                    RequestPayload::Group {
                        group_url: normalize_group_url(source),
                        from_date,
                        max_posts,
                    },
                ),
            };
            Ok(AnalysisRequest { endpoint, payload })
        }
    }
}
