//! Request lifecycle: Idle -> (validate) -> Submitting -> Success | Failure.
//! Exactly one request may be outstanding; validation failures never reach
//! the network.

use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use crate::api_types::{ApiAnalysis, ApiEnvelope};
use crate::error::{ClientError, InputError};
use crate::models::{AnalysisResult, CommentFilter, Mode, Platform, RequestInput};
use crate::normalize;
use crate::request::{self, AnalysisRequest};
use crate::view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Transient: the synchronous validation chain runs inside `submit`,
    /// so this phase is never observable once `submit` returns.
    Validating,
    Submitting,
    Success,
    Failure,
}

/// Notification surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; still Idle, network never contacted.
    Rejected(InputError),
    /// A request was already outstanding; this submit was a no-op.
    InFlight,
    /// The request ran to completion, successfully or not.
    Completed(Notice),
}

pub struct Session {
    platform: Platform,
    mode: Mode,
    phase: Phase,
    result: Option<AnalysisResult>,
    filter: CommentFilter,
    /// Kept across failures so a transient error does not force a retype.
    last_input: Option<RequestInput>,
    client: Client,
    api_base: String,
}

impl Session {
    pub fn new(
        platform: Platform,
        mode: Mode,
        api_base: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self {
            platform,
            mode,
            phase: Phase::Idle,
            result: None,
            filter: CommentFilter::All,
            last_input: None,
            client,
            api_base: api_base.into(),
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn filter(&self) -> CommentFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: CommentFilter) {
        self.filter = filter;
    }

    pub fn last_input(&self) -> Option<&RequestInput> {
        self.last_input.as_ref()
    }

    /// Run one submission through the full lifecycle.
    pub async fn submit(&mut self, input: RequestInput) -> SubmitOutcome {
        if self.phase == Phase::Submitting {
            warn!("Submit ignored - a request is already in flight");
            return SubmitOutcome::InFlight;
        }
        debug_assert_eq!(input.mode(), self.mode, "input variant must match session mode");

        self.phase = Phase::Validating;
        let request = match request::build_request(self.platform, &input) {
            Ok(request) => request,
            Err(err) => {
                debug!("Validation failed - field={:?}, message={}", err.field, err.message);
                self.last_input = Some(input);
                // Back to Idle without a network call or loading message.
                self.phase = Phase::Idle;
                return SubmitOutcome::Rejected(err);
            }
        };

        self.phase = Phase::Submitting;
        self.last_input = Some(input);
        info!("{}", view::loading_message(self.platform, self.mode));

        let start = Instant::now();
        let outcome = self.dispatch(&request).await;
        let elapsed = start.elapsed();

        let data = match outcome {
            Ok(data) => data,
            Err(err) => return self.fail(err),
        };
        let result = match normalize::normalize(
            self.platform,
            self.mode,
            request.payload.source_url(),
            data,
        ) {
            Ok(result) => result,
            Err(err) => return self.fail(err),
        };

        info!(
            "Analysis completed - duration={:.2}s, total_comments={}, materialized={}",
            elapsed.as_secs_f32(),
            result.total_comments,
            result.comments.len()
        );
        let notice = Notice::Success(view::success_notification(&result));
        self.install(result);
        SubmitOutcome::Completed(notice)
    }

    async fn dispatch(&self, request: &AnalysisRequest) -> Result<ApiAnalysis, ClientError> {
        let endpoint = format!("{}{}", self.api_base, request.endpoint.path());
        debug!("Dispatching analysis request - endpoint={}", endpoint);

        let response = self
            .client
            .post(&endpoint)
            .json(&request.payload)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        // Backend failures arrive as success:false with a non-2xx status;
        // the envelope is decoded regardless of status code.
        let status = response.status();
        debug!("Response received - status={}", status);
        let envelope: ApiEnvelope = response.json().await.map_err(ClientError::Transport)?;

        if !envelope.success {
            return Err(ClientError::Backend(normalize::compose_error_message(
                envelope.error.as_deref(),
                envelope.details.as_ref(),
            )));
        }
        envelope.data.ok_or(ClientError::MalformedPayload("data"))
    }

    /// Install a new canonical result wholesale; the previous result and
    /// view state are discarded, never merged.
    fn install(&mut self, result: AnalysisResult) {
        self.result = Some(result);
        self.filter = CommentFilter::All;
        self.phase = Phase::Success;
    }

    fn fail(&mut self, err: ClientError) -> SubmitOutcome {
        match &err {
            ClientError::MalformedPayload(field) => {
                error!("Aborting render - malformed success payload, missing {}", field)
            }
            ClientError::Backend(_) => warn!("Backend reported failure"),
            _ => warn!("Analysis request failed - {}", err),
        }
        self.phase = Phase::Failure;
        SubmitOutcome::Completed(Notice::Error(err.to_string()))
    }

    /// Explicit return to Idle; discards the result and view state.
    pub fn reset(&mut self) {
        self.result = None;
        self.filter = CommentFilter::All;
        self.last_input = None;
        self.phase = Phase::Idle;
    }

    #[cfg(test)]
    fn force_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    #[cfg(test)]
    fn install_for_test(&mut self, result: AnalysisResult) {
        self.install(result);
    }
}
