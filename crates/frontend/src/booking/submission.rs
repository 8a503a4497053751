//! Submission flow: send a captured form, then redirect or log.
//!
//! The flow only talks to the outside world through [`Transport`],
//! [`Navigator`] and [`DiagnosticSink`], so it runs the same in the browser
//! and in native tests.

use async_trait::async_trait;
use contracts::booking::{ApiMessage, FormSnapshot};
use serde::de::IgnoredAny;
use thiserror::Error;

use super::config::SubmissionConfig;

/// Status and raw body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a form snapshot as a JSON POST.
///
/// `Err` means the request never produced a response.
#[async_trait(?Send)]
pub trait Transport {
    async fn post_json(&self, path: &str, snapshot: &FormSnapshot) -> Result<HttpReply, String>;
}

/// Full-page navigation.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Receives the diagnostic line written when a submission fails.
pub trait DiagnosticSink {
    fn write(&self, line: &str);
}

/// Writes diagnostics to the browser console through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn write(&self, line: &str) {
        log::error!("{}", line);
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0}")]
    Transport(String),
    /// The status is kept for callers, the message never carries it.
    #[error("Network response was not ok")]
    HttpStatus { status: u16 },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Failed to read form: {0}")]
    Capture(String),
}

pub struct SubmissionHandler<T, N, S> {
    config: SubmissionConfig,
    transport: T,
    navigator: N,
    sink: S,
}

impl<T, N, S> SubmissionHandler<T, N, S>
where
    T: Transport,
    N: Navigator,
    S: DiagnosticSink,
{
    pub fn new(config: SubmissionConfig, transport: T, navigator: N, sink: S) -> Self {
        Self {
            config,
            transport,
            navigator,
            sink,
        }
    }

    /// POST the snapshot and check that the response body is JSON.
    ///
    /// The body content is skipped, not materialized.
    pub async fn submit(&self, snapshot: &FormSnapshot) -> Result<(), SubmitError> {
        let reply = self
            .transport
            .post_json(&self.config.endpoint, snapshot)
            .await
            .map_err(SubmitError::Transport)?;

        if !reply.is_success() {
            if let Ok(api_message) = serde_json::from_str::<ApiMessage>(&reply.body) {
                log::debug!(
                    "{} rejected submission ({}): {}",
                    self.config.endpoint,
                    reply.status,
                    api_message.message
                );
            }
            return Err(SubmitError::HttpStatus {
                status: reply.status,
            });
        }

        serde_json::from_str::<IgnoredAny>(&reply.body)
            .map(|_| ())
            .map_err(|e| SubmitError::Parse(e.to_string()))
    }

    /// Run one submission to completion: redirect on success, log on failure.
    ///
    /// Nothing guards against a second call while one is pending; each call
    /// sends its own request.
    pub async fn on_submit(&self, snapshot: FormSnapshot) -> Result<(), SubmitError> {
        match self.submit(&snapshot).await {
            Ok(()) => {
                self.navigator.navigate(&self.config.redirect_to);
                Ok(())
            }
            Err(e) => {
                self.report(&e);
                Err(e)
            }
        }
    }

    pub fn report(&self, error: &SubmitError) {
        self.sink.write(&format!("Error: {}", error));
    }
}
