//! One-shot contact loading.
//!
//! A [`ContactSource`] knows how to fetch the contact list once; a
//! [`LoadTask`] runs that fetch on the tokio runtime and exposes its outcome as
//! a value the UI loop can poll between frames.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, info};

use crate::constants::DEFAULT_CONTACTS_SOURCE;
use crate::models::Contact;

/// Why the contact list could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("malformed contact data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("contact load ended without a result")]
    Aborted,
}

/// Where the contact list lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactSource {
    File(PathBuf),
    Url(String),
}

impl Default for ContactSource {
    fn default() -> Self {
        ContactSource::File(PathBuf::from(DEFAULT_CONTACTS_SOURCE))
    }
}

impl fmt::Display for ContactSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactSource::File(path) => write!(f, "{}", path.display()),
            ContactSource::Url(url) => write!(f, "{}", url),
        }
    }
}

impl ContactSource {
    /// `http://` and `https://` locations are fetched, anything else is a file path
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            ContactSource::Url(trimmed.to_string())
        } else {
            ContactSource::File(PathBuf::from(trimmed))
        }
    }

    /// Read and parse the contact list
    pub async fn fetch(&self) -> Result<Vec<Contact>, LoadError> {
        let body = match self {
            ContactSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| LoadError::Io {
                        path: path.clone(),
                        source,
                    })?
            }
            ContactSource::Url(url) => fetch_url(url).await?,
        };

        let contacts: Vec<Contact> = serde_json::from_str(&body)?;
        Ok(contacts)
    }
}

async fn fetch_url(url: &str) -> Result<String, LoadError> {
    let http_err = |source| LoadError::Http {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url).await.map_err(http_err)?;
    if !response.status().is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    response.text().await.map_err(http_err)
}

/// Result of polling a [`LoadTask`]
#[derive(Debug)]
pub enum LoadPoll {
    Pending,
    /// Returned exactly once
    Finished(Result<Vec<Contact>, LoadError>),
    /// The outcome was already handed out
    Consumed,
}

/// A single background fetch of the contact list.
///
/// Not retried, not cancellable and without timeout: if the fetch never
/// resolves the task stays pending.
pub struct LoadTask {
    source: ContactSource,
    rx: Option<oneshot::Receiver<Result<Vec<Contact>, LoadError>>>,
}

impl LoadTask {
    /// Start fetching on the current tokio runtime
    pub fn spawn(source: ContactSource) -> Self {
        let (tx, rx) = oneshot::channel();
        let task_source = source.clone();

        info!(source = %source, "loading contacts");
        tokio::spawn(async move {
            let outcome = task_source.fetch().await;
            // Receiver gone means the UI shut down first
            let _ = tx.send(outcome);
        });

        Self {
            source,
            rx: Some(rx),
        }
    }

    /// Non-blocking check for the outcome
    pub fn poll(&mut self) -> LoadPoll {
        let Some(rx) = self.rx.as_mut() else {
            return LoadPoll::Consumed;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                self.rx = None;
                LoadPoll::Finished(outcome)
            }
            Err(TryRecvError::Empty) => LoadPoll::Pending,
            Err(TryRecvError::Closed) => {
                debug!(source = %self.source, "load task dropped its sender");
                self.rx = None;
                LoadPoll::Finished(Err(LoadError::Aborted))
            }
        }
    }

}
