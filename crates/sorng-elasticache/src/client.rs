//! Transport seam.
//!
//! This crate stops at a finished [`QueryRequest`]. Signing, HTTP and
//! response parsing belong to whatever implements [`QueryTransport`]; the
//! [`ElastiCacheClient`] only pairs a transport with a request factory and
//! resolves the endpoint to post to.

use crate::action::Action;
use crate::config::ElastiCacheConfig;
use crate::error::{ElastiCacheError, ElastiCacheResult};
use crate::operations::ElastiCache;
use crate::request::QueryRequest;
use crate::value::OptionEntry;
use std::sync::Arc;
use tokio::sync::Mutex;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Transport trait
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Delivers a finished request and returns the raw response body.
///
/// Implementations must be `Send + Sync` so they can be shared behind an
/// `Arc` across tasks.
#[async_trait::async_trait]
pub trait QueryTransport: Send + Sync {
    /// Post `request` to `endpoint`. Failures should be reported as
    /// [`ElastiCacheErrorKind::Transport`](crate::error::ElastiCacheErrorKind::Transport).
    async fn send(&self, endpoint: &str, request: &QueryRequest) -> ElastiCacheResult<String>;
}

#[async_trait::async_trait]
impl<T: QueryTransport + ?Sized> QueryTransport for Arc<T> {
    async fn send(&self, endpoint: &str, request: &QueryRequest) -> ElastiCacheResult<String> {
        (**self).send(endpoint, request).await
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Recording transport (for testing & offline use)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One request captured by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct SentRequest {
    pub endpoint: String,
    pub request: QueryRequest,
}

/// In-memory transport that records every request and answers with a
/// fixed body, or fails every call when built with [`failing`](Self::failing).
#[derive(Debug, Default)]
pub struct RecordingTransport {
    response: String,
    failure: Option<String>,
    sent: Mutex<Vec<SentRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(body: &str) -> Self {
        Self {
            response: body.to_string(),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Requests received so far, oldest first.
    pub async fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl QueryTransport for RecordingTransport {
    async fn send(&self, endpoint: &str, request: &QueryRequest) -> ElastiCacheResult<String> {
        self.sent.lock().await.push(SentRequest {
            endpoint: endpoint.to_string(),
            request: request.clone(),
        });
        match self.failure {
            Some(ref message) => Err(ElastiCacheError::transport(message)),
            None => Ok(self.response.clone()),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Client
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Request factory plus transport.
pub struct ElastiCacheClient<T: QueryTransport> {
    requests: ElastiCache,
    transport: T,
}

impl<T: QueryTransport> ElastiCacheClient<T> {
    pub fn new(transport: T, config: ElastiCacheConfig) -> Self {
        Self {
            requests: ElastiCache::new(config),
            transport,
        }
    }

    /// The request factory; build a request here, then hand it to [`send`](Self::send).
    pub fn requests(&self) -> &ElastiCache {
        &self.requests
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn endpoint(&self) -> String {
        self.requests.config().endpoint()
    }

    /// Deliver a built request. Transport errors are tagged with the action.
    pub async fn send(&self, request: &QueryRequest) -> ElastiCacheResult<String> {
        let endpoint = self.endpoint();
        log::debug!(
            "POST {} Action={} ({} parameters)",
            endpoint,
            request.action(),
            request.params().len()
        );
        self.transport.send(&endpoint, request).await.map_err(|e| {
            log::warn!("ElastiCache {} failed: {}", request.action(), e.message);
            if e.action.is_some() {
                e
            } else {
                e.with_action(request.action().as_str())
            }
        })
    }

    /// Build and send in one step.
    pub async fn call(&self, action: Action, entries: &[OptionEntry]) -> ElastiCacheResult<String> {
        let request = self.requests.build(action, entries)?;
        self.send(&request).await
    }
}
