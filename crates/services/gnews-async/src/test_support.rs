//! Test-only utilities: environment guards and an in-memory transport.

use std::sync::{Arc, Mutex, PoisonError};

use futures::future::BoxFuture;
use reqwest::StatusCode;

use crate::error::GNewsError;
use crate::transport::{RawResponse, Transport};

/// RAII guard for temporarily setting an environment variable.
///
/// The variable is automatically restored to its previous state (or removed if it
/// was not set) when the guard is dropped.
pub struct EnvGuard {
    key: &'static str,
    prev: Option<String>,
}

impl EnvGuard {
    /// Set an environment variable temporarily.
    ///
    /// # Safety
    ///
    /// This function uses `unsafe` because `std::env::set_var` can cause data races
    /// if called concurrently. Safe when used with `#[serial(env)]`.
    #[must_use]
    pub fn set(key: &'static str, val: &str) -> Self {
        let prev = std::env::var(key).ok();
        unsafe { std::env::set_var(key, val) };
        Self { key, prev }
    }

    /// Remove an environment variable temporarily.
    ///
    /// # Safety
    ///
    /// This function uses `unsafe` because `std::env::remove_var` can cause data races
    /// if called concurrently. Safe when used with `#[serial(env)]`.
    #[must_use]
    pub fn remove(key: &'static str) -> Self {
        let prev = std::env::var(key).ok();
        unsafe { std::env::remove_var(key) };
        Self { key, prev }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.prev {
            Some(v) => unsafe { std::env::set_var(self.key, v) },
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}

/// A request observed by [`MockTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Full URL passed to the transport
    pub url: String,
    /// Query pairs in the order they were sent
    pub query: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Value of the first query pair named `key`
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
enum Reply {
    Response(RawResponse),
    Fail(String),
}

/// In-memory [`Transport`] returning a canned reply and recording every call.
///
/// Clones share the same call log.
#[derive(Debug, Clone)]
pub struct MockTransport {
    reply: Reply,
    calls: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    /// Replies with `status` and a raw body
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<bytes::Bytes>) -> Self {
        Self::with_reply(Reply::Response(RawResponse::new(status, body)))
    }

    /// Replies `200 OK` with a JSON body
    #[must_use]
    pub fn ok(body: serde_json::Value) -> Self {
        Self::new(StatusCode::OK, body.to_string())
    }

    /// Fails every call with a transport error carrying `message`
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Fail(message.into()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Requests seen so far
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedRequest> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Transport for MockTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        query: &'a [(String, String)],
    ) -> BoxFuture<'a, Result<RawResponse, GNewsError>> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedRequest {
                url: url.to_string(),
                query: query.to_vec(),
            });

        let reply = self.reply.clone();
        Box::pin(async move {
            match reply {
                Reply::Response(r) => Ok(r),
                Reply::Fail(msg) => Err(GNewsError::Transport(msg.into())),
            }
        })
    }
}
