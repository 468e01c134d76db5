//! The response envelope: resolved critical keys plus pending deferred
//! futures.

use futures::future::BoxFuture;
use futures::FutureExt;
use serde::Serialize;
use serde_json::Value;

use crate::error::StreamError;

/// Manifest key listing the deferred keys still pending when the initial
/// chunk is flushed. Clients treat every listed key as optional.
pub const PENDING_MANIFEST_KEY: &str = "@pending";

/// A deferred value in flight. Resolves to `None` when the fetch was
/// recovered into absence.
pub type DeferredFuture<'a> = BoxFuture<'a, Option<Value>>;

/// A single response envelope: the critical portion, fully materialized,
/// and the deferred portion as named in-flight futures.
pub struct ResponseEnvelope<'a> {
    resolved: serde_json::Map<String, Value>,
    pending: Vec<(String, DeferredFuture<'a>)>,
}

impl<'a> ResponseEnvelope<'a> {
    /// Create an empty envelope.
    pub fn new() -> Self {
        Self {
            resolved: serde_json::Map::new(),
            pending: Vec::new(),
        }
    }

    /// Add a fully-resolved critical value.
    pub fn insert_resolved(
        &mut self,
        key: impl Into<String>,
        value: impl Serialize,
    ) -> Result<(), StreamError> {
        let value = serde_json::to_value(value).map_err(|e| StreamError::Serialize(e.to_string()))?;
        self.resolved.insert(key.into(), value);
        Ok(())
    }

    /// Add a deferred value under a key.
    pub fn push_deferred<F>(&mut self, key: impl Into<String>, fut: F)
    where
        F: std::future::Future<Output = Option<Value>> + Send + 'a,
    {
        self.pending.push((key.into(), fut.boxed()));
    }

    /// The resolved critical map.
    pub fn resolved(&self) -> &serde_json::Map<String, Value> {
        &self.resolved
    }

    /// Keys still pending, in declaration order.
    pub fn pending_keys(&self) -> Vec<&str> {
        self.pending.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Build the initial chunk: every critical key, fully resolved, plus
    /// the pending-key manifest.
    pub fn initial_chunk(&self) -> Value {
        let mut chunk = self.resolved.clone();
        chunk.insert(
            PENDING_MANIFEST_KEY.to_string(),
            Value::Array(
                self.pending
                    .iter()
                    .map(|(k, _)| Value::String(k.clone()))
                    .collect(),
            ),
        );
        Value::Object(chunk)
    }

    /// Take the pending futures for streaming.
    pub fn into_pending(self) -> Vec<(String, DeferredFuture<'a>)> {
        self.pending
    }
}

impl Default for ResponseEnvelope<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ResponseEnvelope<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseEnvelope")
            .field("resolved", &self.resolved.keys().collect::<Vec<_>>())
            .field("pending", &self.pending_keys())
            .finish()
    }
}
