//! Platform-controlled envelope sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use serde_json::Value;
use storefront_core::TimingContext;

use crate::error::StreamError;

/// State of the envelope sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Initial state, critical chunk not yet sent.
    Initial,
    /// Initial chunk sent, deferred chunks may stream.
    InitialSent,
    /// Response completed.
    Completed,
}

/// Envelope sink enforcing the critical-first streaming contract.
///
/// Generic over the underlying byte sink so it works with any
/// `Sink<Vec<u8>>` implementation the platform provides. Chunks are
/// newline-delimited JSON objects; the first carries every critical key,
/// each later one a single deferred key.
pub struct EnvelopeSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    keys_sent: Vec<String>,
}

impl<S, E> EnvelopeSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new envelope sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            keys_sent: Vec::new(),
        }
    }

    /// Send the initial chunk. Must be called before any deferred chunk.
    pub async fn send_initial(&mut self, chunk: &Value) -> Result<(), StreamError> {
        if self.state != SinkState::Initial {
            return Err(StreamError::InitialAlreadySent);
        }

        self.write_line(chunk).await?;
        self.timing.mark("initial_sent");
        self.state = SinkState::InitialSent;

        Ok(())
    }

    /// Send one deferred value, tagged by its key.
    pub async fn send_deferred(&mut self, key: &str, value: Value) -> Result<(), StreamError> {
        match self.state {
            SinkState::Initial => return Err(StreamError::InitialNotSent),
            SinkState::Completed => return Err(StreamError::Completed),
            SinkState::InitialSent => {}
        }

        let mut chunk = serde_json::Map::new();
        chunk.insert(key.to_string(), value);
        self.write_line(&Value::Object(chunk)).await?;
        self.timing.mark_deferred_sent(key);
        self.keys_sent.push(key.to_string());

        Ok(())
    }

    /// Complete the response. No chunk may follow.
    pub fn complete(&mut self) -> Result<(), StreamError> {
        if self.state == SinkState::Completed {
            return Err(StreamError::Completed);
        }
        self.state = SinkState::Completed;
        self.timing.mark("complete");
        Ok(())
    }

    /// Deferred keys sent so far, in resolution order.
    pub fn keys_sent(&self) -> &[String] {
        &self.keys_sent
    }

    /// Timing context reference.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }

    async fn write_line(&mut self, chunk: &Value) -> Result<(), StreamError> {
        let mut bytes =
            serde_json::to_vec(chunk).map_err(|e| StreamError::Serialize(e.to_string()))?;
        bytes.push(b'\n');
        self.inner
            .send(bytes)
            .await
            .map_err(|e| StreamError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collector() -> (
        futures::channel::mpsc::UnboundedSender<Vec<u8>>,
        futures::channel::mpsc::UnboundedReceiver<Vec<u8>>,
    ) {
        futures::channel::mpsc::unbounded()
    }

    #[tokio::test]
    async fn test_deferred_before_initial_is_refused() {
        let (tx, _rx) = collector();
        let mut sink = EnvelopeSink::new(tx, TimingContext::new());
        let err = sink.send_deferred("recommendations", json!(null)).await.unwrap_err();
        assert!(matches!(err, StreamError::InitialNotSent));
    }

    #[tokio::test]
    async fn test_initial_can_only_be_sent_once() {
        let (tx, _rx) = collector();
        let mut sink = EnvelopeSink::new(tx, TimingContext::new());
        sink.send_initial(&json!({"a": 1})).await.unwrap();
        let err = sink.send_initial(&json!({"a": 1})).await.unwrap_err();
        assert!(matches!(err, StreamError::InitialAlreadySent));
    }

    #[tokio::test]
    async fn test_nothing_streams_after_completion() {
        let (tx, _rx) = collector();
        let mut sink = EnvelopeSink::new(tx, TimingContext::new());
        sink.send_initial(&json!({})).await.unwrap();
        sink.complete().unwrap();
        let err = sink.send_deferred("late", json!(1)).await.unwrap_err();
        assert!(matches!(err, StreamError::Completed));
    }

    #[tokio::test]
    async fn test_chunks_are_newline_delimited_json() {
        let (tx, mut rx) = collector();
        let mut sink = EnvelopeSink::new(tx, TimingContext::new());
        sink.send_initial(&json!({"pageData": {}})).await.unwrap();
        sink.send_deferred("reviews", json!([1, 2])).await.unwrap();

        let first = rx.try_next().unwrap().unwrap();
        assert_eq!(first.last(), Some(&b'\n'));
        let parsed: Value = serde_json::from_slice(&first).unwrap();
        assert!(parsed.get("pageData").is_some());

        let second = rx.try_next().unwrap().unwrap();
        let parsed: Value = serde_json::from_slice(&second).unwrap();
        assert_eq!(parsed, json!({"reviews": [1, 2]}));
        assert_eq!(sink.keys_sent(), ["reviews"]);
    }

    #[tokio::test]
    async fn test_initial_flush_is_timed() {
        let (tx, _rx) = collector();
        let mut sink = EnvelopeSink::new(tx, TimingContext::new());
        sink.send_initial(&json!({})).await.unwrap();
        assert!(sink.timing().time_to_initial().is_some());
    }
}
