//! Envelope writer: initial chunk first, deferred keys as they resolve.

use std::fmt::Display;

use futures::stream::FuturesUnordered;
use futures::{Sink, StreamExt};
use serde_json::Value;

use crate::envelope::ResponseEnvelope;
use crate::error::StreamError;
use crate::sink::EnvelopeSink;

/// Stream an envelope to completion.
///
/// The initial chunk is flushed immediately - nothing waits on deferred
/// keys. Deferred chunks are then emitted in resolution order, not
/// declaration order; a value that recovered into absence settles its key
/// as `null`.
pub async fn stream_envelope<S, E>(
    envelope: ResponseEnvelope<'_>,
    sink: &mut EnvelopeSink<S, E>,
) -> Result<(), StreamError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    sink.send_initial(&envelope.initial_chunk()).await?;

    let mut pending: FuturesUnordered<_> = envelope
        .into_pending()
        .into_iter()
        .map(|(key, fut)| async move { (key, fut.await) })
        .collect();

    while let Some((key, value)) = pending.next().await {
        sink.send_deferred(&key, value.unwrap_or(Value::Null)).await?;
    }

    sink.complete()
}
