//! Deferred-phase fetch policy.
//!
//! Everything fetched after the critical phase goes through `recover`:
//! a failure after response headers are committed must never abort the
//! stream, so deferred fetches return success-or-absent instead of
//! raising.

use std::future::Future;

/// The outcome of a deferred fetch: the value, or nothing.
///
/// There is deliberately no error variant. Callers are forced to handle
/// absence at the type level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredValue<T> {
    Ready(T),
    Absent,
}

impl<T> DeferredValue<T> {
    /// True when no value arrived.
    pub fn is_absent(&self) -> bool {
        matches!(self, DeferredValue::Absent)
    }

    /// Convert into an `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            DeferredValue::Ready(value) => Some(value),
            DeferredValue::Absent => None,
        }
    }

    /// Borrow the value if present.
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            DeferredValue::Ready(value) => Some(value),
            DeferredValue::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for DeferredValue<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => DeferredValue::Ready(value),
            None => DeferredValue::Absent,
        }
    }
}

/// Run a deferred fetch, converting any error into absence.
///
/// This is the only way deferred data enters the envelope; nothing an
/// underlying fetch does can propagate as a raised failure.
pub async fn recover<F, T>(fut: F) -> DeferredValue<T>
where
    F: Future<Output = anyhow::Result<T>>,
{
    match fut.await {
        Ok(value) => DeferredValue::Ready(value),
        Err(_) => DeferredValue::Absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recover_passes_through_success() {
        let value = recover(async { Ok::<_, anyhow::Error>(42) }).await;
        assert_eq!(value, DeferredValue::Ready(42));
    }

    #[tokio::test]
    async fn test_recover_absorbs_failure() {
        let value: DeferredValue<u32> =
            recover(async { Err(anyhow::anyhow!("upstream exploded")) }).await;
        assert!(value.is_absent());
        assert_eq!(value.into_option(), None);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(DeferredValue::from(Some(1)), DeferredValue::Ready(1));
        assert!(DeferredValue::<u32>::from(None).is_absent());
    }
}
