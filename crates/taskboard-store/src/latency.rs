//! Simulated backend latency.

use std::time::Duration;

use tracing::trace;

/// Store operation kinds that carry their own delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    /// Read the whole collection.
    GetAll,
    /// Read one record.
    GetById,
    /// Insert a record.
    Create,
    /// Merge a partial update.
    Update,
    /// Remove a record.
    Delete,
    /// Rearrange the task sequence.
    Reorder,
}

/// Per-operation delays.
///
/// [`Latency::none`] is what tests use; the binary builds one from settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latency {
    /// Delay before [`StoreOp::GetAll`].
    pub get_all: Duration,
    /// Delay before [`StoreOp::GetById`].
    pub get_by_id: Duration,
    /// Delay before [`StoreOp::Create`].
    pub create: Duration,
    /// Delay before [`StoreOp::Update`].
    pub update: Duration,
    /// Delay before [`StoreOp::Delete`].
    pub delete: Duration,
    /// Delay before [`StoreOp::Reorder`].
    pub reorder: Duration,
}

impl Latency {
    /// No delay at all. Operations still yield once.
    #[must_use]
    pub const fn none() -> Self {
        Self::uniform(Duration::ZERO)
    }

    /// The same delay for every operation.
    #[must_use]
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            get_all: delay,
            get_by_id: delay,
            create: delay,
            update: delay,
            delete: delay,
            reorder: delay,
        }
    }

    /// Delay configured for `op`.
    #[must_use]
    pub fn for_op(&self, op: StoreOp) -> Duration {
        match op {
            StoreOp::GetAll => self.get_all,
            StoreOp::GetById => self.get_by_id,
            StoreOp::Create => self.create,
            StoreOp::Update => self.update,
            StoreOp::Delete => self.delete,
            StoreOp::Reorder => self.reorder,
        }
    }

    /// Wait out the delay for `op`.
    ///
    /// A zero delay still suspends once so completion is never synchronous.
    pub async fn wait(&self, op: StoreOp) {
        let delay = self.for_op(op);
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
            trace!(?op, delay_ms, "simulating latency");
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_zero_everywhere() {
        let latency = Latency::none();
        for op in [
            StoreOp::GetAll,
            StoreOp::GetById,
            StoreOp::Create,
            StoreOp::Update,
            StoreOp::Delete,
            StoreOp::Reorder,
        ] {
            assert!(latency.for_op(op).is_zero());
        }
        assert_eq!(latency, Latency::default());
    }

    #[test]
    fn for_op_picks_matching_field() {
        let latency = Latency {
            create: Duration::from_millis(400),
            delete: Duration::from_millis(250),
            ..Latency::none()
        };
        assert_eq!(latency.for_op(StoreOp::Create), Duration::from_millis(400));
        assert_eq!(latency.for_op(StoreOp::Delete), Duration::from_millis(250));
        assert!(latency.for_op(StoreOp::Update).is_zero());
    }

    #[tokio::test(start_paused = true)]
    async fn wait_sleeps_for_configured_delay() {
        let latency = Latency::uniform(Duration::from_millis(300));
        let start = tokio::time::Instant::now();
        latency.wait(StoreOp::GetAll).await;
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test]
    async fn zero_delay_still_completes() {
        Latency::none().wait(StoreOp::Reorder).await;
    }
}
