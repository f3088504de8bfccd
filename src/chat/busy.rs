use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "request in flight" indicator.
///
/// Clones observe the same flag, so a UI task can poll it while the
/// view-model awaits the network.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Raise the flag until the returned guard is dropped.
    pub fn begin(&self) -> BusyGuard {
        self.0.store(true, Ordering::SeqCst);
        BusyGuard(self.0.clone())
    }
}

/// Clears the busy flag on drop, including when the owning future is
/// cancelled or unwinds.
#[derive(Debug)]
#[must_use = "the flag is cleared as soon as the guard is dropped"]
pub struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_clears_on_drop() {
        let flag = BusyFlag::new();
        let observer = flag.clone();
        assert!(!observer.is_busy());
        {
            let _guard = flag.begin();
            assert!(observer.is_busy());
        }
        assert!(!observer.is_busy());
    }

    #[test]
    fn test_guard_clears_on_panic() {
        let flag = BusyFlag::new();
        let inner = flag.clone();
        let result = std::panic::catch_unwind(move || {
            let _guard = inner.begin();
            panic!("boom");
        });
        assert!(result.is_err());
        assert!(!flag.is_busy());
    }

    #[tokio::test]
    async fn test_guard_clears_when_future_cancelled() {
        let flag = BusyFlag::new();
        let inner = flag.clone();
        let task = tokio::spawn(async move {
            let _guard = inner.begin();
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        });
        tokio::task::yield_now().await;
        task.abort();
        let _ = task.await;
        assert!(!flag.is_busy());
    }
}
