//! Deferred close for popover calendars.

use std::time::Duration;

use log::trace;
use tokio::task::JoinHandle;

/// Delay between completing a range and closing the picker, long enough
/// for the range highlight to render.
pub const RANGE_CLOSE_DELAY: Duration = Duration::from_millis(400);

/// A cancelable scheduled close.
///
/// Completing a range closes the picker after [`RANGE_CLOSE_DELAY`]
/// rather than immediately. The pending close must be cancelled when the
/// picker unmounts or reopens, otherwise a stale close fires against the
/// next session; dropping the handle cancels automatically.
///
/// Requires a tokio runtime.
///
/// # Example
///
/// ```ignore
/// let mut close = DeferredClose::new();
/// if let Some(CalendarEvent::RangeCompleted { .. }) = calendar.select_date(date) {
///     let open = self.open.clone();
///     close.schedule(RANGE_CLOSE_DELAY, move || open.set(false));
/// }
/// ```
#[derive(Debug, Default)]
pub struct DeferredClose {
    handle: Option<JoinHandle<()>>,
}

impl DeferredClose {
    /// Create with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `on_close` to run after `delay`.
    ///
    /// Only the most recent schedule can fire; any earlier pending close
    /// is cancelled first.
    pub fn schedule<F>(&mut self, delay: Duration, on_close: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        trace!("close scheduled in {delay:?}");
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_close();
        }));
    }

    /// Cancel the pending close, if any.
    ///
    /// The callback either has not started and never will, or it already
    /// ran to completion; it is never interrupted midway.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            trace!("pending close cancelled");
        }
    }

    /// Whether a scheduled close is still waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DeferredClose {
    fn drop(&mut self) {
        self.cancel();
    }
}
