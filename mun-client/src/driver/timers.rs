use core::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

#[cfg(feature = "tokio_timer")]
use {std::time::Duration, tokio::time::Sleep};

#[derive(Eq, Hash, Clone, Copy, PartialEq, Debug)]
pub enum TimerId {
    /// Refetch the profile after a confirmed payment.
    Resync,
}

pub trait TimerManager: Send + Unpin + 'static {
    fn add_or_update_timeout(&mut self, id: TimerId, timeout_ms: u64);
    fn remove_timeout(&mut self, id: TimerId);
    fn remove_all_timeouts(&mut self);
    fn poll_timeout(&mut self, cx: &mut Context<'_>) -> Poll<TimerId>;
}

pub(crate) struct TimerDriver<T: TimerManager> {
    timer: T,
}

impl<T: TimerManager> TimerDriver<T> {
    pub fn new(timer: T) -> Self {
        Self { timer }
    }

    pub fn add_or_update(&mut self, id: TimerId, timeout_ms: u64) {
        self.timer.add_or_update_timeout(id, timeout_ms);
    }

    pub fn remove_timeout(&mut self, id: TimerId) {
        self.timer.remove_timeout(id);
    }

    pub fn remove_all_timeouts(&mut self) {
        self.timer.remove_all_timeouts();
    }
}

impl<T: TimerManager> Future for TimerDriver<T> {
    type Output = TimerId;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.timer.poll_timeout(cx)
    }
}

/// Holds at most one pending deadline; adding a timer replaces whatever was pending.
#[cfg(feature = "tokio_timer")]
#[derive(Default)]
pub struct TokioTimerManager {
    pending: Option<(TimerId, Pin<Box<Sleep>>)>,
}

#[cfg(feature = "tokio_timer")]
impl TokioTimerManager {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "tokio_timer")]
impl TimerManager for TokioTimerManager {
    fn add_or_update_timeout(&mut self, id: TimerId, timeout_ms: u64) {
        let sleep = tokio::time::sleep(Duration::from_millis(timeout_ms));
        self.pending = Some((id, Box::pin(sleep)));
    }

    fn remove_timeout(&mut self, id: TimerId) {
        if matches!(self.pending, Some((pending, _)) if pending == id) {
            self.pending = None;
        }
    }

    fn remove_all_timeouts(&mut self) {
        self.pending = None;
    }

    fn poll_timeout(&mut self, cx: &mut Context<'_>) -> Poll<TimerId> {
        let Some((id, sleep)) = &mut self.pending else {
            return Poll::Pending;
        };
        match sleep.as_mut().poll(cx) {
            Poll::Ready(()) => {
                let fired = *id;
                // one-shot
                self.pending = None;
                Poll::Ready(fired)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
