pub type TimerCallback = Box<dyn FnOnce()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u32);

/// Port for one-shot timers with explicit cancellation.
pub trait TimerPort {
    /// Runs `callback` once, no sooner than `delay_ms` from now.
    fn schedule(&self, delay_ms: u32, callback: TimerCallback) -> TimerHandle;

    /// Cancels a pending timer. Returns `false` if it already fired or was cancelled.
    fn cancel(&self, handle: TimerHandle) -> bool;
}
