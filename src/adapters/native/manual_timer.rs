use crate::ports::{TimerCallback, TimerHandle, TimerPort};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

struct Scheduled {
    due: u64,
    callback: TimerCallback,
}

/// Virtual-time timer. Nothing fires until [`ManualTimer::advance`] is called.
pub struct ManualTimer {
    now: Cell<u64>,
    next_handle: Cell<u32>,
    scheduled: RefCell<BTreeMap<TimerHandle, Scheduled>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self {
            now: Cell::new(0),
            next_handle: Cell::new(1),
            scheduled: RefCell::new(BTreeMap::new()),
        }
    }

    /// Elapsed virtual milliseconds.
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn pending(&self) -> usize {
        self.scheduled.borrow().len()
    }

    /// Moves virtual time forward, firing due callbacks in deadline order.
    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        while let Some((due, callback)) = self.pop_due(target) {
            self.now.set(due);
            callback();
        }
        self.now.set(target);
    }

    fn pop_due(&self, target: u64) -> Option<(u64, TimerCallback)> {
        let mut scheduled = self.scheduled.borrow_mut();
        let handle = scheduled
            .iter()
            .filter(|(_, entry)| entry.due <= target)
            .min_by_key(|(handle, entry)| (entry.due, **handle))
            .map(|(handle, _)| *handle)?;
        scheduled
            .remove(&handle)
            .map(|entry| (entry.due, entry.callback))
    }
}

impl Default for ManualTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerPort for ManualTimer {
    fn schedule(&self, delay_ms: u32, callback: TimerCallback) -> TimerHandle {
        let handle = TimerHandle(self.next_handle.get());
        self.next_handle.set(handle.0.wrapping_add(1));
        self.scheduled.borrow_mut().insert(
            handle,
            Scheduled {
                due: self.now.get() + u64::from(delay_ms),
                callback,
            },
        );
        handle
    }

    fn cancel(&self, handle: TimerHandle) -> bool {
        self.scheduled.borrow_mut().remove(&handle).is_some()
    }
}
