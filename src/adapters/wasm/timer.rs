use crate::ports::{TimerCallback, TimerHandle, TimerPort};
use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

thread_local! {
    static NEXT_HANDLE: Cell<u32> = Cell::new(1);
    static PENDING: RefCell<HashMap<TimerHandle, Timeout>> = RefCell::new(HashMap::new());
}

/// `setTimeout`-backed timer. Cancelling drops the `Timeout`, which clears it.
#[derive(Clone, Copy)]
pub struct BrowserTimer;

impl BrowserTimer {
    pub fn new() -> Self {
        Self
    }

    pub fn pending(&self) -> usize {
        PENDING.with(|pending| pending.borrow().len())
    }
}

impl Default for BrowserTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerPort for BrowserTimer {
    fn schedule(&self, delay_ms: u32, callback: TimerCallback) -> TimerHandle {
        let handle = NEXT_HANDLE.with(|next| {
            let id = next.get();
            next.set(id.wrapping_add(1));
            TimerHandle(id)
        });

        let timeout = Timeout::new(delay_ms, move || {
            let fired = PENDING.with(|pending| pending.borrow_mut().remove(&handle));
            callback();
            drop(fired);
        });
        PENDING.with(|pending| pending.borrow_mut().insert(handle, timeout));
        handle
    }

    fn cancel(&self, handle: TimerHandle) -> bool {
        PENDING.with(|pending| pending.borrow_mut().remove(&handle)).is_some()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_schedule_fires_once() {
        let timer = BrowserTimer::new();
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        timer.schedule(10, Box::new(move || counter.set(counter.get() + 1)));

        TimeoutFuture::new(50).await;

        assert_eq!(fired.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn test_cancel_prevents_firing() {
        let timer = BrowserTimer::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let handle = timer.schedule(10, Box::new(move || flag.set(true)));

        assert!(timer.cancel(handle));
        assert!(!timer.cancel(handle));
        TimeoutFuture::new(50).await;

        assert!(!fired.get());
    }
}
