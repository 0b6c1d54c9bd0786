use crate::domain::error::UiError;
use crate::domain::theme::ThemeContext;
use crate::ports::{HostPort, ViewportCallback};
use std::cell::{Cell, RefCell};

/// In-memory host for headless runs and tests.
///
/// The context can be swapped at any time, mirroring a host that mutates its
/// theme between viewport events.
pub struct MemoryHost {
    context: RefCell<Option<ThemeContext>>,
    expand_calls: Cell<usize>,
    subscribers: RefCell<Vec<ViewportCallback>>,
}

impl MemoryHost {
    pub fn with_context(context: ThemeContext) -> Self {
        Self {
            context: RefCell::new(Some(context)),
            expand_calls: Cell::new(0),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// A host whose context object is missing entirely.
    pub fn unavailable() -> Self {
        Self {
            context: RefCell::new(None),
            expand_calls: Cell::new(0),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    pub fn set_context(&self, context: ThemeContext) {
        *self.context.borrow_mut() = Some(context);
    }

    /// Fires every registered viewport callback once.
    pub fn emit_viewport_changed(&self) {
        let subscribers: Vec<ViewportCallback> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }

    pub fn expand_calls(&self) -> usize {
        self.expand_calls.get()
    }

    pub fn viewport_subscribers(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::with_context(ThemeContext::default())
    }
}

impl HostPort for MemoryHost {
    fn theme_context(&self) -> Result<ThemeContext, UiError> {
        self.context
            .borrow()
            .clone()
            .ok_or_else(|| UiError::host_unavailable("No host context"))
    }

    fn expand(&self) -> Result<(), UiError> {
        self.expand_calls.set(self.expand_calls.get() + 1);
        Ok(())
    }

    fn on_viewport_changed(&self, callback: ViewportCallback) -> Result<(), UiError> {
        self.subscribers.borrow_mut().push(callback);
        Ok(())
    }
}
