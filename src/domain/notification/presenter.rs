use super::types::{Banner, BannerBody, BannerId, Severity};
use crate::config::NotificationConfig;
use crate::domain::error::UiError;
use crate::platform::Platform;
use crate::ports::TimerHandle;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU32, Ordering};

// Render targets look banners up by id across the whole page, so ids are
// never reused between presenters.
static NEXT_BANNER_ID: AtomicU32 = AtomicU32::new(1);

/// Shows dismissible banners and closes them after a fixed delay.
///
/// Every shown banner is tracked with its auto-dismiss timer until it is
/// closed, whichever of the manual or timed path comes first.
pub struct NotificationPresenter {
    platform: Platform,
    config: RefCell<NotificationConfig>,
    pending: RefCell<HashMap<BannerId, TimerHandle>>,
}

impl NotificationPresenter {
    pub fn new(platform: Platform, config: NotificationConfig) -> Rc<Self> {
        Rc::new(Self {
            platform,
            config: RefCell::new(config),
            pending: RefCell::new(HashMap::new()),
        })
    }

    /// Replaces the container and delay used for banners shown from now on.
    pub fn reconfigure(&self, config: NotificationConfig) {
        *self.config.borrow_mut() = config;
    }

    /// Shows `message` as escaped text.
    pub fn show(self: &Rc<Self>, message: &str, severity: Severity) -> Result<BannerId, UiError> {
        self.present(severity, BannerBody::Text(message.to_string()))
    }

    /// Shows trusted `markup` verbatim.
    pub fn show_markup(
        self: &Rc<Self>,
        markup: &str,
        severity: Severity,
    ) -> Result<BannerId, UiError> {
        self.present(severity, BannerBody::Markup(markup.to_string()))
    }

    /// Closes a banner and cancels its timer. Returns `false` if the banner
    /// was not pending.
    pub fn dismiss(&self, id: BannerId) -> Result<bool, UiError> {
        let Some(handle) = self.pending.borrow_mut().remove(&id) else {
            return Ok(false);
        };
        self.platform.timer().cancel(handle);
        self.platform.logger().debug(&format!("Banner {id} dismissed"));
        self.platform.render().close_banner(id)
    }

    /// Number of banners shown and not yet closed.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_pending(&self, id: BannerId) -> bool {
        self.pending.borrow().contains_key(&id)
    }

    fn present(self: &Rc<Self>, severity: Severity, body: BannerBody) -> Result<BannerId, UiError> {
        let config = self.config.borrow().clone();
        let id = self.allocate_id();
        let banner = Banner::new(id, severity, body);

        let on_close = {
            let weak = Rc::downgrade(self);
            Rc::new(move || {
                Self::with_presenter(&weak, |presenter| presenter.dismiss(id));
            })
        };
        self.platform
            .render()
            .prepend_banner(&config.container_selector, &banner, on_close)?;

        let on_expire = {
            let weak = Rc::downgrade(self);
            Box::new(move || {
                Self::with_presenter(&weak, |presenter| presenter.expire(id));
            })
        };
        let handle = self
            .platform
            .timer()
            .schedule(config.auto_dismiss_ms, on_expire);
        self.pending.borrow_mut().insert(id, handle);

        self.platform.logger().debug(&format!(
            "Banner {id} shown with severity {}",
            banner.severity
        ));
        Ok(id)
    }

    fn expire(&self, id: BannerId) -> Result<bool, UiError> {
        if self.pending.borrow_mut().remove(&id).is_none() {
            return Ok(false);
        }
        self.platform.logger().debug(&format!("Banner {id} expired"));
        self.platform.render().close_banner(id)
    }

    fn allocate_id(&self) -> BannerId {
        BannerId(NEXT_BANNER_ID.fetch_add(1, Ordering::Relaxed))
    }

    fn with_presenter(
        weak: &Weak<Self>,
        action: impl FnOnce(&Self) -> Result<bool, UiError>,
    ) {
        let Some(presenter) = weak.upgrade() else {
            return;
        };
        if let Err(e) = action(&presenter) {
            presenter
                .platform
                .logger()
                .error(&format!("Failed to close banner: {e}"));
        }
    }
}
