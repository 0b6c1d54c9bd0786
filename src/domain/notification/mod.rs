pub mod presenter;
pub mod types;

pub use presenter::NotificationPresenter;
pub use types::{Banner, BannerBody, BannerId, Severity};
