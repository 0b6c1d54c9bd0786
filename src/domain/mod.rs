pub mod error;
pub mod notification;
pub mod theme;
