pub mod app;
pub mod notification;
pub mod theme;
