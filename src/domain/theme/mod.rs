pub mod synchronizer;
pub mod types;

pub use synchronizer::ThemeSynchronizer;
pub use types::{ColorScheme, ThemeContext, ThemeOutcome, ThemeParams};
