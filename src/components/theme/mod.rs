pub mod theme_ctx;
pub mod themes;

pub mod prelude {
    pub use super::theme_ctx::imports::*;
    pub use super::themes::{Theme, Themes, UnknownTheme};

    #[cfg(test)]
    pub use super::theme_ctx::MockSelectTheme;
}
