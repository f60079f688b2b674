pub mod imports {
    pub use super::{SelectTheme, ThemeCtx, ThemeCtxSub, ThemeState, WithTheme};
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeState {
    pub current: Rc<Theme>,
    pub available: Rc<[Theme]>,
}

impl ThemeState {
    pub fn new(theme: Themes) -> Self {
        Self {
            current: Rc::new(theme.into()),
            available: Themes::catalog(),
        }
    }

    fn with_current(self, theme: Themes) -> Self {
        Self {
            current: Rc::new(theme.into()),
            ..self
        }
    }

    /// Resolves `id` against the catalog and returns the state it leads to.
    /// An unknown id leaves the current state to the caller untouched.
    pub fn select(&self, id: &str) -> Result<(Themes, Self), UnknownTheme> {
        let theme = Themes::try_from(id)?;
        Ok((theme, self.clone().with_current(theme)))
    }
}

impl StateDefault for ThemeState {
    fn default_state() -> Self {
        Self::new(Themes::derived())
    }
}

pub type ThemeCtx = StateCtx<ThemeState>;
pub type WithTheme = WithState<ThemeState>;
pub type ThemeCtxSub = StateCtxSub<ThemeState>;

// What the menu needs from whoever owns the active theme
#[cfg_attr(test, mockall::automock)]
pub trait SelectTheme {
    fn select_theme(&self, id: &str);
}

impl SelectTheme for ThemeCtx {
    fn select_theme(&self, id: &str) {
        match self.state.select(id) {
            Ok((theme, next)) => {
                theme.remember();
                self.upstream_fn("select_theme", |_| next);
            }
            Err(e) => console::warn!(e.to_string()),
        }
    }
}

impl ThemeCtxSub {
    pub fn current(&self) -> &Theme {
        &self.as_ref().current
    }

    pub fn available(&self) -> &[Theme] {
        &self.as_ref().available
    }
}

use super::themes::{Theme, Themes, UnknownTheme};
use crate::components::imports::*;
use crate::components::state::imports::*;
