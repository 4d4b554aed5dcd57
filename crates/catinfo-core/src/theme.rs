//! Light/dark mode and the document-wide presentation context.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatInfoError;

/// Global visual palette selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Value written to the document root's `data-theme` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = CatInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(CatInfoError::UnknownTheme(s.to_string())),
        }
    }
}

/// Sink that applies a theme to the document-level styling root.
pub trait StyleRoot {
    fn apply(&mut self, mode: ThemeMode);
}

impl<F> StyleRoot for F
where
    F: FnMut(ThemeMode),
{
    fn apply(&mut self, mode: ThemeMode) {
        self(mode)
    }
}

/// Process-wide presentation context.
///
/// Holds the current mode and forwards every change to its [`StyleRoot`].
pub struct PresentationContext {
    mode: ThemeMode,
    root: Box<dyn StyleRoot>,
}

impl Default for PresentationContext {
    fn default() -> Self {
        Self::new(|_: ThemeMode| {})
    }
}

impl fmt::Debug for PresentationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentationContext")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl PresentationContext {
    /// Create a context in light mode. The root is not touched until the
    /// first [`set`](Self::set).
    pub fn new(root: impl StyleRoot + 'static) -> Self {
        Self {
            mode: ThemeMode::Light,
            root: Box::new(root),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn set(&mut self, mode: ThemeMode) {
        tracing::debug!(%mode, "applying theme");
        self.mode = mode;
        self.root.apply(mode);
    }

    /// Swap the styling root, re-applying the current mode to it.
    pub fn attach(&mut self, root: impl StyleRoot + 'static) {
        self.root = Box::new(root);
        self.root.apply(self.mode);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn toggled_is_an_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }

    #[test]
    fn parse_theme() {
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("Light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!(matches!(
            "sepia".parse::<ThemeMode>(),
            Err(CatInfoError::UnknownTheme(_))
        ));
    }

    #[test]
    fn context_forwards_to_root() {
        let applied = Rc::new(RefCell::new(Vec::new()));
        let sink = applied.clone();
        let mut ctx = PresentationContext::new(move |mode: ThemeMode| sink.borrow_mut().push(mode));

        assert_eq!(ctx.mode(), ThemeMode::Light);
        assert!(applied.borrow().is_empty());

        ctx.set(ThemeMode::Dark);
        ctx.set(ThemeMode::Light);
        assert_eq!(*applied.borrow(), vec![ThemeMode::Dark, ThemeMode::Light]);
    }

    #[test]
    fn attach_reapplies_current_mode() {
        let mut ctx = PresentationContext::default();
        ctx.set(ThemeMode::Dark);

        let applied = Rc::new(RefCell::new(Vec::new()));
        let sink = applied.clone();
        ctx.attach(move |mode: ThemeMode| sink.borrow_mut().push(mode));
        assert_eq!(*applied.borrow(), vec![ThemeMode::Dark]);
    }
}
