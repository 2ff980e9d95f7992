//! Theme controller.
//!
//! [`ThemeState`] stands in for the document style scope: at most one theme
//! class is active, and each switcher control knows whether it is pressed.

use crate::error::Result;
use crate::model::Theme;
use crate::store::{self, KeyValueStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOption {
    pub theme: Theme,
    pub pressed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    /// Name as requested, kept verbatim even when unknown.
    pub name: String,
    pub class: Option<&'static str>,
    pub options: [ThemeOption; 3],
}

impl Default for ThemeState {
    fn default() -> Self {
        let mut state = Self {
            name: String::new(),
            class: None,
            options: Theme::ALL.map(|theme| ThemeOption {
                theme,
                pressed: false,
            }),
        };
        state.show(Theme::Light.name());
        state
    }
}

impl ThemeState {
    /// The theme that is actually visible. Unknown names look like light.
    pub fn effective(&self) -> Theme {
        Theme::from_name(&self.name).unwrap_or_default()
    }

    fn show(&mut self, name: &str) {
        self.class = Theme::from_name(name).and_then(|t| t.style_class());
        for option in self.options.iter_mut() {
            option.pressed = option.theme.name() == name;
        }
        self.name = name.to_string();
    }
}

/// Applies `name` and persists it verbatim.
pub fn apply_theme<S: KeyValueStore + ?Sized>(
    store: &mut S,
    state: &mut ThemeState,
    name: &str,
) -> Result<()> {
    state.show(name);
    store::save_theme(store, name)?;
    tracing::debug!(theme = name, class = ?state.class, "applied theme");
    Ok(())
}

/// Restores the persisted theme, falling back to light.
pub fn load_theme<S: KeyValueStore + ?Sized>(store: &mut S, state: &mut ThemeState) -> Result<()> {
    let name = store::load_theme(&*store)?.unwrap_or_else(|| Theme::Light.name().to_string());
    apply_theme(store, state, &name)
}
