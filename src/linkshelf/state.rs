//! Everything a running shelf holds in memory.
//!
//! One [`AppState`] is owned by the API facade; command functions receive it
//! by reference, so there is no hidden shared state between handlers.

use crate::favicon::DEFAULT_ICON_SIZE;
use crate::palette::Palette;
use crate::render::{render, ShelfView};
use crate::shelf::Shelf;
use crate::theme::ThemeState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Name,
    Url,
}

/// The add-link form as the UI last reported it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkForm {
    pub name: String,
    pub url: String,
    pub focus: FormField,
}

impl LinkForm {
    pub fn reset(&mut self) {
        self.name.clear();
        self.url.clear();
        self.focus = FormField::Name;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub shelf: Shelf,
    pub palette: Palette,
    pub search_term: String,
    pub theme: ThemeState,
    pub form: LinkForm,
    pub icon_size: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            shelf: Shelf::default(),
            palette: Palette::default(),
            search_term: String::new(),
            theme: ThemeState::default(),
            form: LinkForm::default(),
            icon_size: DEFAULT_ICON_SIZE,
        }
    }
}

impl AppState {
    /// Renders the shelf with the current search term.
    pub fn view(&self) -> ShelfView {
        render(
            self.shelf.links(),
            &self.search_term,
            &self.palette,
            self.icon_size,
        )
    }
}
