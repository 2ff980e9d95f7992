use crate::config::ShelfConfig;
use crate::model::Link;
use crate::render::ShelfView;
use crate::state::AppState;
use crate::theme::ThemeState;

pub mod add;
pub mod config;
pub mod delete;
pub mod favicon;
pub mod list;
pub mod search;
pub mod start;
pub mod theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_links: Vec<Link>,
    pub view: Option<ShelfView>,
    pub theme: Option<ThemeState>,
    pub config: Option<ShelfConfig>,
    pub favicon_sources: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_links(mut self, links: Vec<Link>) -> Self {
        self.affected_links = links;
        self
    }

    /// Attaches a fresh rendering of `state`.
    pub fn with_view_of(mut self, state: &AppState) -> Self {
        self.view = Some(state.view());
        self
    }

    pub fn with_theme(mut self, theme: ThemeState) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_favicon_sources(mut self, sources: Vec<String>) -> Self {
        self.favicon_sources = sources;
        self
    }
}
