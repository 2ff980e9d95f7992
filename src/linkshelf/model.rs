use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single bookmark on the shelf.
///
/// Field names are the persisted names; records written by older shelves
/// decode as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl Link {
    pub fn new(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Milliseconds since the Unix epoch, the source of link ids.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// The closed set of themes the switcher offers.
///
/// Persisted names outside this set are stored and reported verbatim but
/// render as [`Theme::Light`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Sepia,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Sepia];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Sepia => "sepia",
        }
    }

    pub fn from_name(name: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Style class applied to the document scope; light is the base style.
    pub fn style_class(&self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark-theme"),
            Theme::Sepia => Some("sepia-theme"),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
