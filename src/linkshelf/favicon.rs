//! # Favicon fallback chain
//!
//! Each card shows an icon from an ordered list of candidate sources. The UI
//! starts with the first source and reports every failed load back to the
//! chain, which answers with the next source to try:
//!
//! ```text
//! Service(google) --error--> Service(duckduckgo) --error--> Generic (terminal)
//! ```
//!
//! The generic icon is an embedded SVG and needs no network. Once it is
//! showing, further errors are ignored so a broken renderer cannot loop. A
//! successful load settles the chain at whatever tier produced it.

pub const DEFAULT_ICON_SIZE: u32 = 64;

/// Embedded globe icon, served as a data URI.
pub const GENERIC_ICON: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='none' stroke='%23888' stroke-width='2'%3E%3Ccircle cx='12' cy='12' r='10'/%3E%3Cpath d='M2 12h20M12 2a15 15 0 0 1 0 20M12 2a15 15 0 0 0 0 20'/%3E%3C/svg%3E";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaviconTier {
    Primary,
    Secondary,
    Generic,
}

impl FaviconTier {
    fn next(self) -> Option<FaviconTier> {
        match self {
            FaviconTier::Primary => Some(FaviconTier::Secondary),
            FaviconTier::Secondary => Some(FaviconTier::Generic),
            FaviconTier::Generic => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChainState {
    Trying(FaviconTier),
    Loaded(FaviconTier),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaviconChain {
    sources: [String; 3],
    state: ChainState,
}

impl FaviconChain {
    pub fn for_host(host: &str, size: u32) -> Self {
        Self {
            sources: [
                format!("https://www.google.com/s2/favicons?domain={}&sz={}", host, size),
                format!("https://icons.duckduckgo.com/ip3/{}.ico", host),
                GENERIC_ICON.to_string(),
            ],
            state: ChainState::Trying(FaviconTier::Primary),
        }
    }

    pub fn tier(&self) -> FaviconTier {
        match self.state {
            ChainState::Trying(t) | ChainState::Loaded(t) => t,
        }
    }

    /// The source currently displayed.
    pub fn current(&self) -> &str {
        self.source(self.tier())
    }

    pub fn source(&self, tier: FaviconTier) -> &str {
        match tier {
            FaviconTier::Primary => &self.sources[0],
            FaviconTier::Secondary => &self.sources[1],
            FaviconTier::Generic => &self.sources[2],
        }
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Whether a load error would still change the source.
    pub fn accepts_errors(&self) -> bool {
        matches!(self.state, ChainState::Trying(t) if t.next().is_some())
    }

    /// Handles a failed load. Returns the next source, or `None` once the
    /// chain is terminal or settled.
    pub fn on_error(&mut self) -> Option<&str> {
        let ChainState::Trying(tier) = self.state else {
            return None;
        };
        let next = tier.next()?;
        self.state = ChainState::Trying(next);
        Some(self.source(next))
    }

    pub fn on_load(&mut self) {
        self.state = ChainState::Loaded(self.tier());
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, ChainState::Loaded(_))
    }
}
