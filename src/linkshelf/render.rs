//! Turns the shelf into what the UI shows.
//!
//! [`render`] is a pure function of the links, the search term, the palette
//! and the icon size. UIs redraw from its output after every event.

use crate::favicon::FaviconChain;
use crate::model::Link;
use crate::palette::{CardColor, Palette};
use crate::shelf::{filter_indexed, validate_url};

pub const LINK_REL: &str = "noopener noreferrer";

/// How a card's link opens: always a new browsing context, isolated from the
/// shelf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub href: String,
    pub new_context: bool,
    pub rel: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// 0-based position among the visible cards.
    pub index: usize,
    /// 1-based position in the unfiltered shelf, the number selectors accept.
    pub position: usize,
    pub id: String,
    pub name: String,
    pub url: String,
    pub host: String,
    pub color: CardColor,
    pub target: LinkTarget,
    pub delete_label: String,
    pub favicon: FaviconChain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShelfView {
    /// Nothing stored at all.
    Empty,
    /// Links exist but none match the term.
    NoResults { term: String },
    Cards(Vec<Card>),
}

impl ShelfView {
    pub fn cards(&self) -> &[Card] {
        match self {
            ShelfView::Cards(cards) => cards,
            _ => &[],
        }
    }

    /// The empty-state text, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            ShelfView::Empty => Some("Your shelf is empty. Add a link to get started.".to_string()),
            ShelfView::NoResults { term } => Some(format!("No links match \"{}\".", term)),
            ShelfView::Cards(_) => None,
        }
    }
}

pub fn render(links: &[Link], search_term: &str, palette: &Palette, icon_size: u32) -> ShelfView {
    let visible = filter_indexed(links, search_term);

    let mut cards = Vec::with_capacity(visible.len());
    for (shelf_index, link) in visible {
        let index = cards.len();
        match build_card(link, index, shelf_index + 1, palette, icon_size) {
            Some(card) => cards.push(card),
            None => tracing::warn!(id = %link.id, url = %link.url, "skipping card with unparseable url"),
        }
    }

    if !cards.is_empty() {
        ShelfView::Cards(cards)
    } else if links.is_empty() || search_term.trim().is_empty() {
        // Also covers a shelf whose every stored URL is unusable.
        ShelfView::Empty
    } else {
        ShelfView::NoResults {
            term: search_term.to_string(),
        }
    }
}

fn build_card(
    link: &Link,
    index: usize,
    position: usize,
    palette: &Palette,
    icon_size: u32,
) -> Option<Card> {
    let parsed = validate_url(&link.url).ok()?;
    let host = parsed.host_str()?.to_string();
    Some(Card {
        index,
        position,
        id: link.id.clone(),
        name: link.name.clone(),
        url: link.url.clone(),
        color: palette.color_at(index),
        target: LinkTarget {
            href: link.url.clone(),
            new_context: true,
            rel: LINK_REL,
        },
        delete_label: format!("Delete {}", link.name),
        favicon: FaviconChain::for_host(&host, icon_size),
        host,
    })
}
