//! User-facing references to links.
//!
//! Ids are long millisecond timestamps, unpleasant to type. The CLI therefore
//! also accepts 1-based positions in the unfiltered shelf. A number that is a
//! valid position wins; anything else is looked up as an id.

use crate::error::{Result, ShelfError};
use crate::model::Link;
use crate::shelf::Shelf;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkSelector {
    Position(usize),
    Id(String),
}

impl fmt::Display for LinkSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkSelector::Position(n) => write!(f, "{}", n),
            LinkSelector::Id(id) => write!(f, "id {}", id),
        }
    }
}

impl FromStr for LinkSelector {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ShelfError::Api("Empty link selector".into()));
        }
        match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(LinkSelector::Position(n)),
            _ => Ok(LinkSelector::Id(s.to_string())),
        }
    }
}

impl LinkSelector {
    /// Finds the selected link, or `None` when nothing matches.
    pub fn find<'a>(&self, shelf: &'a Shelf) -> Option<&'a Link> {
        match self {
            LinkSelector::Position(n) => shelf
                .links()
                .get(n.wrapping_sub(1))
                .or_else(|| shelf.get(&n.to_string())),
            LinkSelector::Id(id) => shelf.get(id),
        }
    }

    pub fn resolve<'a>(&self, shelf: &'a Shelf) -> Result<&'a Link> {
        self.find(shelf)
            .ok_or_else(|| ShelfError::LinkNotFound(self.to_string()))
    }
}

pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<LinkSelector>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf() -> Shelf {
        Shelf::new(vec![
            Link::new("1700000000002", "Newest", "https://a.example"),
            Link::new("1700000000001", "Oldest", "https://b.example"),
        ])
    }

    #[test]
    fn parses_positions_and_ids() {
        assert_eq!("2".parse::<LinkSelector>().unwrap(), LinkSelector::Position(2));
        assert_eq!(
            "abc".parse::<LinkSelector>().unwrap(),
            LinkSelector::Id("abc".into())
        );
        assert_eq!(
            "0".parse::<LinkSelector>().unwrap(),
            LinkSelector::Id("0".into())
        );
        assert!("  ".parse::<LinkSelector>().is_err());
    }

    #[test]
    fn positions_are_one_based() {
        let shelf = shelf();
        let link = LinkSelector::Position(2).resolve(&shelf).unwrap();
        assert_eq!(link.name, "Oldest");
    }

    #[test]
    fn out_of_range_number_falls_back_to_id() {
        let shelf = shelf();
        let link = "1700000000002"
            .parse::<LinkSelector>()
            .unwrap()
            .resolve(&shelf)
            .unwrap();
        assert_eq!(link.name, "Newest");
    }

    #[test]
    fn unknown_selector_is_not_found() {
        let shelf = shelf();
        assert!(matches!(
            LinkSelector::Position(9).resolve(&shelf),
            Err(ShelfError::LinkNotFound(_))
        ));
        assert!(LinkSelector::Id("zzz".into()).find(&shelf).is_none());
    }
}
