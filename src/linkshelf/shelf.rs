//! The in-process link list and its mutators.
//!
//! A [`Shelf`] is ordered newest first. It never touches storage itself: the
//! command layer writes the whole list back after every mutation.

use crate::error::{Result, ShelfError};
use crate::model::Link;
use url::Url;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shelf {
    links: Vec<Link>,
}

impl Shelf {
    pub fn new(links: Vec<Link>) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    /// Adds a link at the front of the shelf.
    ///
    /// Returns `Ok(None)` without touching the shelf when either field is
    /// blank. The URL is normalized before validation; an unparseable URL
    /// leaves the shelf unchanged.
    pub fn add(&mut self, name: &str, url: &str, now_millis: i64) -> Result<Option<Link>> {
        let name = name.trim();
        let url = url.trim();
        if name.is_empty() || url.is_empty() {
            return Ok(None);
        }

        let url = normalize_url(url);
        validate_url(&url)?;

        let link = Link::new(self.next_id(now_millis), name, url);
        self.links.insert(0, link.clone());
        Ok(Some(link))
    }

    /// Removes the link with `id`. No-op when absent.
    pub fn remove(&mut self, id: &str) -> Option<Link> {
        let pos = self.links.iter().position(|l| l.id == id)?;
        let removed = self.links.remove(pos);
        self.links.retain(|l| l.id != id);
        Some(removed)
    }

    // Two adds inside the same millisecond would share an id; step forward
    // until the id is free.
    fn next_id(&self, now_millis: i64) -> String {
        let mut candidate = now_millis;
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }
}

/// Case-insensitive substring match on `name`. A blank term keeps everything.
pub fn filter<'a>(links: &'a [Link], term: &str) -> Vec<&'a Link> {
    filter_indexed(links, term)
        .into_iter()
        .map(|(_, link)| link)
        .collect()
}

/// Like [`filter`], keeping each match's 0-based position in `links`.
pub fn filter_indexed<'a>(links: &'a [Link], term: &str) -> Vec<(usize, &'a Link)> {
    let term = term.trim();
    let term_lower = term.to_lowercase();
    links
        .iter()
        .enumerate()
        .filter(|(_, l)| term.is_empty() || l.name.to_lowercase().contains(&term_lower))
        .collect()
}

/// Prefixes `https://` unless the input already carries an http(s) scheme.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

fn has_http_scheme(s: &str) -> bool {
    ["http://", "https://"].iter().any(|prefix| {
        s.len() >= prefix.len()
            && s.is_char_boundary(prefix.len())
            && s[..prefix.len()].eq_ignore_ascii_case(prefix)
    })
}

/// An absolute URL with a host, as favicon lookup needs one.
pub fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| ShelfError::InvalidUrl(format!("{} ({})", url, e)))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ShelfError::InvalidUrl(format!("{} (missing host)", url)));
    }
    Ok(parsed)
}
