//! # API Facade
//!
//! [`ShelfApi`] is the single controller a UI talks to. It owns the store, the
//! configuration and the [`AppState`], and exposes one method per user
//! interaction:
//!
//! | UI event                 | method                     |
//! |--------------------------|----------------------------|
//! | page load                | [`ShelfApi::start`]        |
//! | add form submitted       | [`ShelfApi::submit_link`]  |
//! | delete button clicked    | [`ShelfApi::delete_links`] |
//! | search input changed     | [`ShelfApi::search`]       |
//! | theme switcher clicked   | [`ShelfApi::select_theme`] |
//!
//! Every handler that changes links has already written them back to the
//! store when it returns, and every handler that affects the card list
//! returns a fresh [`ShelfView`](crate::render::ShelfView) in its result.
//!
//! The facade does no I/O of its own besides the store. Blocking questions go
//! through the [`Prompter`] the caller passes in.

use crate::commands;
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::index::{parse_selectors, LinkSelector};
use crate::model::now_millis;
use crate::prompt::Prompter;
use crate::state::AppState;
use crate::store::KeyValueStore;
use rand::Rng;
use std::path::{Path, PathBuf};

pub struct ShelfApi<S: KeyValueStore> {
    store: S,
    state: AppState,
    config: ShelfConfig,
    config_dir: PathBuf,
}

impl<S: KeyValueStore> ShelfApi<S> {
    pub fn new(store: S, config: ShelfConfig, config_dir: PathBuf) -> Self {
        Self {
            store,
            state: AppState::default(),
            config,
            config_dir,
        }
    }

    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<commands::CmdResult> {
        commands::start::run(&mut self.store, &mut self.state, &self.config, rng)
    }

    pub fn submit_link<P: Prompter + ?Sized>(
        &mut self,
        prompter: &mut P,
        name: &str,
        url: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(
            &mut self.store,
            &mut self.state,
            prompter,
            name,
            url,
            now_millis(),
        )
    }

    /// Deletes the selected links. Confirmation is asked per link unless
    /// `skip_confirm` is set or the config turns it off.
    pub fn delete_links<P: Prompter + ?Sized, I: AsRef<str>>(
        &mut self,
        prompter: &mut P,
        inputs: &[I],
        skip_confirm: bool,
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(inputs)?;
        let confirm = self.config.confirm_delete && !skip_confirm;
        commands::delete::run(
            &mut self.store,
            &mut self.state,
            prompter,
            &selectors,
            confirm,
        )
    }

    pub fn search(&mut self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&mut self.state, term)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.state)
    }

    pub fn select_theme(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::theme::run(&mut self.store, &mut self.state, name)
    }

    pub fn favicon(&self, input: &str, failures: usize) -> Result<commands::CmdResult> {
        let selector = input.parse::<LinkSelector>()?;
        commands::favicon::run(&self.state, &selector, failures)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::fixtures::ScriptedPrompter;
    use crate::render::ShelfView;
    use crate::store::load_links;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn started(store: InMemoryStore) -> ShelfApi<InMemoryStore> {
        let mut api = ShelfApi::new(store, ShelfConfig::default(), PathBuf::from("unused"));
        api.start(&mut StdRng::seed_from_u64(3)).unwrap();
        api
    }

    #[test]
    fn submit_then_list() {
        let mut api = started(InMemoryStore::new());
        let mut prompter = ScriptedPrompter::new();
        api.submit_link(&mut prompter, "Docs", "docs.rs").unwrap();

        let view = api.list().unwrap().view.unwrap();
        assert_eq!(view.cards().len(), 1);
        assert_eq!(view.cards()[0].target.href, "https://docs.rs");
        assert_eq!(load_links(api.store()).unwrap().len(), 1);
    }

    #[test]
    fn delete_asks_by_default() {
        let mut api = started(StoreFixture::new().with_links(2).build());
        let mut prompter = ScriptedPrompter::answering(&[true]);
        api.delete_links(&mut prompter, &["1"], false).unwrap();
        assert_eq!(prompter.questions.len(), 1);
        assert_eq!(api.state().shelf.len(), 1);
    }

    #[test]
    fn delete_skip_confirm_asks_nothing() {
        let mut api = started(StoreFixture::new().with_links(2).build());
        let mut prompter = ScriptedPrompter::new();
        api.delete_links(&mut prompter, &["1", "2"], true).unwrap();
        assert!(prompter.questions.is_empty());
        assert!(api.state().shelf.is_empty());
    }

    #[test]
    fn search_persists_across_mutations() {
        let mut api = started(
            StoreFixture::new()
                .with_link("2", "GitHub", "https://github.com")
                .with_link("1", "Reddit", "https://reddit.com")
                .build(),
        );
        api.search("git").unwrap();
        let mut prompter = ScriptedPrompter::new();
        let result = api.submit_link(&mut prompter, "Hacker News", "news.ycombinator.com").unwrap();
        let view = result.view.unwrap();
        assert_eq!(view.cards().len(), 1);
        assert_eq!(view.cards()[0].name, "GitHub");
    }

    #[test]
    fn theme_round_trips_through_restart() {
        let mut api = started(InMemoryStore::new());
        api.select_theme("sepia").unwrap();

        let store = api.store().clone();
        let restarted = started(store);
        assert_eq!(restarted.state().theme.class, Some("sepia-theme"));
    }

    #[test]
    fn emptied_shelf_shows_empty_state() {
        let mut api = started(StoreFixture::new().with_links(1).build());
        let mut prompter = ScriptedPrompter::new();
        let result = api.delete_links(&mut prompter, &["1"], true).unwrap();
        assert_eq!(result.view, Some(ShelfView::Empty));
    }
}
