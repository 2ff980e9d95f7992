use crate::commands::CmdResult;
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::palette::Palette;
use crate::shelf::Shelf;
use crate::state::AppState;
use crate::store::{self, KeyValueStore};
use crate::theme;
use rand::Rng;

/// Startup, in fixed order: theme, links, palette, first render.
pub fn run<S: KeyValueStore, R: Rng + ?Sized>(
    store: &mut S,
    state: &mut AppState,
    config: &ShelfConfig,
    rng: &mut R,
) -> Result<CmdResult> {
    theme::load_theme(store, &mut state.theme)?;

    state.shelf = Shelf::new(store::load_links(&*store)?);

    state.palette = if config.shuffle_palette {
        Palette::shuffled(rng)
    } else {
        Palette::default()
    };

    state.icon_size = config.favicon_size;
    state.search_term.clear();
    tracing::debug!(links = state.shelf.len(), theme = %state.theme.name, "shelf started");

    Ok(CmdResult::default()
        .with_theme(state.theme.clone())
        .with_view_of(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::render::ShelfView;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::LINKS_SLOT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn restores_theme_and_links() {
        let mut store = StoreFixture::new()
            .with_theme("dark")
            .with_links(3)
            .build();
        let mut state = AppState::default();
        let result = run(
            &mut store,
            &mut state,
            &ShelfConfig::default(),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();

        assert_eq!(state.theme.class, Some("dark-theme"));
        assert_eq!(state.shelf.len(), 3);
        assert_eq!(result.view.unwrap().cards().len(), 3);
    }

    #[test]
    fn fresh_store_starts_light_and_empty() {
        let mut store = InMemoryStore::new();
        let mut state = AppState::default();
        let result = run(
            &mut store,
            &mut state,
            &ShelfConfig::default(),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();

        assert_eq!(state.theme.name, "light");
        assert_eq!(result.view, Some(ShelfView::Empty));
    }

    #[test]
    fn palette_stays_fixed_when_shuffle_is_off() {
        let mut store = InMemoryStore::new();
        let mut state = AppState::default();
        let config = ShelfConfig {
            shuffle_palette: false,
            ..ShelfConfig::default()
        };
        run(&mut store, &mut state, &config, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(state.palette, Palette::default());
    }

    #[test]
    fn corrupt_links_abort_startup() {
        let mut store = InMemoryStore::new();
        store.set(LINKS_SLOT, "[{").unwrap();
        let mut state = AppState::default();
        let err = run(
            &mut store,
            &mut state,
            &ShelfConfig::default(),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap_err();
        assert!(matches!(err, ShelfError::Serialization(_)));
    }
}
