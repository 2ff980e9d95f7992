use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::LinkSelector;
use crate::prompt::Prompter;
use crate::state::AppState;
use crate::store::{self, KeyValueStore};
use std::collections::HashSet;

pub fn run<S: KeyValueStore, P: Prompter + ?Sized>(
    store: &mut S,
    state: &mut AppState,
    prompter: &mut P,
    selectors: &[LinkSelector],
    confirm: bool,
) -> Result<CmdResult> {
    // Resolve everything up front so positions refer to the shelf as shown.
    let targets: Vec<(LinkSelector, Option<(String, String)>)> = selectors
        .iter()
        .map(|sel| {
            let found = sel
                .find(&state.shelf)
                .map(|l| (l.id.clone(), l.name.clone()));
            (sel.clone(), found)
        })
        .collect();

    let mut result = CmdResult::default();
    let mut seen: HashSet<String> = HashSet::new();
    for (selector, found) in targets {
        let Some((id, name)) = found else {
            result.add_message(CmdMessage::info(format!("No link at {}", selector)));
            continue;
        };
        // Two selectors naming the same link ask once.
        if !seen.insert(id.clone()) {
            continue;
        }

        if confirm && !prompter.confirm(&format!("Delete \"{}\"?", name)) {
            result.add_message(CmdMessage::info(format!("Kept: {}", name)));
            continue;
        }

        if let Some(removed) = state.shelf.remove(&id) {
            store::save_links(store, state.shelf.links())?;
            result.add_message(CmdMessage::success(format!("Link deleted: {}", name)));
            result.affected_links.push(removed);
        }
    }

    Ok(result.with_view_of(state))
}
