use crate::commands::CmdResult;
use crate::error::Result;
use crate::state::AppState;

/// Search input changed: remember the term and re-render.
pub fn run(state: &mut AppState, term: &str) -> Result<CmdResult> {
    state.search_term = term.to_string();
    tracing::debug!(term, "search");
    Ok(CmdResult::default().with_view_of(state))
}
