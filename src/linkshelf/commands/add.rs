use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::prompt::Prompter;
use crate::state::AppState;
use crate::store::{self, KeyValueStore};

/// The add-link form submission.
///
/// Blank fields do nothing. A URL that does not parse is reported through
/// the prompter and returned as an error; nothing is stored. On success the
/// shelf is persisted, the form is cleared with focus back on the name field,
/// and the shelf is re-rendered with the current search term.
pub fn run<S: KeyValueStore, P: Prompter + ?Sized>(
    store: &mut S,
    state: &mut AppState,
    prompter: &mut P,
    name: &str,
    url: &str,
    now_millis: i64,
) -> Result<CmdResult> {
    state.form.name = name.to_string();
    state.form.url = url.to_string();

    let added = match state.shelf.add(name, url, now_millis) {
        Ok(added) => added,
        Err(e @ ShelfError::InvalidUrl(_)) => {
            prompter.notify(&format!("Please enter a valid URL. {}", e));
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    let mut result = CmdResult::default();
    let Some(link) = added else {
        tracing::debug!("ignoring add with blank field");
        return Ok(result.with_view_of(state));
    };

    store::save_links(store, state.shelf.links())?;
    state.form.reset();

    result.add_message(CmdMessage::success(format!(
        "Link added: {} ({})",
        link.name, link.url
    )));
    Ok(result.with_affected_links(vec![link]).with_view_of(state))
}
