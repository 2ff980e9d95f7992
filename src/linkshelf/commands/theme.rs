use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Theme;
use crate::state::AppState;
use crate::store::KeyValueStore;
use crate::theme::apply_theme;

/// Theme switcher clicked.
pub fn run<S: KeyValueStore>(store: &mut S, state: &mut AppState, name: &str) -> Result<CmdResult> {
    apply_theme(store, &mut state.theme, name)?;

    let mut result = CmdResult::default();
    if Theme::from_name(name).is_some() {
        result.add_message(CmdMessage::success(format!("Theme set to {}", name)));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Unknown theme \"{}\" saved; showing light",
            name
        )));
    }
    Ok(result.with_theme(state.theme.clone()))
}
