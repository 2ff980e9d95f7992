use crate::commands::CmdResult;
use crate::error::Result;
use crate::state::AppState;

pub fn run(state: &AppState) -> Result<CmdResult> {
    Ok(CmdResult::default().with_view_of(state))
}
