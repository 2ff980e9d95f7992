use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::favicon::{FaviconChain, FaviconTier};
use crate::index::LinkSelector;
use crate::shelf::validate_url;
use crate::state::AppState;

/// Walks a link's favicon chain as if `failures` loads had failed.
pub fn run(state: &AppState, selector: &LinkSelector, failures: usize) -> Result<CmdResult> {
    let link = selector.resolve(&state.shelf)?;
    let parsed = validate_url(&link.url)?;
    let host = parsed.host_str().unwrap_or_default();

    let mut chain = FaviconChain::for_host(host, state.icon_size);
    for _ in 0..failures {
        if chain.on_error().is_none() {
            break;
        }
    }

    let tier = match chain.tier() {
        FaviconTier::Primary => "primary service",
        FaviconTier::Secondary => "secondary service",
        FaviconTier::Generic => "generic icon",
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{}: showing {} ({})",
        link.name,
        tier,
        chain.current()
    )));
    Ok(result.with_favicon_sources(chain.sources().to_vec()))
}
