//! Connectivity edge handlers
//!
//! Going offline flips the sticky flag; coming back online triggers a
//! full shell reload (discard in-memory state, rebuild from scratch)
//! rather than a reconnect-and-resync protocol.

use parley_core::prelude::*;
use parley_core::Connectivity;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_change(state: &mut AppState, connectivity: Connectivity) -> UpdateResult {
    match connectivity {
        Connectivity::Offline => {
            warn!("Network unreachable, showing offline banner");
            state.connectivity = Connectivity::Offline;
            UpdateResult::none()
        }
        Connectivity::Online => {
            info!("Network reachable again, reloading shell");
            state.request_reload();
            UpdateResult::action(UpdateAction::Reload)
        }
    }
}
