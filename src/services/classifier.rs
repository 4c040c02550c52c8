use crate::domain::constants::{FAILURE_STATES, SUCCESS_STATES};
use crate::domain::models::NormalizedState;

/// Maps a remote state label onto the three states the poller acts on.
///
/// Unknown labels, including the empty string, are treated as still running.
pub fn classify(raw_state: &str) -> NormalizedState {
    let state = raw_state.to_lowercase();
    if SUCCESS_STATES.contains(&state.as_str()) {
        NormalizedState::Succeeded
    } else if FAILURE_STATES.contains(&state.as_str()) {
        NormalizedState::Failed
    } else {
        NormalizedState::InProgress
    }
}
