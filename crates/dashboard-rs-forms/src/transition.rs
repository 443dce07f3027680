//! Confirm-button state derived from a mutation's progress.

use serde::{Deserialize, Serialize};

use crate::errors::RawFieldError;

/// Visual state of a form's save button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmButtonState {
    #[default]
    Default,
    Loading,
    Success,
    Error,
}

/// Derives the save button state from a mutation's flags and returned errors.
///
/// A running mutation is always `Loading`. A finished one is `Error` when it
/// returned any errors and `Success` otherwise. Before the first call the
/// button stays `Default`.
pub fn mutation_state(
    called: bool,
    loading: bool,
    errors: Option<&[RawFieldError]>,
) -> ConfirmButtonState {
    if loading {
        ConfirmButtonState::Loading
    } else if called {
        if errors.is_some_and(|errors| !errors.is_empty()) {
            ConfirmButtonState::Error
        } else {
            ConfirmButtonState::Success
        }
    } else {
        ConfirmButtonState::Default
    }
}
