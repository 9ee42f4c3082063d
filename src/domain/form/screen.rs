//! Form screen state machine.
//!
//! Defines the three screens of the contact flow and valid transitions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The screen a contact form is currently on.
///
/// Forms move through these screens from first edit to completion:
/// - `Input`: Fields are editable
/// - `Confirm`: Read-only review of the entered values
/// - `Complete`: Submission accepted, thank-you screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Fields are being entered or corrected.
    #[default]
    Input,

    /// Entered values are shown for review before sending.
    Confirm,

    /// The inquiry has been sent; a fresh form can be started.
    Complete,
}

impl Screen {
    /// Returns true if field edits are accepted on this screen.
    pub fn accepts_field_edits(&self) -> bool {
        matches!(self, Self::Input)
    }

    /// Returns true if this is the read-only review screen.
    pub fn is_review(&self) -> bool {
        matches!(self, Self::Confirm)
    }

    /// Returns true if this is the post-submission screen.
    pub fn is_completion(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Returns a short label for the screen, suitable for logs and UI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Confirm => "confirm",
            Self::Complete => "complete",
        }
    }
}

impl StateMachine for Screen {
    fn can_transition_to(&self, target: &Self) -> bool {
        use Screen::*;
        matches!(
            (self, target),
            // Validation passed, move to review
            (Input, Confirm) |
            // User goes back to correct entries
            (Confirm, Input) |
            // Submission accepted by the mail gateway
            (Confirm, Complete) |
            // Start over with a blank form
            (Complete, Input)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Screen::*;
        match self {
            Input => vec![Confirm],
            Confirm => vec![Input, Complete],
            Complete => vec![Input],
        }
    }
}
