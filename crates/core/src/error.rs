// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::wizard::Step;

/// Errors reported by wizard operations.
///
/// Local gating failures are recoverable: they block progression without
/// discarding input. Submission failures carry the transport's reason and
/// leave the wizard ready for a user-initiated retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// The current step's completion gate did not pass.
    AdvanceBlocked {
        /// The step the wizard remains on.
        step: Step,
    },
    /// The review step advances only through a successful submission.
    AdvanceRequiresSubmission,
    /// The wizard is already in the terminal confirmation state.
    AlreadyConfirmed,
    /// `submit` was called away from the review step.
    SubmissionNotAllowed {
        /// The step the wizard is on.
        step: Step,
    },
    /// A submission request is already awaiting its response.
    SubmissionInFlight,
    /// The transport reported a submission failure.
    SubmissionFailed {
        /// The human-readable failure reason.
        message: String,
    },
}

impl std::fmt::Display for WizardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AdvanceBlocked { step } => {
                write!(f, "Cannot advance: step {step} is incomplete")
            }
            Self::AdvanceRequiresSubmission => {
                write!(f, "The review step advances only via submission")
            }
            Self::AlreadyConfirmed => {
                write!(f, "The booking is already confirmed")
            }
            Self::SubmissionNotAllowed { step } => {
                write!(f, "Cannot submit from step {step}: review step required")
            }
            Self::SubmissionInFlight => {
                write!(f, "A submission is already in flight")
            }
            Self::SubmissionFailed { message } => {
                write!(f, "Booking submission failed: {message}")
            }
        }
    }
}

impl std::error::Error for WizardError {}
