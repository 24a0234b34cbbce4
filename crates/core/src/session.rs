// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::wizard::WizardState;
use tracing::debug;

/// Open/closed state of the site's overlay panels.
///
/// Panel visibility is explicit shared state passed to whoever needs it,
/// not an ambient broadcast: the wizard's lifecycle stays independent of
/// unrelated UI components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    /// Whether the booking panel is open.
    pub booking_open: bool,
    /// Whether the chat panel is open.
    pub chat_open: bool,
}

impl PanelState {
    /// Creates panel state with both panels closed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            booking_open: false,
            chat_open: false,
        }
    }
}

/// One visitor's UI session: panel visibility plus the booking attempt
/// in progress, if any.
///
/// The wizard exists only while the booking panel is open. Opening the
/// panel creates a fresh wizard; closing it destroys the wizard and its
/// form (reset-on-close). The chat panel toggles independently and never
/// touches the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    /// Overlay panel visibility.
    panels: PanelState,
    /// The booking attempt in progress, present iff the booking panel
    /// is open.
    wizard: Option<WizardState>,
}

impl Session {
    /// Creates a session with all panels closed and no booking attempt.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            panels: PanelState::new(),
            wizard: None,
        }
    }

    /// Returns the current panel visibility.
    #[must_use]
    pub const fn panels(&self) -> PanelState {
        self.panels
    }

    /// Returns the booking attempt in progress, if any.
    #[must_use]
    pub const fn wizard(&self) -> Option<&WizardState> {
        self.wizard.as_ref()
    }

    /// Returns the booking attempt in progress for mutation, if any.
    pub fn wizard_mut(&mut self) -> Option<&mut WizardState> {
        self.wizard.as_mut()
    }

    /// Opens the booking panel, creating a fresh wizard if none exists.
    ///
    /// Reopening while a booking attempt is already in progress keeps
    /// the existing wizard.
    pub fn open_booking(&mut self) -> &mut WizardState {
        self.panels.booking_open = true;
        if self.wizard.is_none() {
            debug!("Opening booking panel with a fresh wizard");
        }
        self.wizard.get_or_insert_with(WizardState::new)
    }

    /// Closes the booking panel, destroying the booking attempt.
    ///
    /// Closing is the explicit cancel path: the wizard and all entered
    /// data are discarded regardless of the step it was on.
    pub fn close_booking(&mut self) {
        if self.wizard.is_some() {
            debug!("Closing booking panel and discarding the wizard");
        }
        self.panels.booking_open = false;
        self.wizard = None;
    }

    /// Opens the chat panel.
    pub fn open_chat(&mut self) {
        self.panels.chat_open = true;
    }

    /// Closes the chat panel.
    pub fn close_chat(&mut self) {
        self.panels.chat_open = false;
    }
}
