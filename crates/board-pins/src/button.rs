//! ADC button ladder identifiers.
//!
//! The audio boards put their front-panel buttons on a resistor ladder read
//! through one ADC pin; the button driver resolves a voltage window to a
//! small logical index. This module names the six logical buttons and maps
//! each to its ladder index on the selected board.

/// Logical front-panel buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Set / function button.
    Set,
    /// Play/pause button.
    Play,
    /// Record button.
    Record,
    /// Mode button.
    Mode,
    /// Volume up.
    VolumeUp,
    /// Volume down.
    VolumeDown,
}

/// Ladder index of a button as reported by the ADC button driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct ButtonId(u8);

impl ButtonId {
    /// Create a button id from its ladder index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Return the raw ladder index.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Per-board button assignments.
///
/// `None` means the board does not wire that button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonMap {
    /// Set button ladder index.
    pub set: Option<ButtonId>,
    /// Play button ladder index.
    pub play: Option<ButtonId>,
    /// Record button ladder index.
    pub record: Option<ButtonId>,
    /// Mode button ladder index.
    pub mode: Option<ButtonId>,
    /// Volume-up button ladder index.
    pub volume_up: Option<ButtonId>,
    /// Volume-down button ladder index.
    pub volume_down: Option<ButtonId>,
}

impl ButtonMap {
    /// A map with no buttons wired.
    pub const NONE: ButtonMap = ButtonMap {
        set: None,
        play: None,
        record: None,
        mode: None,
        volume_up: None,
        volume_down: None,
    };

    /// Look up the ladder index for a logical button.
    #[must_use]
    pub const fn get(&self, button: Button) -> Option<ButtonId> {
        match button {
            Button::Set => self.set,
            Button::Play => self.play,
            Button::Record => self.record,
            Button::Mode => self.mode,
            Button::VolumeUp => self.volume_up,
            Button::VolumeDown => self.volume_down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_map_has_no_buttons() {
        assert_eq!(ButtonMap::NONE.get(Button::Set), None);
        assert_eq!(ButtonMap::NONE.get(Button::VolumeDown), None);
    }

    #[test]
    fn get_returns_the_matching_field() {
        let map = ButtonMap {
            record: Some(ButtonId::new(2)),
            ..ButtonMap::NONE
        };
        assert_eq!(map.get(Button::Record), Some(ButtonId::new(2)));
        assert_eq!(map.get(Button::Play), None);
    }
}
