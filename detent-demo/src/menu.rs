//! Settings menu driven by the encoder
//!
//! Holds a fixed list of bounded settings. The encoder edits whichever one
//! is selected; the button moves the selection.

use detent_core::{AdjustRange, Encoder};
use detent_core::detent_hal::{EncoderCounter, MillisClock};

/// Maximum number of settings on the page
pub const MAX_SETTINGS: usize = 4;

/// One editable value
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Setting {
    /// Display label
    pub label: &'static str,
    /// Current value
    pub value: u32,
    /// Allowed window and bound policy
    pub range: AdjustRange,
}

impl Setting {
    pub const fn new(label: &'static str, value: u32, range: AdjustRange) -> Self {
        Self {
            label,
            value,
            range,
        }
    }
}

/// Menu page state
pub struct Menu {
    settings: heapless::Vec<Setting, MAX_SETTINGS>,
    selected: usize,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    pub const fn new() -> Self {
        Self {
            settings: heapless::Vec::new(),
            selected: 0,
        }
    }

    /// Add a setting, handing it back if the page is full
    pub fn push(&mut self, setting: Setting) -> Result<(), Setting> {
        self.settings.push(setting)
    }

    /// Move the selection to the next setting, wrapping at the end
    pub fn select_next(&mut self) {
        if !self.settings.is_empty() {
            self.selected = (self.selected + 1) % self.settings.len();
        }
    }

    /// Currently selected setting
    pub fn selected(&self) -> Option<&Setting> {
        self.settings.get(self.selected)
    }

    /// Let the encoder edit the selected setting
    ///
    /// Returns the setting if its value changed.
    pub fn adjust_selected<C, K>(&mut self, encoder: &mut Encoder<C, K>) -> Option<Setting>
    where
        C: EncoderCounter,
        K: MillisClock,
    {
        let setting = self.settings.get_mut(self.selected)?;
        let value = encoder.adjust_in(setting.value, &setting.range);
        if value == setting.value {
            return None;
        }
        setting.value = value;
        Some(*setting)
    }
}
