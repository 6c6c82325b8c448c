/// Row-select bits of P1: bit 4 selects the d-pad, bit 5 the buttons.
const SELECT_MASK: u8 = 0x30;
const DPAD_ROW: u8 = 0x10;
const BUTTON_ROW: u8 = 0x20;

/// One of the eight physical inputs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

impl Button {
    pub const ALL: [Button; 8] = [
        Button::Right,
        Button::Left,
        Button::Up,
        Button::Down,
        Button::A,
        Button::B,
        Button::Select,
        Button::Start,
    ];

    /// Low-nibble bit this input pulls low when its row is selected.
    fn mask(self) -> u8 {
        match self {
            Button::Right | Button::A => 0x01,
            Button::Left | Button::B => 0x02,
            Button::Up | Button::Select => 0x04,
            Button::Down | Button::Start => 0x08,
        }
    }

    fn is_dpad(self) -> bool {
        matches!(self, Button::Right | Button::Left | Button::Up | Button::Down)
    }
}

/// P1 (FF00) state. Button masks use bit=1 for "pressed".
#[derive(Debug)]
pub(super) struct Joypad {
    select: u8,
    dpad: u8,
    buttons: u8,
}

impl Default for Joypad {
    fn default() -> Self {
        Self {
            // No row selected.
            select: SELECT_MASK,
            dpad: 0,
            buttons: 0,
        }
    }
}

impl Joypad {
    pub(super) fn read(&self) -> u8 {
        // Bits 7-6 always read as 1; a pressed line reads as 0.
        let mut low = 0x0F;
        if self.select & DPAD_ROW == 0 {
            low &= !self.dpad & 0x0F;
        }
        if self.select & BUTTON_ROW == 0 {
            low &= !self.buttons & 0x0F;
        }
        0xC0 | self.select | low
    }

    /// Only the row-select bits are writable.
    pub(super) fn write(&mut self, value: u8) {
        self.select = value & SELECT_MASK;
    }

    /// Returns `true` when the input goes from released to pressed.
    pub(super) fn set(&mut self, button: Button, pressed: bool) -> bool {
        let mask = button.mask();
        let row = if button.is_dpad() {
            &mut self.dpad
        } else {
            &mut self.buttons
        };
        let was_pressed = *row & mask != 0;
        if pressed {
            *row |= mask;
        } else {
            *row &= !mask;
        }
        pressed && !was_pressed
    }
}
