//! Dot-accurate DMG Game Boy core.
//!
//! [`GameBoy`] owns every component and is advanced one tick (one dot) at a
//! time, or an instruction/frame at a time through its run loops.
pub mod cpu;
mod error;
pub mod machine;

pub use error::Error;
pub use machine::{Button, CartridgeConfig, ControllerKind, GameBoy};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
