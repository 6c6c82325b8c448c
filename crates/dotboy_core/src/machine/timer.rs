//! Timer / divider unit.
//!
//! Both counters are derived from the machine's running tick count rather
//! than a private clock: DIV advances whenever the count is a multiple of
//! 255, and TIMA whenever it is a multiple of the TAC-selected rate.
mod io;

use crate::cpu::Interrupts;

/// TIMA periods in ticks, indexed by TAC[1:0].
const TIMA_PERIODS: [u64; 4] = [1024, 16, 64, 256];
const DIV_PERIOD: u64 = 0xFF;
const TAC_ENABLE: u8 = 0b100;

#[derive(Debug, Default)]
pub(super) struct Timer {
    /// DIV (FF04).
    pub(super) div: u8,
    /// TIMA (FF05).
    pub(super) tima: u8,
    /// TMA (FF06).
    pub(super) tma: u8,
    /// TAC (FF07), lower 3 bits.
    pub(super) tac: u8,
}

impl Timer {
    pub(super) fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn enabled(&self) -> bool {
        self.tac & TAC_ENABLE != 0
    }

    #[inline]
    fn period(&self) -> u64 {
        TIMA_PERIODS[usize::from(self.tac & 0x03)]
    }

    /// Evaluate the divider and timer for machine tick `ticks`.
    ///
    /// On TIMA overflow the counter reloads from TMA and the timer
    /// interrupt is requested.
    pub(super) fn tick(&mut self, ticks: u64, if_reg: &mut Interrupts) {
        if ticks % DIV_PERIOD == 0 {
            self.div = self.div.wrapping_add(1);
        }

        if self.enabled() && ticks % self.period() == 0 {
            let (next, overflow) = self.tima.overflowing_add(1);
            if overflow {
                self.tima = self.tma;
                if_reg.insert(Interrupts::TIMER);
            } else {
                self.tima = next;
            }
        }
    }
}
