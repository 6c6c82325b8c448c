use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// HALT: sleep until `IE & IF` is nonzero.
    ///
    /// With IME clear and an interrupt already pending the CPU does not
    /// sleep; instead the next opcode byte is fetched twice (HALT bug).
    pub(super) fn exec_halt<B: Bus>(&mut self, bus: &mut B) -> u32 {
        if !self.ime && self.pending_interrupts(bus) != 0 {
            self.halt_bug = true;
        } else {
            self.halted = true;
        }
        4
    }

    /// STOP is encoded as two bytes; the padding byte is discarded.
    ///
    /// The core stays stopped until a button press resumes it.
    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let _padding = self.fetch8(bus);
        self.stopped = true;
        log::debug!("GB CPU STOP at 0x{:04X}", self.regs.pc.wrapping_sub(2));
        4
    }

    pub(super) fn exec_di(&mut self) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        4
    }

    /// IME becomes 1 after the *next* instruction completes.
    pub(super) fn exec_ei(&mut self) -> u32 {
        self.ime_enable_pending = true;
        4
    }
}
