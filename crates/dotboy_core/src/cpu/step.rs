use super::{Bus, Cpu, Opcode};

impl Cpu {
    /// Advance the core by one T-cycle.
    ///
    /// A halted core only checks whether it should wake. Otherwise the
    /// tick either pays down the instruction in flight or, once that is
    /// settled, dispatches an interrupt or executes the next opcode in full
    /// and records what it still owes.
    pub fn tick<B: Bus>(&mut self, bus: &mut B) {
        if self.halted {
            if self.pending_interrupts(bus) == 0 {
                return;
            }
            self.halted = false;
        }

        self.total_cycles += 1;

        if self.pending_cycles > 0 {
            self.pending_cycles -= 1;
            return;
        }
        if self.locked.is_some() {
            return;
        }

        let cost = match self.service_interrupt(bus) {
            Some(cycles) => cycles,
            None => self.execute_next(bus),
        };
        self.pending_cycles = cost.saturating_sub(1);
    }

    fn execute_next<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let enable_ime_after = self.ime_enable_pending;

        let opcode = Opcode(self.fetch8(bus));
        let cycles = self.exec_opcode(bus, opcode);

        // DI in the following instruction cancels the delayed enable.
        if enable_ime_after && self.ime_enable_pending {
            self.ime = true;
            self.ime_enable_pending = false;
        }
        cycles
    }
}
