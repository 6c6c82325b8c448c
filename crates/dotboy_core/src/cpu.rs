mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod opcode;
mod regs;
mod step;

pub use bus::Bus;
pub use interrupts::Interrupts;
pub(crate) use interrupts::{IE_ADDR, IF_ADDR};
pub use opcode::Opcode;
pub use regs::{Flags, Reg16, Registers};

/// Sharp LR35902 interpreter.
///
/// The core is advanced one tick at a time by the machine. Each executed
/// instruction (or interrupt entry) charges its full T-cycle cost up front
/// and then sits out the remaining ticks, so an instruction costing N cycles
/// occupies exactly N calls to [`Cpu::tick`].
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable.
    pub ime: bool,
    pub halted: bool,
    stopped: bool,
    /// Set by HALT when IME is clear and an interrupt is already pending:
    /// the next opcode fetch does not advance PC.
    halt_bug: bool,
    /// EI was executed; IME turns on once the following instruction completes.
    ime_enable_pending: bool,
    /// Ticks still owed by the instruction in flight.
    pending_cycles: u32,
    total_cycles: u64,
    /// Opcode and address of the undefined instruction that locked the core.
    locked: Option<(u8, u16)>,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flags) -> bool {
        self.regs.f.contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        self.regs.f.set(flag, value);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = Flags::empty();
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Leave STOP mode. The machine calls this when a button goes down.
    #[inline]
    pub fn resume(&mut self) {
        self.stopped = false;
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked.is_some()
    }

    /// Opcode and address of the undefined instruction that locked the core.
    #[inline]
    pub fn invalid_opcode(&self) -> Option<(u8, u16)> {
        self.locked
    }

    /// Remaining ticks before the next instruction may start.
    #[inline]
    pub fn pending_cycles(&self) -> u32 {
        self.pending_cycles
    }

    /// Number of ticks the core has been active (not halted) since power-up.
    #[inline]
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }
}

#[cfg(test)]
mod tests;
