/// Abstraction over the address space as seen by the CPU.
///
/// The machine's bus implements this; CPU unit tests use a flat 64 KiB
/// array. Interrupt enable/flag registers are reached through their normal
/// addresses (0xFFFF / 0xFF0F).
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Latch the machine-wide "invalid" flag after an undefined opcode.
    ///
    /// Drivers stop stepping once they observe it. The default does nothing
    /// so that throwaway buses need not track it.
    fn mark_invalid(&mut self) {}
}
