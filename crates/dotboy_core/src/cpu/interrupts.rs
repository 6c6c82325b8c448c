use bitflags::bitflags;

use super::{Bus, Cpu};

pub(crate) const IE_ADDR: u16 = 0xFFFF;
pub(crate) const IF_ADDR: u16 = 0xFF0F;

bitflags! {
    /// Interrupt request lines as laid out in IE (0xFFFF) and IF (0xFF0F).
    ///
    /// Lower bits have higher priority.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Interrupts: u8 {
        const VBLANK = 0b0000_0001;
        const LCD_STAT = 0b0000_0010;
        const TIMER = 0b0000_0100;
        const SERIAL = 0b0000_1000;
        const JOYPAD = 0b0001_0000;
    }
}

impl Interrupts {
    /// The single highest-priority line in `self`, if any.
    pub fn highest_priority(self) -> Option<Interrupts> {
        let bits = self.bits();
        (bits != 0).then(|| Interrupts::from_bits_truncate(bits & bits.wrapping_neg()))
    }

    /// Dispatch vector for a single line: 0x40, 0x48, 0x50, 0x58, 0x60.
    pub fn vector(self) -> u16 {
        0x0040 + 8 * self.bits().trailing_zeros() as u16
    }
}

impl Cpu {
    /// `IE & IF`, masked to the five defined lines.
    pub(in crate::cpu) fn pending_interrupts<B: Bus>(&mut self, bus: &mut B) -> u8 {
        bus.read8(IE_ADDR) & bus.read8(IF_ADDR) & Interrupts::all().bits()
    }

    /// Enter the highest-priority pending interrupt if IME allows it.
    ///
    /// Returns the cost of the dispatch (20 T-cycles) when one was taken.
    pub(in crate::cpu) fn service_interrupt<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        if !self.ime {
            return None;
        }
        let pending = Interrupts::from_bits_truncate(self.pending_interrupts(bus));
        let line = pending.highest_priority()?;

        self.ime = false;
        self.ime_enable_pending = false;

        let iflags = bus.read8(IF_ADDR);
        bus.write8(IF_ADDR, iflags & !line.bits());

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = line.vector();

        log::debug!(
            "GB CPU interrupt: line={:?} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X} IF=0x{:02X}",
            line,
            self.regs.pc,
            pc,
            self.regs.sp,
            iflags,
        );
        Some(20)
    }
}
