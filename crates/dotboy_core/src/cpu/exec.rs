mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Bus, Cpu, Opcode};

impl Cpu {
    /// Decode and execute a single opcode and return its cost in T-cycles.
    ///
    /// Decoding walks the x/y/z/p/q fields rather than a 256-entry table.
    pub(super) fn exec_opcode<B: Bus>(&mut self, bus: &mut B, op: Opcode) -> u32 {
        match op.x() {
            0 => self.exec_block0(bus, op),
            1 if op.y() == 6 && op.z() == 6 => self.exec_halt(bus),
            1 => self.exec_ld_r_r(bus, op.y(), op.z()),
            2 => self.exec_alu_r(bus, op.y(), op.z()),
            _ => self.exec_block3(bus, op),
        }
    }

    fn exec_block0<B: Bus>(&mut self, bus: &mut B, op: Opcode) -> u32 {
        let (y, p, q) = (op.y(), op.p(), op.q());
        match op.z() {
            0 => match y {
                0 => 4,
                1 => self.exec_ld_a16_sp(bus),
                2 => self.exec_stop(bus),
                3 => self.exec_jr(bus, true),
                _ => {
                    let cond = self.condition(y - 4);
                    self.exec_jr(bus, cond)
                }
            },
            1 if q == 0 => self.exec_ld_rp_d16(bus, p),
            1 => self.exec_add_hl_rp(p),
            2 => self.exec_ld_indirect(bus, p, q),
            3 if q == 0 => self.exec_inc16(p),
            3 => self.exec_dec16(p),
            4 => self.exec_inc8(bus, y),
            5 => self.exec_dec8(bus, y),
            6 => self.exec_ld_r_d8(bus, y),
            _ => self.exec_accumulator_op(y),
        }
    }

    fn exec_block3<B: Bus>(&mut self, bus: &mut B, op: Opcode) -> u32 {
        let (y, p, q) = (op.y(), op.p(), op.q());
        match op.z() {
            0 => match y {
                0..=3 => {
                    let cond = self.condition(y);
                    self.exec_ret_cond(bus, cond)
                }
                4 => self.exec_ldh_a8_a(bus),
                5 => self.exec_add_sp_e(bus),
                6 => self.exec_ldh_a_a8(bus),
                _ => self.exec_ld_hl_sp_e(bus),
            },
            1 if q == 0 => self.exec_pop(bus, p),
            1 => match p {
                0 => self.exec_ret(bus),
                1 => self.exec_reti(bus),
                2 => self.exec_jp_hl(),
                _ => self.exec_ld_sp_hl(),
            },
            2 => match y {
                0..=3 => {
                    let cond = self.condition(y);
                    self.exec_jp(bus, cond)
                }
                4 => self.exec_ldh_c_a(bus),
                5 => self.exec_ld_a16_a(bus),
                6 => self.exec_ldh_a_c(bus),
                _ => self.exec_ld_a_a16(bus),
            },
            3 => match y {
                0 => self.exec_jp(bus, true),
                1 => self.step_cb(bus),
                6 => self.exec_di(),
                7 => self.exec_ei(),
                _ => self.exec_invalid(bus, op),
            },
            4 if y < 4 => {
                let cond = self.condition(y);
                self.exec_call(bus, cond)
            }
            5 if q == 0 => self.exec_push(bus, p),
            5 if p == 0 => self.exec_call(bus, true),
            6 => self.exec_alu_d8(bus, y),
            7 => self.exec_rst(bus, y),
            _ => self.exec_invalid(bus, op),
        }
    }

    /// One of the eleven undefined opcodes. The core locks up: no further
    /// instruction executes and the machine is flagged invalid.
    fn exec_invalid<B: Bus>(&mut self, bus: &mut B, op: Opcode) -> u32 {
        let address = self.regs.pc.wrapping_sub(1);
        log::error!(
            "GB CPU invalid opcode 0x{:02X} at 0x{:04X} (a={:02X} f={:02X} bc={:04X} de={:04X} hl={:04X} sp={:04X})",
            op.0,
            address,
            self.regs.a,
            self.regs.f.bits(),
            self.regs.bc(),
            self.regs.de(),
            self.regs.hl(),
            self.regs.sp,
        );
        self.locked = Some((op.0, address));
        bus.mark_invalid();
        0
    }
}
