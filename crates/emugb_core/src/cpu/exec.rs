mod alu;
mod control;
mod incdec;
mod ld;
mod system;

use crate::memory::Memory;

use super::opcodes::{Op, Operand};
use super::Cpu;

impl Cpu {
    /// Apply the semantics of a decoded instruction whose immediate has
    /// already been fetched.
    ///
    /// Returns `false` only for a conditional jump that was not taken.
    pub(super) fn execute<M: Memory>(&mut self, mem: &mut M, op: Op, operand: Operand) -> bool {
        match op {
            Op::Nop => {}
            Op::Halt => self.exec_halt(),
            Op::Stop => self.exec_stop(operand.byte()),

            Op::LdR16Imm(rr) => self.exec_ld_r16_d16(rr, operand.word()),
            Op::StoreA(ind) => self.exec_ld_indirect_a(mem, ind),
            Op::LoadA(ind) => self.exec_ld_a_indirect(mem, ind),
            Op::StoreSp => self.exec_ld_a16_sp(mem, operand.word()),
            Op::LdR8Imm(r) => self.exec_ld_r_d8(mem, r, operand.byte()),
            Op::Ld { dst, src } => self.exec_ld_r_r(mem, dst, src),

            Op::Inc16(rr) => self.exec_inc16(rr),
            Op::Dec16(rr) => self.exec_dec16(rr),
            Op::Inc8(r) => self.exec_inc8(mem, r),
            Op::Dec8(r) => self.exec_dec8(mem, r),

            Op::AddHl(rr) => self.exec_add_hl_rr(rr),
            Op::Alu(alu_op, r) => self.exec_alu_reg(mem, alu_op, r),
            Op::AluImm(alu_op) => self.exec_alu(alu_op, operand.byte()),
            Op::Daa => self.alu_daa(),
            Op::Cpl => self.exec_cpl(),
            Op::Scf => self.exec_scf(),
            Op::Ccf => self.exec_ccf(),

            Op::Jr(cond) => return self.exec_jr(cond, operand.byte()),

            // Filtered out by `step` before any operand is fetched.
            Op::Unknown => {}
        }
        true
    }
}
