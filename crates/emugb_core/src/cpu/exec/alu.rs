use crate::cpu::opcodes::{AluOp, R16, R8};
use crate::cpu::{Cpu, Flag};
use crate::memory::Memory;

impl Cpu {
    /// `ALU A,r` for the 0x80–0xBF block, including the `(HL)` column.
    pub(super) fn exec_alu_reg<M: Memory>(&mut self, mem: &mut M, op: AluOp, src: R8) {
        let value = self.read_r8(mem, src);
        self.exec_alu(op, value);
    }

    pub(super) fn exec_alu(&mut self, op: AluOp, value: u8) {
        match op {
            AluOp::Add => self.alu_add(value, false),
            AluOp::Adc => self.alu_add(value, true),
            AluOp::Sub => self.alu_sub(value, false),
            AluOp::Sbc => self.alu_sub(value, true),
            AluOp::And => self.alu_and(value),
            AluOp::Xor => self.alu_xor(value),
            AluOp::Or => self.alu_or(value),
            AluOp::Cp => self.alu_cp(value),
        }
    }

    pub(super) fn exec_add_hl_rr(&mut self, rr: R16) {
        let value = self.read_r16(rr);
        self.alu_add16_hl(value);
    }

    pub(super) fn exec_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::H, true);
        self.set_flag(Flag::N, true);
    }

    pub(super) fn exec_scf(&mut self) {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
    }

    pub(super) fn exec_ccf(&mut self) {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
    }
}
