use crate::cpu::opcodes::{R16, R8};
use crate::cpu::Cpu;
use crate::memory::Memory;

impl Cpu {
    /// INC r / INC (HL). The memory form reads, increments and writes back.
    pub(super) fn exec_inc8<M: Memory>(&mut self, mem: &mut M, reg: R8) {
        let value = self.read_r8(mem, reg);
        let result = self.alu_inc8(value);
        self.write_r8(mem, reg, result);
    }

    pub(super) fn exec_dec8<M: Memory>(&mut self, mem: &mut M, reg: R8) {
        let value = self.read_r8(mem, reg);
        let result = self.alu_dec8(value);
        self.write_r8(mem, reg, result);
    }

    // 16-bit INC/DEC leave every flag alone.

    pub(super) fn exec_inc16(&mut self, rr: R16) {
        let value = self.read_r16(rr).wrapping_add(1);
        self.write_r16(rr, value);
    }

    pub(super) fn exec_dec16(&mut self, rr: R16) {
        let value = self.read_r16(rr).wrapping_sub(1);
        self.write_r16(rr, value);
    }
}
