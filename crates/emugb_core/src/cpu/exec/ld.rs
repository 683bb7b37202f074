use crate::cpu::opcodes::{Indirect, R16, R8};
use crate::cpu::Cpu;
use crate::memory::Memory;

impl Cpu {
    pub(super) fn exec_ld_r16_d16(&mut self, rr: R16, value: u16) {
        self.write_r16(rr, value);
    }

    pub(super) fn exec_ld_r_d8<M: Memory>(&mut self, mem: &mut M, reg: R8, value: u8) {
        self.write_r8(mem, reg, value);
    }

    /// `LD (a16),SP`: SP is stored little-endian at the immediate address.
    pub(super) fn exec_ld_a16_sp<M: Memory>(&mut self, mem: &mut M, addr: u16) {
        mem.set_word(addr, self.regs.sp);
    }

    pub(super) fn exec_ld_indirect_a<M: Memory>(&mut self, mem: &mut M, ind: Indirect) {
        let addr = self.indirect_addr(ind);
        mem.set_byte(addr, self.regs.a);
    }

    pub(super) fn exec_ld_a_indirect<M: Memory>(&mut self, mem: &mut M, ind: Indirect) {
        let addr = self.indirect_addr(ind);
        self.regs.a = mem.get_byte(addr);
    }

    /// `LD r,r'` grid. Identity moves (`LD B,B` and friends) are no-ops.
    pub(super) fn exec_ld_r_r<M: Memory>(&mut self, mem: &mut M, dst: R8, src: R8) {
        debug_assert!(
            !(dst == R8::HlMem && src == R8::HlMem),
            "0x76 decodes as HALT"
        );
        let value = self.read_r8(mem, src);
        self.write_r8(mem, dst, value);
    }
}
