use crate::memory::Memory;

use super::opcodes::{Cond, Indirect, Operand, OperandKind, R16, R8};
use super::{Cpu, Flag};

impl Cpu {
    /// Read the byte at PC and advance PC past it.
    #[inline]
    pub fn imm_byte<M: Memory>(&mut self, mem: &M) -> u8 {
        let value = mem.get_byte(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Read the little-endian word at PC and advance PC past it.
    #[inline]
    pub fn imm_word<M: Memory>(&mut self, mem: &M) -> u16 {
        let value = mem.get_word(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(2);
        value
    }

    #[inline]
    pub(super) fn fetch_operand<M: Memory>(&mut self, mem: &M, kind: OperandKind) -> Operand {
        match kind {
            OperandKind::None => Operand::None,
            OperandKind::Imm8 => Operand::Byte(self.imm_byte(mem)),
            OperandKind::Imm16 => Operand::Word(self.imm_word(mem)),
        }
    }

    /// Read an 8-bit register, or the byte at (HL).
    #[inline]
    pub(super) fn read_r8<M: Memory>(&self, mem: &M, reg: R8) -> u8 {
        match reg {
            R8::B => self.regs.b,
            R8::C => self.regs.c,
            R8::D => self.regs.d,
            R8::E => self.regs.e,
            R8::H => self.regs.h,
            R8::L => self.regs.l,
            R8::HlMem => mem.get_byte(self.regs.hl()),
            R8::A => self.regs.a,
        }
    }

    /// Write an 8-bit register, or the byte at (HL).
    #[inline]
    pub(super) fn write_r8<M: Memory>(&mut self, mem: &mut M, reg: R8, value: u8) {
        match reg {
            R8::B => self.regs.b = value,
            R8::C => self.regs.c = value,
            R8::D => self.regs.d = value,
            R8::E => self.regs.e = value,
            R8::H => self.regs.h = value,
            R8::L => self.regs.l = value,
            R8::HlMem => mem.set_byte(self.regs.hl(), value),
            R8::A => self.regs.a = value,
        }
    }

    #[inline]
    pub(super) fn read_r16(&self, reg: R16) -> u16 {
        match reg {
            R16::Bc => self.regs.bc(),
            R16::De => self.regs.de(),
            R16::Hl => self.regs.hl(),
            R16::Sp => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn write_r16(&mut self, reg: R16, value: u16) {
        match reg {
            R16::Bc => self.regs.set_bc(value),
            R16::De => self.regs.set_de(value),
            R16::Hl => self.regs.set_hl(value),
            R16::Sp => self.regs.sp = value,
        }
    }

    /// Resolve the address for `LD (rr),A` / `LD A,(rr)`, applying the HL
    /// post-increment or post-decrement.
    #[inline]
    pub(super) fn indirect_addr(&mut self, ind: Indirect) -> u16 {
        match ind {
            Indirect::Bc => self.regs.bc(),
            Indirect::De => self.regs.de(),
            Indirect::HlInc => {
                let addr = self.regs.hl();
                self.regs.set_hl(addr.wrapping_add(1));
                addr
            }
            Indirect::HlDec => {
                let addr = self.regs.hl();
                self.regs.set_hl(addr.wrapping_sub(1));
                addr
            }
        }
    }

    #[inline]
    pub(super) fn condition(&self, cond: Cond) -> bool {
        match cond {
            Cond::Nz => !self.get_flag(Flag::Z),
            Cond::Z => self.get_flag(Flag::Z),
            Cond::Nc => !self.get_flag(Flag::C),
            Cond::C => self.get_flag(Flag::C),
        }
    }
}
