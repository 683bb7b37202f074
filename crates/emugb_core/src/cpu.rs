mod alu;
mod exec;
mod helpers;
mod init;
pub mod opcodes;
mod regs;

use std::fmt;

use crate::memory::Memory;

pub use opcodes::{Instruction, Op, Opcode, Operand, OperandKind, OPCODES};
pub use regs::{Flag, Registers};

/// `log` target for the per-instruction trace.
pub const TRACE_TARGET: &str = "emugb_core::trace";

/// Game Boy CPU core.
///
/// Only the register file lives here; memory is borrowed for the duration of
/// each `step`. There is no halted/stopped state: `HALT` and `STOP` are
/// decoded and traced but have no effect until an interrupt controller
/// exists to wake the CPU back up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cpu {
    pub regs: Registers,
}

/// What a single call to [`Cpu::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Executed(Instruction),
    /// A conditional relative jump whose condition did not hold.
    NotTaken(Instruction),
    /// The opcode has no semantics. Only PC moved, past the opcode byte.
    UnknownOpcode { addr: u16, opcode: u8 },
}

impl Step {
    pub fn instruction(&self) -> Option<&Instruction> {
        match self {
            Step::Executed(instruction) | Step::NotTaken(instruction) => Some(instruction),
            Step::UnknownOpcode { .. } => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Step::UnknownOpcode { .. })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Executed(instruction) => write!(f, "{instruction}"),
            Step::NotTaken(instruction) => write!(f, "{instruction} (not taken)"),
            Step::UnknownOpcode { addr, opcode } => write!(
                f,
                "Unknown opcode found (PC: 0x{addr:04X} OPCODE: 0x{opcode:02X})"
            ),
        }
    }
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.regs.get_flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.set_flag(flag, value);
    }

    /// Fetch, decode and execute one instruction.
    ///
    /// Unknown opcodes are reported (error log plus
    /// [`Step::UnknownOpcode`]) and skipped; whether to keep running is the
    /// caller's decision.
    pub fn step<M: Memory>(&mut self, mem: &mut M) -> Step {
        let addr = self.regs.pc;
        let opcode = self.imm_byte(mem);
        let descriptor = &OPCODES[opcode as usize];

        if !descriptor.is_known() {
            let step = Step::UnknownOpcode { addr, opcode };
            log::error!("{step} ({regs})", regs = self.regs);
            return step;
        }

        let operand = self.fetch_operand(mem, descriptor.operand);
        let instruction = Instruction {
            addr,
            opcode,
            operand,
        };

        let step = if self.execute(mem, descriptor.op, operand) {
            Step::Executed(instruction)
        } else {
            Step::NotTaken(instruction)
        };
        log::info!(target: TRACE_TARGET, "{step}");
        step
    }
}
