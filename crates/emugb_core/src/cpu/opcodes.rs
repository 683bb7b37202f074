//! Opcode table for the unprefixed LR35902 instruction set.
//!
//! Every opcode byte maps to a small descriptor: the mnemonic used in trace
//! output, how many immediate bytes follow the opcode, and a tagged [`Op`]
//! that the executor dispatches on. Decoding follows the usual bit-field
//! layout of the opcode byte (`xx yyy zzz`, with `pp q` splitting `yyy` for
//! register-pair instructions), so whole families come out of one rule.
//!
//! Opcodes without semantics yet (rotations, jumps, calls, stack, the `0xCB`
//! prefix and the hardware holes) decode to [`Op::Unknown`].

use std::fmt;

use lazy_static::lazy_static;

/// 8-bit operand in register-index order. `HlMem` is the byte at `(HL)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R8 {
    B,
    C,
    D,
    E,
    H,
    L,
    HlMem,
    A,
}

impl R8 {
    /// Decode the 3-bit register field used throughout the opcode table.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => R8::B,
            1 => R8::C,
            2 => R8::D,
            3 => R8::E,
            4 => R8::H,
            5 => R8::L,
            6 => R8::HlMem,
            _ => R8::A,
        }
    }
}

impl fmt::Display for R8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            R8::B => "B",
            R8::C => "C",
            R8::D => "D",
            R8::E => "E",
            R8::H => "H",
            R8::L => "L",
            R8::HlMem => "(HL)",
            R8::A => "A",
        };
        f.write_str(name)
    }
}

/// 16-bit register pair as encoded in the `pp` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum R16 {
    Bc,
    De,
    Hl,
    Sp,
}

impl R16 {
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => R16::Bc,
            1 => R16::De,
            2 => R16::Hl,
            _ => R16::Sp,
        }
    }
}

impl fmt::Display for R16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            R16::Bc => "BC",
            R16::De => "DE",
            R16::Hl => "HL",
            R16::Sp => "SP",
        };
        f.write_str(name)
    }
}

/// Address source for `LD (rr),A` / `LD A,(rr)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indirect {
    Bc,
    De,
    /// `(HL+)`: HL is incremented after the access.
    HlInc,
    /// `(HL-)`: HL is decremented after the access.
    HlDec,
}

impl Indirect {
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Indirect::Bc,
            1 => Indirect::De,
            2 => Indirect::HlInc,
            _ => Indirect::HlDec,
        }
    }
}

impl fmt::Display for Indirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Indirect::Bc => "BC",
            Indirect::De => "DE",
            Indirect::HlInc => "HL+",
            Indirect::HlDec => "HL-",
        };
        f.write_str(name)
    }
}

/// Branch condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond {
    Nz,
    Z,
    Nc,
    C,
}

impl Cond {
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Cond::Nz,
            1 => Cond::Z,
            2 => Cond::Nc,
            _ => Cond::C,
        }
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cond::Nz => "NZ",
            Cond::Z => "Z",
            Cond::Nc => "NC",
            Cond::C => "C",
        };
        f.write_str(name)
    }
}

/// Accumulator operation selected by the `yyy` field of `0x80–0xBF` and the
/// `ALU A,d8` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AluOp::Add => "ADD",
            AluOp::Adc => "ADC",
            AluOp::Sub => "SUB",
            AluOp::Sbc => "SBC",
            AluOp::And => "AND",
            AluOp::Xor => "XOR",
            AluOp::Or => "OR",
            AluOp::Cp => "CP",
        };
        f.write_str(name)
    }
}

/// Semantic tag of an opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Nop,
    /// Recognised but inert until an interrupt controller exists.
    Halt,
    /// Recognised but inert; consumes its padding byte.
    Stop,
    /// `LD rr,d16`
    LdR16Imm(R16),
    /// `LD (rr),A`
    StoreA(Indirect),
    /// `LD A,(rr)`
    LoadA(Indirect),
    /// `LD (a16),SP`
    StoreSp,
    Inc16(R16),
    Dec16(R16),
    /// `ADD HL,rr`
    AddHl(R16),
    Inc8(R8),
    Dec8(R8),
    /// `LD r,d8`
    LdR8Imm(R8),
    /// `JR e8` when the condition is `None`, otherwise `JR cc,e8`.
    Jr(Option<Cond>),
    /// `LD r,r'`
    Ld { dst: R8, src: R8 },
    /// `ALU A,r`
    Alu(AluOp, R8),
    /// `ALU A,d8`
    AluImm(AluOp),
    Daa,
    Cpl,
    Scf,
    Ccf,
    Unknown,
}

impl Op {
    /// Decode a single opcode byte.
    pub const fn decode(opcode: u8) -> Op {
        let y = (opcode >> 3) & 0x07;
        let z = opcode & 0x07;
        let p = (opcode >> 4) & 0x03;

        match opcode {
            0x00 => Op::Nop,
            0x08 => Op::StoreSp,
            0x10 => Op::Stop,
            0x18 => Op::Jr(None),
            0x20 | 0x28 | 0x30 | 0x38 => Op::Jr(Some(Cond::from_bits(y))),
            0x01 | 0x11 | 0x21 | 0x31 => Op::LdR16Imm(R16::from_bits(p)),
            0x02 | 0x12 | 0x22 | 0x32 => Op::StoreA(Indirect::from_bits(p)),
            0x0A | 0x1A | 0x2A | 0x3A => Op::LoadA(Indirect::from_bits(p)),
            0x03 | 0x13 | 0x23 | 0x33 => Op::Inc16(R16::from_bits(p)),
            0x0B | 0x1B | 0x2B | 0x3B => Op::Dec16(R16::from_bits(p)),
            0x09 | 0x19 | 0x29 | 0x39 => Op::AddHl(R16::from_bits(p)),
            0x27 => Op::Daa,
            0x2F => Op::Cpl,
            0x37 => Op::Scf,
            0x3F => Op::Ccf,
            0x00..=0x3F if z == 4 => Op::Inc8(R8::from_bits(y)),
            0x00..=0x3F if z == 5 => Op::Dec8(R8::from_bits(y)),
            0x00..=0x3F if z == 6 => Op::LdR8Imm(R8::from_bits(y)),
            // LD (HL),(HL) sits where HALT is.
            0x76 => Op::Halt,
            0x40..=0x7F => Op::Ld {
                dst: R8::from_bits(y),
                src: R8::from_bits(z),
            },
            0x80..=0xBF => Op::Alu(AluOp::from_bits(y), R8::from_bits(z)),
            0xC0..=0xFF if z == 6 => Op::AluImm(AluOp::from_bits(y)),
            _ => Op::Unknown,
        }
    }

    /// Number and width of immediate bytes following the opcode.
    pub const fn operand_kind(self) -> OperandKind {
        match self {
            Op::LdR16Imm(_) | Op::StoreSp => OperandKind::Imm16,
            Op::LdR8Imm(_) | Op::Jr(_) | Op::AluImm(_) | Op::Stop => OperandKind::Imm8,
            _ => OperandKind::None,
        }
    }

    /// Mnemonic template. `d8`, `r8`, `d16` and `a16` mark where the
    /// immediate goes when an instruction is rendered.
    pub fn mnemonic(self) -> String {
        match self {
            Op::Nop => "NOP".to_string(),
            Op::Halt => "HALT".to_string(),
            Op::Stop => "STOP".to_string(),
            Op::LdR16Imm(rr) => format!("LD {rr}, d16"),
            Op::StoreA(ind) => format!("LD ({ind}), A"),
            Op::LoadA(ind) => format!("LD A, ({ind})"),
            Op::StoreSp => "LD (a16), SP".to_string(),
            Op::Inc16(rr) => format!("INC {rr}"),
            Op::Dec16(rr) => format!("DEC {rr}"),
            Op::AddHl(rr) => format!("ADD HL, {rr}"),
            Op::Inc8(r) => format!("INC {r}"),
            Op::Dec8(r) => format!("DEC {r}"),
            Op::LdR8Imm(r) => format!("LD {r}, d8"),
            Op::Jr(None) => "JR r8".to_string(),
            Op::Jr(Some(cc)) => format!("JR {cc}, r8"),
            Op::Ld { dst, src } => format!("LD {dst}, {src}"),
            Op::Alu(op, r) => format!("{op} A, {r}"),
            Op::AluImm(op) => format!("{op} A, d8"),
            Op::Daa => "DAA".to_string(),
            Op::Cpl => "CPL".to_string(),
            Op::Scf => "SCF".to_string(),
            Op::Ccf => "CCF".to_string(),
            Op::Unknown => "???".to_string(),
        }
    }
}

/// Operand fetch policy of an opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandKind {
    None,
    Imm8,
    Imm16,
}

impl OperandKind {
    /// Bytes consumed after the opcode byte.
    pub const fn len(self) -> u16 {
        match self {
            OperandKind::None => 0,
            OperandKind::Imm8 => 1,
            OperandKind::Imm16 => 2,
        }
    }
}

/// Immediate value fetched for one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    None,
    Byte(u8),
    Word(u16),
}

impl Operand {
    #[inline]
    pub(crate) fn byte(self) -> u8 {
        match self {
            Operand::Byte(v) => v,
            Operand::Word(v) => v as u8,
            Operand::None => 0,
        }
    }

    #[inline]
    pub(crate) fn word(self) -> u16 {
        match self {
            Operand::Word(v) => v,
            Operand::Byte(v) => v as u16,
            Operand::None => 0,
        }
    }
}

/// Table entry for one opcode byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Opcode {
    pub mnemonic: String,
    pub operand: OperandKind,
    pub op: Op,
}

impl Opcode {
    fn new(opcode: u8) -> Self {
        let op = Op::decode(opcode);
        Self {
            mnemonic: op.mnemonic(),
            operand: op.operand_kind(),
            op,
        }
    }

    /// Total instruction size in bytes, opcode included.
    pub fn size(&self) -> u16 {
        1 + self.operand.len()
    }

    pub fn is_known(&self) -> bool {
        self.op != Op::Unknown
    }
}

lazy_static! {
    /// Descriptors for all 256 unprefixed opcodes, indexed by opcode byte.
    pub static ref OPCODES: [Opcode; 256] = std::array::from_fn(|i| Opcode::new(i as u8));
}

/// A decoded instruction with its resolved immediate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Address of the opcode byte.
    pub addr: u16,
    pub opcode: u8,
    pub operand: Operand,
}

impl Instruction {
    pub fn descriptor(&self) -> &'static Opcode {
        &OPCODES[self.opcode as usize]
    }

    pub fn op(&self) -> Op {
        self.descriptor().op
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mnemonic = self.descriptor().mnemonic.as_str();
        let (placeholders, value) = match self.operand {
            Operand::None => return f.write_str(mnemonic),
            Operand::Byte(v) => (["d8", "r8"], format!("0x{v:02X}")),
            Operand::Word(v) => (["d16", "a16"], format!("0x{v:04X}")),
        };
        match placeholders.iter().find(|p| mnemonic.contains(*p)) {
            Some(placeholder) => f.write_str(&mnemonic.replacen(placeholder, &value, 1)),
            // STOP's padding byte is not shown.
            None => f.write_str(mnemonic),
        }
    }
}
