use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Packed contents of the F register.
    ///
    /// Layout (bit index in the byte, from MSB to LSB):
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 are always zero.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub(crate) struct Flags: u8 {
        const Z = 0b1000_0000;
        const N = 0b0100_0000;
        const H = 0b0010_0000;
        const C = 0b0001_0000;
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::empty()
    }
}

/// A single condition flag in F.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    Z,
    N,
    H,
    C,
}

impl Flag {
    #[inline]
    const fn mask(self) -> Flags {
        match self {
            Flag::Z => Flags::Z,
            Flag::N => Flags::N,
            Flag::H => Flags::H,
            Flag::C => Flags::C,
        }
    }
}

/// Registers for the Game Boy CPU (LR35902).
///
/// `f` is kept private: every write goes through `Flags`, which drops the
/// low nibble, so the raw byte can never hold bits 0–3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    /// Raw F byte.
    #[inline]
    pub fn f(&self) -> u8 {
        self.f.bits()
    }

    /// Write F from a raw byte. Bits 0–3 are discarded.
    #[inline]
    pub fn set_f(&mut self, value: u8) {
        self.f = Flags::from_bits_truncate(value);
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.f.contains(flag.mask())
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.f.set(flag.mask(), value);
    }

    #[inline]
    pub(crate) fn clear_flags(&mut self) {
        self.f = Flags::empty();
    }

    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f()])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.set_f(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AF: {:04X} BC: {:04X} DE: {:04X} HL: {:04X} SP: {:04X} PC: {:04X}",
            self.af(),
            self.bc(),
            self.de(),
            self.hl(),
            self.sp,
            self.pc
        )
    }
}
