/// Byte-addressable view of the 16-bit Game Boy address space.
///
/// Every implementer must be total: reads return a value for every address
/// (0 where nothing is mapped) and writes to read-only or unmapped locations
/// are silently dropped. The CPU never sees a bus error.
pub trait Memory {
    fn get_byte(&self, addr: u16) -> u8;
    fn set_byte(&mut self, addr: u16, value: u8);

    /// Little-endian 16-bit read. The high byte comes from `addr + 1`,
    /// wrapping at the top of the address space.
    #[inline]
    fn get_word(&self, addr: u16) -> u16 {
        let lo = self.get_byte(addr);
        let hi = self.get_byte(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Little-endian 16-bit write, low byte first.
    #[inline]
    fn set_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.set_byte(addr, lo);
        self.set_byte(addr.wrapping_add(1), hi);
    }
}

#[cfg(test)]
mod tests {
    use super::Memory;

    struct Flat([u8; 0x10000]);

    impl Memory for Flat {
        fn get_byte(&self, addr: u16) -> u8 {
            self.0[addr as usize]
        }

        fn set_byte(&mut self, addr: u16, value: u8) {
            self.0[addr as usize] = value;
        }
    }

    #[test]
    fn words_are_little_endian() {
        let mut mem = Flat([0; 0x10000]);
        mem.set_word(0xC000, 0x1234);
        assert_eq!(mem.get_byte(0xC000), 0x34);
        assert_eq!(mem.get_byte(0xC001), 0x12);
        assert_eq!(mem.get_word(0xC000), 0x1234);
    }

    #[test]
    fn word_access_wraps_at_top_of_address_space() {
        let mut mem = Flat([0; 0x10000]);
        mem.set_word(0xFFFF, 0xBEEF);
        assert_eq!(mem.get_byte(0xFFFF), 0xEF);
        assert_eq!(mem.get_byte(0x0000), 0xBE);
        assert_eq!(mem.get_word(0xFFFF), 0xBEEF);
    }
}
