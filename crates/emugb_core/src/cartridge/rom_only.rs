use crate::memory::Memory;

/// Cartridge without a memory bank controller.
///
/// The ROM image is mapped linearly from address 0. Reads past the end of
/// the image return 0 and every write is ignored, so the external RAM window
/// simply reads back as zero.
pub struct RomOnly {
    rom: Vec<u8>,
}

impl RomOnly {
    pub fn new(rom: Vec<u8>) -> Self {
        Self { rom }
    }

    pub fn rom(&self) -> &[u8] {
        &self.rom
    }
}

impl Memory for RomOnly {
    #[inline]
    fn get_byte(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(0)
    }

    #[inline]
    fn set_byte(&mut self, _addr: u16, _value: u8) {}
}
