use crate::cartridge::Cartridge;
use crate::memory::Memory;

/// Fixed regions of the DMG memory map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// 0x0000–0x7FFF, cartridge ROM (bank 0 plus the switchable bank).
    Rom,
    /// 0x8000–0x9FFF
    Vram,
    /// 0xA000–0xBFFF, RAM on the cartridge.
    ExternalRam,
    /// 0xC000–0xDFFF
    Wram,
    /// 0xE000–0xFDFF, mirror of 0xC000–0xDDFF on hardware.
    EchoRam,
    /// 0xFE00–0xFE9F, sprite attribute table.
    Oam,
    /// 0xFEA0–0xFEFF
    Unusable,
    /// 0xFF00–0xFF7F
    Io,
    /// 0xFF80–0xFFFE
    Hram,
    /// 0xFFFF
    InterruptEnable,
}

impl Region {
    /// Classify an address. The match is exhaustive over `u16`, so every
    /// address lands in exactly one region.
    pub const fn of(addr: u16) -> Self {
        match addr {
            0x0000..=0x7FFF => Region::Rom,
            0x8000..=0x9FFF => Region::Vram,
            0xA000..=0xBFFF => Region::ExternalRam,
            0xC000..=0xDFFF => Region::Wram,
            0xE000..=0xFDFF => Region::EchoRam,
            0xFE00..=0xFE9F => Region::Oam,
            0xFEA0..=0xFEFF => Region::Unusable,
            0xFF00..=0xFF7F => Region::Io,
            0xFF80..=0xFFFE => Region::Hram,
            0xFFFF => Region::InterruptEnable,
        }
    }

    /// Whether accesses to this region are forwarded to the cartridge.
    pub const fn is_cartridge(self) -> bool {
        matches!(self, Region::Rom | Region::ExternalRam)
    }
}

/// Address router between the CPU and the rest of the machine.
///
/// Cartridge ROM and external RAM are delegated to the cartridge backend.
/// Nothing else is backed yet: those regions read as 0 and drop writes until
/// the matching peripheral is attached.
pub struct Mmu {
    cartridge: Cartridge,
}

impl Mmu {
    pub fn new(cartridge: Cartridge) -> Self {
        Self { cartridge }
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }
}

impl Memory for Mmu {
    fn get_byte(&self, addr: u16) -> u8 {
        let region = Region::of(addr);
        if region.is_cartridge() {
            self.cartridge.get_byte(addr)
        } else {
            0
        }
    }

    fn set_byte(&mut self, addr: u16, value: u8) {
        let region = Region::of(addr);
        if region.is_cartridge() {
            self.cartridge.set_byte(addr, value);
        } else {
            log::trace!("dropping write 0x{value:02X} to {region:?} at 0x{addr:04X}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mmu_with_pattern() -> Mmu {
        // Every byte of the 32 KiB image is non-zero so delegated reads are
        // distinguishable from stubbed regions.
        let rom = (0..0x8000u32).map(|i| (i % 0xFF) as u8 | 0x01).collect();
        Mmu::new(Cartridge::rom_only(rom))
    }

    #[test]
    fn region_boundaries() {
        let table = [
            (0x0000, Region::Rom),
            (0x7FFF, Region::Rom),
            (0x8000, Region::Vram),
            (0x9FFF, Region::Vram),
            (0xA000, Region::ExternalRam),
            (0xBFFF, Region::ExternalRam),
            (0xC000, Region::Wram),
            (0xDFFF, Region::Wram),
            (0xE000, Region::EchoRam),
            (0xFDFF, Region::EchoRam),
            (0xFE00, Region::Oam),
            (0xFE9F, Region::Oam),
            (0xFEA0, Region::Unusable),
            (0xFEFF, Region::Unusable),
            (0xFF00, Region::Io),
            (0xFF7F, Region::Io),
            (0xFF80, Region::Hram),
            (0xFFFE, Region::Hram),
            (0xFFFF, Region::InterruptEnable),
        ];
        for (addr, region) in table {
            assert_eq!(Region::of(addr), region, "address 0x{addr:04X}");
        }
    }

    #[test]
    fn rom_reads_delegate_to_cartridge() {
        let mmu = mmu_with_pattern();
        assert_eq!(mmu.get_byte(0x0000), mmu.cartridge().get_byte(0x0000));
        assert_eq!(mmu.get_byte(0x7FFF), mmu.cartridge().get_byte(0x7FFF));
        assert_ne!(mmu.get_byte(0x0000), 0);
        assert_ne!(mmu.get_byte(0x7FFF), 0);
    }

    #[test]
    fn unbacked_regions_read_zero() {
        let mmu = mmu_with_pattern();
        for addr in [0x8000, 0x9FFF, 0xC000, 0xE000, 0xFE00, 0xFEA0, 0xFF00, 0xFF80, 0xFFFF] {
            assert_eq!(mmu.get_byte(addr), 0, "address 0x{addr:04X}");
        }
    }

    #[test]
    fn writes_to_unbacked_regions_are_discarded() {
        let mut mmu = mmu_with_pattern();
        mmu.set_byte(0xC000, 0x42);
        assert_eq!(mmu.get_byte(0xC000), 0);
        mmu.set_byte(0xFF80, 0x42);
        assert_eq!(mmu.get_byte(0xFF80), 0);
    }

    #[test]
    fn rom_writes_do_not_modify_rom_only_cartridge() {
        let mut mmu = mmu_with_pattern();
        let before = mmu.get_byte(0x2000);
        mmu.set_byte(0x2000, before.wrapping_add(1));
        assert_eq!(mmu.get_byte(0x2000), before);
    }

    #[test]
    fn external_ram_window_goes_through_cartridge() {
        // A 48 KiB image reaches into 0xA000, which a RomOnly backend
        // exposes linearly.
        let mut rom = vec![0u8; 0xC000];
        rom[0xA000] = 0x5A;
        let mmu = Mmu::new(Cartridge::rom_only(rom));
        assert_eq!(mmu.get_byte(0xA000), 0x5A);
        assert_eq!(mmu.get_byte(0xBFFF), 0x00);
    }
}
