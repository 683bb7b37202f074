//! Property-based tests for the address router and the `Memory` word helpers.

use emugb_core::{Cartridge, Memory, Mmu, Region};
use proptest::prelude::*;

fn patterned_rom() -> Vec<u8> {
    (0..0x8000usize).map(|i| (i ^ (i >> 8)) as u8).collect()
}

fn is_cartridge_addr(addr: u16) -> bool {
    addr <= 0x7FFF || (0xA000..=0xBFFF).contains(&addr)
}

struct FlatMemory {
    bytes: Vec<u8>,
}

impl Memory for FlatMemory {
    fn get_byte(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    fn set_byte(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }
}

proptest! {
    #[test]
    fn prop_word_round_trip(addr in any::<u16>(), value in any::<u16>()) {
        let mut mem = FlatMemory { bytes: vec![0; 0x10000] };

        mem.set_word(addr, value);
        prop_assert_eq!(mem.get_word(addr), value);
        prop_assert_eq!(mem.get_byte(addr), value as u8);
        prop_assert_eq!(mem.get_byte(addr.wrapping_add(1)), (value >> 8) as u8);
    }

    #[test]
    fn prop_region_cartridge_split(addr in any::<u16>()) {
        prop_assert_eq!(Region::of(addr).is_cartridge(), is_cartridge_addr(addr));
    }

    #[test]
    fn prop_mmu_routes_reads(addr in any::<u16>()) {
        let rom = patterned_rom();
        let mmu = Mmu::new(Cartridge::rom_only(rom.clone()));

        let expected = if addr <= 0x7FFF { rom[addr as usize] } else { 0 };
        prop_assert_eq!(mmu.get_byte(addr), expected);
    }

    #[test]
    fn prop_writes_never_change_reads(addr in any::<u16>(), value in any::<u8>()) {
        let mut mmu = Mmu::new(Cartridge::rom_only(patterned_rom()));
        let before = mmu.get_byte(addr);

        mmu.set_byte(addr, value);
        prop_assert_eq!(mmu.get_byte(addr), before);
    }
}
