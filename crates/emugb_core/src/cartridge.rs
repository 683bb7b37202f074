mod rom_only;

use std::path::Path;

use anyhow::{Context, Result};

use crate::memory::Memory;

pub use rom_only::RomOnly;

/// First byte of the upper-case ASCII title in the cartridge header.
pub const TITLE_START: u16 = 0x0134;
/// Last byte of the title field (inclusive).
pub const TITLE_END: u16 = 0x0143;
/// Cartridge type byte, selecting the memory bank controller.
pub const CARTRIDGE_TYPE: u16 = 0x0147;
/// Size of the header area; execution conventionally begins right after it.
pub const HEADER_END: usize = 0x0150;

/// Wrapper enum for supported cartridge backends.
///
/// Only plain ROM cartridges are modelled for now. Bank-switched mappers are
/// added as further variants, so the address router never depends on a
/// concrete backend.
pub enum Cartridge {
    RomOnly(RomOnly),
}

impl Cartridge {
    pub fn rom_only(rom: Vec<u8>) -> Self {
        Self::RomOnly(RomOnly::new(rom))
    }

    /// Pick a backend based on the cartridge type byte at 0x0147.
    ///
    /// Types we cannot bank-switch yet fall back to a flat ROM mapping, which
    /// still runs code from bank 0 and the first switchable bank.
    pub fn from_rom(rom: Vec<u8>) -> Self {
        if rom.len() < HEADER_END {
            log::warn!(
                "ROM image is only {} bytes; header fields will read as zero",
                rom.len()
            );
        }

        let cart_type = rom.get(CARTRIDGE_TYPE as usize).copied().unwrap_or(0);
        match cart_type {
            // ROM only, ROM+RAM, ROM+RAM+BATTERY.
            0x00 | 0x08 | 0x09 => {}
            other => {
                log::warn!(
                    "cartridge type 0x{other:02X} is not supported yet, mapping it as plain ROM"
                );
            }
        }

        Self::rom_only(rom)
    }

    /// Raw cartridge type byte from the header.
    pub fn cartridge_type(&self) -> u8 {
        self.get_byte(CARTRIDGE_TYPE)
    }

    /// Game title from the header: bytes 0x0134..=0x0143 up to the first NUL.
    pub fn title(&self) -> String {
        (TITLE_START..=TITLE_END)
            .map(|addr| self.get_byte(addr))
            .take_while(|&byte| byte != 0)
            .map(char::from)
            .collect()
    }
}

impl Memory for Cartridge {
    fn get_byte(&self, addr: u16) -> u8 {
        match self {
            Cartridge::RomOnly(c) => c.get_byte(addr),
        }
    }

    fn set_byte(&mut self, addr: u16, value: u8) {
        match self {
            Cartridge::RomOnly(c) => c.set_byte(addr, value),
        }
    }
}

/// Read a ROM image from disk and wrap it in the matching backend.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Cartridge> {
    let path = path.as_ref();
    let rom = std::fs::read(path)
        .with_context(|| format!("failed to read ROM '{}'", path.display()))?;
    log::info!("loaded ROM '{}' ({} bytes)", path.display(), rom.len());
    Ok(Cartridge::from_rom(rom))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rom_with_header(title: &[u8], cart_type: u8) -> Vec<u8> {
        let mut rom = vec![0u8; 0x8000];
        let start = TITLE_START as usize;
        rom[start..start + title.len()].copy_from_slice(title);
        rom[CARTRIDGE_TYPE as usize] = cart_type;
        rom
    }

    #[test]
    fn title_stops_at_first_nul() {
        let cart = Cartridge::from_rom(rom_with_header(b"TETRIS\0JUNK", 0x00));
        assert_eq!(cart.title(), "TETRIS");
    }

    #[test]
    fn title_uses_full_sixteen_bytes_without_terminator() {
        let cart = Cartridge::from_rom(rom_with_header(b"ABCDEFGHIJKLMNOP", 0x00));
        assert_eq!(cart.title(), "ABCDEFGHIJKLMNOP");
    }

    #[test]
    fn short_image_has_empty_title() {
        let cart = Cartridge::from_rom(vec![0x00; 0x10]);
        assert_eq!(cart.title(), "");
        assert_eq!(cart.cartridge_type(), 0x00);
    }

    #[test]
    fn unsupported_mapper_falls_back_to_flat_rom() {
        let cart = Cartridge::from_rom(rom_with_header(b"POKEMON", 0x13));
        assert_eq!(cart.cartridge_type(), 0x13);
        assert_eq!(cart.title(), "POKEMON");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = match load_from_path("/definitely/not/here.gb") {
            Ok(_) => panic!("expected an error for a missing ROM"),
            Err(err) => err,
        };
        assert!(err.to_string().contains("/definitely/not/here.gb"));
    }

    #[test]
    fn loads_image_from_disk() {
        let path = std::env::temp_dir().join(format!("emugb-load-{}.gb", std::process::id()));
        std::fs::write(&path, rom_with_header(b"DISK", 0x00)).unwrap();
        let cart = load_from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cart.title(), "DISK");
    }
}
