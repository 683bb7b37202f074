pub mod cartridge;
pub mod cpu;
pub mod memory;
pub mod mmu;

pub use cartridge::Cartridge;
pub use cpu::{Cpu, Flag, Registers, Step};
pub use memory::Memory;
pub use mmu::{Mmu, Region};

/// First instruction after the cartridge header, where execution begins
/// when the boot ROM is skipped.
pub const ENTRY_POINT: u16 = 0x0150;
