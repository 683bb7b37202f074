use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Create a CPU with every register cleared.
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
        }
    }

    /// Create a CPU that starts fetching at `pc`.
    ///
    /// Callers that skip the boot ROM use this to jump straight past the
    /// cartridge header (see [`crate::ENTRY_POINT`]).
    pub fn with_pc(pc: u16) -> Self {
        let mut cpu = Self::new();
        cpu.regs.pc = pc;
        cpu
    }

    /// Reset the CPU to its power-on state.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
    }
}
