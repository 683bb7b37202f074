use crate::cpu::Cpu;

impl Cpu {
    pub(super) fn exec_halt(&mut self) {
        // Nothing can wake the CPU without an interrupt controller, so HALT
        // does not enter a halted state yet.
        log::debug!("HALT at 0x{:04X} ignored", self.regs.pc.wrapping_sub(1));
    }

    pub(super) fn exec_stop(&mut self, padding: u8) {
        // STOP is a 2-byte instruction; the padding byte has already been
        // fetched so PC matches hardware.
        if padding != 0 {
            log::debug!("STOP with non-zero padding byte 0x{padding:02X}");
        }
        log::debug!("STOP at 0x{:04X} ignored", self.regs.pc.wrapping_sub(2));
    }
}
