use crate::cpu::opcodes::Cond;
use crate::cpu::Cpu;

impl Cpu {
    /// `JR e8` / `JR cc,e8`. The displacement byte has already been
    /// consumed, so a jump is relative to the following instruction. Returns
    /// whether the jump was taken.
    pub(super) fn exec_jr(&mut self, cond: Option<Cond>, displacement: u8) -> bool {
        let taken = cond.map_or(true, |cc| self.condition(cc));
        if taken {
            self.alu_jr(displacement);
        }
        taken
    }
}
