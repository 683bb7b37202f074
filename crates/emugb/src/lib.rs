use std::fmt;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use emugb_core::cartridge::{self, Cartridge};
use emugb_core::{Cpu, Mmu, Registers, ENTRY_POINT};
use typed_builder::TypedBuilder;

/// Argument synopsis, printed after the program name.
pub const USAGE: &str = "[--steps N] [--entry ADDR] [--strict] [--quiet] <rom_path>";

pub const DEFAULT_MAX_STEPS: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct RunConfig {
    #[builder(setter(into))]
    pub rom_path: PathBuf,
    #[builder(default = ENTRY_POINT)]
    pub entry_point: u16,
    #[builder(default = DEFAULT_MAX_STEPS)]
    pub max_steps: u32,
    /// Abort on the first unknown opcode instead of skipping it.
    #[builder(default)]
    pub strict: bool,
    /// Lower the default log filter so the per-instruction trace is hidden.
    #[builder(default)]
    pub quiet: bool,
}

/// Parse command-line arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<RunConfig>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut rom_path = None;
    let mut entry_point = ENTRY_POINT;
    let mut max_steps = DEFAULT_MAX_STEPS;
    let mut strict = false;
    let mut quiet = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--steps" => {
                let value = args.next().ok_or_else(|| anyhow!("--steps needs a value"))?;
                max_steps = parse_number(&value)
                    .with_context(|| format!("invalid step count '{value}'"))?;
            }
            "--entry" => {
                let value = args.next().ok_or_else(|| anyhow!("--entry needs a value"))?;
                entry_point = parse_number(&value)
                    .ok()
                    .and_then(|addr| u16::try_from(addr).ok())
                    .ok_or_else(|| anyhow!("invalid entry address '{value}'"))?;
            }
            "--strict" => strict = true,
            "--quiet" => quiet = true,
            flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
            path => {
                if rom_path.is_some() {
                    bail!("unexpected argument '{path}'");
                }
                rom_path = Some(PathBuf::from(path));
            }
        }
    }

    let rom_path = rom_path.ok_or_else(|| anyhow!("missing ROM path"))?;
    Ok(RunConfig::builder()
        .rom_path(rom_path)
        .entry_point(entry_point)
        .max_steps(max_steps)
        .strict(strict)
        .quiet(quiet)
        .build())
}

/// Decimal, or hex with a `0x` prefix.
fn parse_number(text: &str) -> Result<u32> {
    let value = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16)?,
        None => text.parse()?,
    };
    Ok(value)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: u32,
    pub unknown_opcodes: u32,
    pub registers: Registers,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ran {} steps ({} unknown opcodes), {}",
            self.steps, self.unknown_opcodes, self.registers
        )
    }
}

/// Load the ROM named by `config`, print its title and run it.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let cartridge = cartridge::load_from_path(&config.rom_path)?;
    println!("title: {}", cartridge.title());
    run_cartridge(cartridge, config)
}

/// Run `config.max_steps` instructions of `cartridge` from the configured
/// entry point.
pub fn run_cartridge(cartridge: Cartridge, config: &RunConfig) -> Result<RunSummary> {
    let mut mmu = Mmu::new(cartridge);
    let mut cpu = Cpu::with_pc(config.entry_point);
    let mut unknown_opcodes = 0;

    for _ in 0..config.max_steps {
        let step = cpu.step(&mut mmu);
        if step.is_unknown() {
            if config.strict {
                bail!("{step} in strict mode");
            }
            unknown_opcodes += 1;
        }
    }

    Ok(RunSummary {
        steps: config.max_steps,
        unknown_opcodes,
        registers: cpu.regs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn rom_with_program(program: &[u8]) -> Vec<u8> {
        let mut rom = vec![0u8; 0x8000];
        let start = ENTRY_POINT as usize;
        rom[start..start + program.len()].copy_from_slice(program);
        rom
    }

    #[test]
    fn defaults_with_only_a_path() {
        let config = parse_args(args(&["game.gb"])).unwrap();
        assert_eq!(config, RunConfig::builder().rom_path("game.gb").build());
        assert_eq!(config.entry_point, 0x0150);
        assert_eq!(config.max_steps, 10);
        assert!(!config.strict);
        assert!(!config.quiet);
    }

    #[test]
    fn parses_every_option() {
        let config = parse_args(args(&[
            "--steps", "0x20", "--entry", "0x0100", "--strict", "--quiet", "rom.gb",
        ]))
        .unwrap();
        assert_eq!(config.rom_path, PathBuf::from("rom.gb"));
        assert_eq!(config.max_steps, 32);
        assert_eq!(config.entry_point, 0x0100);
        assert!(config.strict);
        assert!(config.quiet);
    }

    #[test]
    fn decimal_step_count() {
        let config = parse_args(args(&["rom.gb", "--steps", "250"])).unwrap();
        assert_eq!(config.max_steps, 250);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["--steps"])).is_err());
        assert!(parse_args(args(&["--steps", "ten", "rom.gb"])).is_err());
        assert!(parse_args(args(&["--entry", "0x10000", "rom.gb"])).is_err());
        assert!(parse_args(args(&["--verbose", "rom.gb"])).is_err());
        assert!(parse_args(args(&["a.gb", "b.gb"])).is_err());
    }

    #[test]
    fn missing_path_is_reported() {
        let err = parse_args(args(&["--strict"])).unwrap_err();
        assert_eq!(err.to_string(), "missing ROM path");
    }

    #[test]
    fn runs_the_configured_number_of_steps() {
        // LD A,0x05 ; INC A ; then NOPs.
        let rom = rom_with_program(&[0x3E, 0x05, 0x3C]);
        let config = RunConfig::builder().rom_path("unused.gb").build();

        let summary = run_cartridge(Cartridge::rom_only(rom), &config).unwrap();
        assert_eq!(summary.steps, 10);
        assert_eq!(summary.unknown_opcodes, 0);
        assert_eq!(summary.registers.a, 0x06);
        assert_eq!(summary.registers.pc, 0x0150 + 3 + 8);
    }

    #[test]
    fn counts_unknown_opcodes_when_lenient() {
        let rom = rom_with_program(&[0xD3, 0xDB, 0x00]);
        let config = RunConfig::builder()
            .rom_path("unused.gb")
            .max_steps(3)
            .build();

        let summary = run_cartridge(Cartridge::rom_only(rom), &config).unwrap();
        assert_eq!(summary.unknown_opcodes, 2);
        assert_eq!(summary.registers.pc, 0x0153);
    }

    #[test]
    fn strict_mode_stops_on_unknown_opcode() {
        let rom = rom_with_program(&[0x00, 0xD3]);
        let config = RunConfig::builder()
            .rom_path("unused.gb")
            .strict(true)
            .build();

        let err = run_cartridge(Cartridge::rom_only(rom), &config).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Unknown opcode found (PC: 0x0151 OPCODE: 0xD3)"));
    }

    #[test]
    fn custom_entry_point() {
        let mut rom = vec![0u8; 0x8000];
        rom[0x0100] = 0x18; // JR -2
        rom[0x0101] = 0xFE;
        let config = RunConfig::builder()
            .rom_path("unused.gb")
            .entry_point(0x0100)
            .build();

        let summary = run_cartridge(Cartridge::rom_only(rom), &config).unwrap();
        assert_eq!(summary.registers.pc, 0x0100);
    }

    #[test]
    fn run_reports_unreadable_rom() {
        let config = RunConfig::builder()
            .rom_path("/nonexistent/emugb/missing.gb")
            .build();
        let err = run(&config).unwrap_err();
        assert!(format!("{err:#}").contains("missing.gb"));
    }
}
