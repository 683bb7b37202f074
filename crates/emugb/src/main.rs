use anyhow::Result;
use emugb::{parse_args, USAGE};
use env_logger::Env;

fn main() -> Result<()> {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "emugb".to_string());

    let config = parse_args(args).unwrap_or_else(|err| {
        eprintln!("{err}");
        eprintln!("Usage: {program} {USAGE}");
        std::process::exit(1);
    });

    let default_filter = if config.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let summary = emugb::run(&config)?;
    log::info!("{summary}");
    Ok(())
}
