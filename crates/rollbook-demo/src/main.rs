use clap::Parser;
use rollbook_demo::{log_level, run, Cli};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _ = TermLogger::init(
        log_level(cli.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
    print!("{}", run(&cli)?);
    Ok(())
}
