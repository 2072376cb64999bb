use std::path::PathBuf;

use clap::Parser;
use eyre::WrapErr;
use log::info;

use toy_circuit::{ComponentId, Layout};

#[derive(Parser)]
#[command(name = "toy-circuit")]
#[command(about = "Shows which LEDs of a toy circuit layout light up", long_about = None)]
#[command(version)]
struct Cli {
    /// RON layout file
    #[arg(value_name = "FILE")]
    layout: PathBuf,

    /// Toggle a switch by id before reporting, may be repeated
    #[arg(long = "toggle", value_name = "ID")]
    toggles: Vec<u32>,
}

fn main() -> eyre::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let layout = Layout::load(&cli.layout)
        .wrap_err_with(|| format!("failed to load {}", cli.layout.display()))?;
    let mut board = layout.build_board()?;
    info!("loaded {} components from {}", board.len(), cli.layout.display());

    for id in cli.toggles.into_iter().map(ComponentId::new) {
        let state = board
            .toggle_switch(id)
            .wrap_err_with(|| format!("failed to toggle {id}"))?;
        info!("toggled {id} {state}");
    }

    for led in board.leds() {
        let lit = board.report().is_lit(led.id()).unwrap_or(false);
        println!(
            "{} {} at {}: {}",
            led.kind().display_name(),
            led.id(),
            led.pos(),
            if lit { "lit" } else { "dark" }
        );
    }

    Ok(())
}
