use std::io::{self, BufRead, Write};

use anyhow::Context;
use voyage_cli::{commands::HELP, execute, telemetry, Command, Outcome};
use voyage_store::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;
    telemetry::init(&config.logging.filter).context("Failed to install log subscriber")?;

    let mut manager = config.inventory().context("Failed to seed inventory")?;
    tracing::info!("Voyage ready with {} items", manager.len());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", HELP)?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "{}", err)?;
                continue;
            }
        };

        match execute(&mut manager, command)? {
            Outcome::Print(text) => writeln!(stdout, "{}", text)?,
            Outcome::Quit => break,
        }
    }

    tracing::info!("Voyage shutting down with {} active bookings", manager.list_bookings().len());
    Ok(())
}
