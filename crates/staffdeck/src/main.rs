#![forbid(unsafe_code)]

//! staffdeck binary entry point.

use std::sync::Arc;

use anyhow::bail;
use clap::Parser;
use minitea::Program;

use staffdeck::app::App;
use staffdeck::cli::Cli;
use staffdeck::config::Config;
use staffdeck::logging;
use staffdeck::service::HttpEmployeeService;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(cli)?;
    logging::init(&config)?;

    let service = HttpEmployeeService::new(&config.api_url, &config.token)?;
    let app = App::new(&config, Arc::new(service));

    let mut program = Program::new(app);
    if config.alt_screen {
        program = program.with_alt_screen();
    }
    let final_app = program.run()?;

    // Auth failure is terminal for the session; report it once the
    // terminal is restored so the message is actually visible.
    if let Some(reason) = final_app.fatal_error() {
        bail!("{reason}");
    }
    Ok(())
}
