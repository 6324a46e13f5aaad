// src/main.rs
use std::path::Path;

use clap::Parser;

use passmeter::cli::handlers::{self, EMPTY_SELECTION_PROMPT};
use passmeter::cli::{menu, Args, CliCommand};
use passmeter::core::Config;
use passmeter::{logging, meter, GeneratorError, PasswordPolicyEngine};

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();
    logging::init(&config);
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let engine = PasswordPolicyEngine::new();
    let styled = !args.no_color && meter::stdout_is_styled();

    match args.command.unwrap_or(CliCommand::Menu) {
        CliCommand::Generate { length, classes, count, seed } => {
            let request = handlers::build_request(&config, length, classes);
            match handlers::handle_generate(&engine, &request, count as usize, seed) {
                Ok(output) => handlers::print_generate(&output, args.json, styled)?,
                Err(GeneratorError::EmptySelection) => handlers::print_error(EMPTY_SELECTION_PROMPT, args.json)?,
                Err(e) => return Err(e.into()),
            }
        }
        CliCommand::Strength { length, classes } => {
            let request = handlers::build_request(&config, Some(length), classes);
            let output = handlers::handle_strength(&engine, request.length, request.classes);
            handlers::print_strength(&output, args.json, styled)?;
        }
        CliCommand::Menu => menu::run_menu(&engine, &config, styled)?,
    }

    Ok(())
}
