mod args;
mod settings;

use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use envconf::{Envconf, Environment};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

use args::{Cli, Command};
use settings::ServiceSettings;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(&cli);

    match cli.command {
        Command::Describe => {
            println!("{}", ServiceSettings::default().describe());
            ExitCode::SUCCESS
        }
        Command::Keys => {
            for key in ServiceSettings::keys() {
                println!("{}", key);
            }
            ExitCode::SUCCESS
        }
        Command::Check => {
            let env = match read_environment(cli.env_file.as_deref()) {
                Ok(env) => env,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::from(2);
                }
            };
            check(&env)
        }
    }
}

fn init_logger(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let result = match &cli.log_file {
        Some(path) => match File::create(path) {
            Ok(file) => WriteLogger::init(level, Config::default(), file),
            Err(e) => {
                eprintln!("Error: cannot create log file {}: {}", path.display(), e);
                return;
            }
        },
        None => TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto),
    };

    if let Err(e) = result {
        eprintln!("Error: failed to initialize logger: {}", e);
    }
}

/// Snapshot of the process environment with the `.env` file layered on top.
fn read_environment(env_file: Option<&Path>) -> Result<Environment, dotenvy::Error> {
    let mut env = Environment::capture();

    if let Some(path) = env_file {
        let mut count = 0;
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            env.set(key, value);
            count += 1;
        }
        log::info!("read {} variables from {}", count, path.display());
    }

    Ok(env)
}

fn check(env: &Environment) -> ExitCode {
    match ServiceSettings::from_source(env) {
        Ok(settings) => {
            println!("Settings OK");
            println!("  service:    {}", settings.name);
            println!("  listen:     {}", settings.listen);
            println!("  workers:    {}", settings.workers);
            println!("  log level:  {}", settings.log_level);
            println!("  data dir:   {}", settings.data_dir.display());
            ExitCode::SUCCESS
        }
        Err(errors) => {
            eprintln!("{} setting(s) failed to load:", errors.len());
            for error in &errors {
                eprintln!("  {}", error);
            }
            ExitCode::FAILURE
        }
    }
}
