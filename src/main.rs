//! Gamezip Dupe Checker - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use gamezip_dupe_checker::{
    cli::{Args, Command},
    commands::{search_digest, search_file, search_launch, search_path, Outcome},
    config::{validate_config, Config, HashType},
    curation::{CurationPaths, LoadedCuration},
    error::{exit_codes, Error, Result},
    host::ConsoleHost,
    output::{print_banner, print_error, print_info, print_success, print_warning},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Api(_)
                | Error::Authentication(_)
                | Error::HashTypeMismatch { .. }
                | Error::Http(_)
                | Error::Json(_) => ExitCode::from(exit_codes::API_ERROR as u8),
                Error::Curation(_) | Error::NotInContent(_) | Error::YamlParse(_) => {
                    ExitCode::from(exit_codes::CURATION_ERROR as u8)
                }
                Error::Io(_) => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let config_path = args.config_path();
    let mut config = if config_path.exists() || args.config.is_some() {
        Config::load(&config_path)?
    } else {
        tracing::debug!(
            "No configuration file at {}, using defaults",
            config_path.display()
        );
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    validate_config(&config)?;

    let host = ConsoleHost::new(
        args.command.selection(),
        config.fpfss.access_token.clone(),
        args.copy_to_log,
    );

    let outcome = match &args.command {
        Command::Launch { launch_command } => {
            let curation = open_curation(&args, &config)?;
            search_launch(&config, &host, &curation, launch_command.as_deref()).await?
        }
        Command::File { .. } => {
            let curation = open_curation(&args, &config)?;
            search_file(&config, &host, &curation).await?
        }
        Command::Path { .. } => {
            let curation = open_curation(&args, &config)?;
            search_path(&config, &host, &curation).await?
        }
        Command::Hash { digest } => {
            let hash_type = args
                .hash_type
                .or_else(|| HashType::from_digest(digest))
                .unwrap_or(config.options.hash_type);
            search_digest(&config, &host, digest, hash_type).await?
        }
    };

    match outcome {
        Outcome::Cancelled => {
            print_warning("Nothing was checked");
            Ok(exit_codes::SUCCESS)
        }
        Outcome::NoToken => Err(Error::MissingConfig(
            "access_token (set fpfss.access_token, --token or FPFSS_TOKEN)".to_string(),
        )),
        Outcome::Reported { duplicates } => {
            print_success(&format!("Lookup complete: {} duplicate(s)", duplicates));
            if duplicates > 0 && args.fail_on_duplicates {
                Ok(exit_codes::DUPLICATES_FOUND)
            } else {
                Ok(exit_codes::SUCCESS)
            }
        }
    }
}

/// Open the curation named on the command line.
fn open_curation(args: &Args, config: &Config) -> Result<LoadedCuration> {
    let folder = args
        .curation
        .as_deref()
        .ok_or_else(|| Error::MissingConfig("--curation <FOLDER>".to_string()))?;

    let paths = CurationPaths::new(&config.flashpoint.path, folder)?;
    let curation = LoadedCuration::load(paths, folder)?;
    print_info(&format!("Curation: {}", curation.display_name()));

    Ok(curation)
}
