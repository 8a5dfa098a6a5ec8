mod cli_messages;
mod config;
mod consts;
mod directory;
mod environment;
mod error_classifier;
mod events;
mod loader;
mod logging;
mod profile;
mod session;
mod store;
mod ui;

use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use reqwest::Url;
use std::error::Error;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a random employee profile
    Start {
        /// Print profiles to stdout instead of opening the terminal UI
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Number of profiles to load in headless mode
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// Directory endpoint returning a JSON array of users
        #[arg(long, value_name = "URL")]
        directory_url: Option<String>,

        /// Give up on the directory after this many seconds
        #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
        timeout_secs: Option<u64>,

        /// Seed the random selection for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Enable background colors in the terminal UI
        #[arg(long, default_value_t = false)]
        with_background: bool,

        /// Skip probing avatar images in headless mode
        #[arg(long, default_value_t = false)]
        skip_image_check: bool,
    },
    /// Save a custom directory endpoint to the config file
    SetDirectory {
        /// Absolute http(s) URL of the directory
        #[arg(long, value_name = "URL")]
        url: String,
    },
    /// Delete the config file and return to the public directory
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            headless,
            count,
            directory_url,
            timeout_secs,
            seed,
            with_background,
            skip_image_check,
        } => {
            let config = match Config::load_if_present(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    print_cmd_warn!(
                        "Ignoring unreadable config file",
                        "{}: {}",
                        config_path.display(),
                        e
                    );
                    None
                }
            };
            let environment = Environment::resolve(directory_url, config.as_ref());
            let request_timeout = match timeout_secs {
                Some(secs) => Duration::from_secs(secs),
                None => config.unwrap_or_default().request_timeout(),
            };

            let session = setup_session(environment, request_timeout, seed)?;
            if headless {
                run_headless_mode(session, count, !skip_image_check).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::SetDirectory { url } => {
            if let Err(e) = validate_directory_url(&url) {
                print_cmd_error!("Invalid directory URL", e.as_str());
                return Err(e.into());
            }
            let config = match Config::load_if_present(&config_path) {
                Ok(Some(mut config)) => {
                    config.directory_url = Some(url.clone());
                    config
                }
                Ok(None) => Config::new(url.clone()),
                Err(e) => {
                    print_cmd_warn!("Replacing unreadable config file", "{}", e);
                    Config::new(url.clone())
                }
            };
            config.save(&config_path)?;
            print_cmd_success!("Directory saved", "{}", url);
            Ok(())
        }
        Command::Reset => {
            print_cmd_info!("Resetting configuration...", "");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Accept only absolute http(s) URLs.
fn validate_directory_url(url: &str) -> Result<(), String> {
    let parsed = Url::parse(url).map_err(|e| format!("{}: {}", url, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!("unsupported scheme '{}'", scheme)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_directory_url() {
        assert!(validate_directory_url("https://example.com/users").is_ok());
        assert!(validate_directory_url("http://127.0.0.1:8080/users").is_ok());
        assert!(validate_directory_url("ftp://example.com/users").is_err());
        assert!(validate_directory_url("not a url").is_err());
    }

    #[test]
    fn test_args_parse_headless_start() {
        let args = Args::try_parse_from([
            "employee-profile",
            "start",
            "--headless",
            "--count",
            "3",
            "--seed",
            "7",
        ])
        .unwrap();
        match args.command {
            Command::Start {
                headless,
                count,
                seed,
                directory_url,
                ..
            } => {
                assert!(headless);
                assert_eq!(count, 3);
                assert_eq!(seed, Some(7));
                assert_eq!(directory_url, None);
            }
            _ => panic!("expected start"),
        }
    }

    #[test]
    fn test_args_reject_zero_count() {
        assert!(Args::try_parse_from(["employee-profile", "start", "--count", "0"]).is_err());
    }
}
