use std::io;
use std::path;
use std::sync::Arc;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::views;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::services::DelayForm;
use crate::domain::services::SessionGuard;
use crate::domain::services::SessionStore;
use crate::infrastructure::api::WindbreakerBackend;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for Windbreaker")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running Windbreaker with environment variable RUST_LOG=windbreaker")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn subcommand_login() -> Command {
    return Command::new("login")
        .about("Sign in to the prediction service and store the session.")
        .arg(
            clap::Arg::new("email")
                .short('e')
                .long("email")
                .help("Email address. Prompted for interactively when omitted.")
                .num_args(1),
        );
}

fn subcommand_delay() -> Command {
    return Command::new("delay")
        .about("Predict arrival delay risk for a flight.")
        .arg(
            Arg::new("airline")
                .short('a')
                .long("airline")
                .help("Carrier code, e.g. AA, DL, WN.")
                .num_args(1),
        )
        .arg(
            Arg::new("origin")
                .short('o')
                .long("origin")
                .help("Origin city.")
                .num_args(1),
        )
        .arg(
            Arg::new("destination")
                .short('d')
                .long("destination")
                .help("Destination city.")
                .num_args(1),
        )
        .arg(
            Arg::new("date")
                .long("date")
                .help("Departure date, e.g. 2026-05-20.")
                .num_args(1),
        )
        .arg(
            Arg::new("time")
                .long("time")
                .help("Scheduled departure time, e.g. 14:00.")
                .num_args(1),
        );
}

fn subcommand_price() -> Command {
    return Command::new("price")
        .about("Estimate a fair ticket fare for a route.")
        .arg(
            Arg::new("airline")
                .short('a')
                .long("airline")
                .help("Carrier name from the options list. Defaults to the first available airline.")
                .num_args(1),
        )
        .arg(
            Arg::new("origin")
                .short('o')
                .long("origin")
                .help("Origin city.")
                .num_args(1),
        )
        .arg(
            Arg::new("destination")
                .short('d')
                .long("destination")
                .help("Destination city from the options list.")
                .num_args(1),
        )
        .arg(
            Arg::new("travel-time")
                .short('t')
                .long("travel-time")
                .help("Travel time as free text, e.g. \"2h 30m\".")
                .num_args(1),
        )
        .arg(
            Arg::new("duration-mins")
                .long("duration-mins")
                .help("Travel time in minutes. Ignored when --travel-time is set.")
                .num_args(1),
        );
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION")
    );

    return Command::new("windbreaker")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .subcommand(subcommand_login())
        .subcommand(Command::new("logout").about("Sign out and clear the stored session."))
        .subcommand(Command::new("whoami").about("Show the signed in operator profile."))
        .subcommand(Command::new("status").about("Check that the prediction service is reachable."))
        .subcommand(Command::new("options").about("List the selectable airlines and cities."))
        .subcommand(subcommand_delay())
        .subcommand(subcommand_price())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("WINDBREAKER_CONFIG_FILE")
                .num_args(1)
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ApiURL.to_string())
                .long(ConfigKey::ApiURL.to_string())
                .env("WINDBREAKER_API_URL")
                .num_args(1)
                .help(format!(
                    "The Windbreaker prediction service URL. [default: {}]",
                    Config::default(ConfigKey::ApiURL)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::SessionFile.to_string())
                .long(ConfigKey::SessionFile.to_string())
                .env("WINDBREAKER_SESSION_FILE")
                .num_args(1)
                .help(format!(
                    "Path to the stored session file. [default: {}]",
                    Config::default(ConfigKey::SessionFile)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::AutoSelectFirstAirline.to_string())
                .long(ConfigKey::AutoSelectFirstAirline.to_string())
                .env("WINDBREAKER_AUTO_SELECT_FIRST_AIRLINE")
                .num_args(1)
                .help(format!(
                    "Pre-select the first airline from the options endpoint when the price form has none. [default: {}]",
                    Config::default(ConfigKey::AutoSelectFirstAirline)
                ))
                .value_parser(PossibleValuesParser::new(["true", "false"]))
                .global(true),
        );
}

fn text_arg(matches: &ArgMatches, name: &str) -> String {
    return matches.get_one::<String>(name).cloned().unwrap_or_default();
}

async fn dispatch(name: &str, matches: &ArgMatches) -> Result<()> {
    let store = Arc::new(SessionStore::default());
    store.load().await?;

    let guard = SessionGuard::new(store.clone());
    let backend = WindbreakerBackend::from_config(store.clone());

    match name {
        "login" => {
            let email = matches.get_one::<String>("email").cloned();
            return views::login_view(&store, &backend, email).await;
        }
        "logout" => {
            return views::logout_view(&store).await;
        }
        "whoami" => {
            return views::whoami_view(&guard, &backend, &store).await;
        }
        "status" => {
            return views::status_view(&guard, &backend).await;
        }
        "options" => {
            return views::options_view(&guard, &backend).await;
        }
        "delay" => {
            let form = DelayForm::default()
                .with_airline(&text_arg(matches, "airline"))
                .with_origin(&text_arg(matches, "origin"))
                .with_destination(&text_arg(matches, "destination"))
                .with_date(&text_arg(matches, "date"))
                .with_time(&text_arg(matches, "time"));

            return views::delay_view(&guard, &backend, form).await;
        }
        "price" => {
            let args = views::PriceArgs {
                airline: matches.get_one::<String>("airline").cloned(),
                origin: matches.get_one::<String>("origin").cloned(),
                destination: matches.get_one::<String>("destination").cloned(),
                travel_time: matches.get_one::<String>("travel-time").cloned(),
                duration_mins: matches.get_one::<String>("duration-mins").cloned(),
            };

            return views::price_view(&guard, &backend, args).await;
        }
        _ => {
            build().print_long_help()?;
            return Ok(());
        }
    }
}

pub async fn parse() -> Result<()> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(());
        }
        Some(("config", subcmd_matches)) => {
            match subcmd_matches.subcommand() {
                Some(("create", _)) => {
                    create_config_file().await?;
                }
                Some(("default", _)) => {
                    println!("{}", Config::serialize_default(build()));
                }
                Some(("path", _)) => {
                    println!("{}", Config::default(ConfigKey::ConfigFile));
                }
                _ => {
                    subcommand_config().print_long_help()?;
                }
            }
            return Ok(());
        }
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = dirs::cache_dir().unwrap().join("windbreaker/debug.log");
                    println!("{}", log_path.to_str().unwrap());
                }
                Some(("enum-config", _)) => {
                    println!("{}", ConfigKey::VARIANTS.join("\n"));
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }
            return Ok(());
        }
        Some((name, subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            return dispatch(name, subcmd_matches).await;
        }
        None => {
            build().print_long_help()?;
            return Ok(());
        }
    }
}
