use anyhow::{Error, Result};
use clap::{parser::ValueSource, Arg, ArgAction, ArgGroup, ArgMatches, Command};
use log::{debug, error};
use songlib_config::{app_config, render_global_script, Endpoint, DEFAULT_BINDING};
use std::str::FromStr;
use strum::VariantNames;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0:}")]
    InvalidArgsError(String),
}

#[derive(Clone, Copy, Debug, strum::EnumString, PartialEq, Eq, strum::VariantNames)]
#[strum(serialize_all = "lowercase")]
enum Format {
    Js,
    Json,
}

fn main() {
    let cmd = cmd();
    let matches = cmd.get_matches();
    let res = init_logger_from_matches(&matches);
    if let Err(e) = res {
        eprintln!("Error creating logger: {e}");
        std::process::exit(126);
    }

    let status = match validate_args(&matches) {
        Ok(()) => match run(&matches) {
            Ok(output) => {
                print!("{output}");
                0
            }
            Err(e) => {
                print_err(&e);
                1
            }
        },
        Err(e) => {
            print_err(&e);
            127
        }
    };
    std::process::exit(status);
}

const MAX_TERM_WIDTH: usize = 100;

fn cmd() -> Command {
    Command::new("songlib-config")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prints the song library API configuration")
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_parser(clap::builder::PossibleValuesParser::new(Format::VARIANTS))
                .default_value("js")
                .help(concat!(
                    "The output format. `js` prints a script that publishes the config as a",
                    " frozen object on `window`, for pages that load their scripts with plain",
                    " script tags. `json` prints the config as JSON. You cannot pass this with",
                    " `--endpoint` or `--list`.",
                )),
        )
        .arg(Arg::new("binding").long("binding").short('b').help(concat!(
            "The name of the `window` property the `js` output assigns the config to. Defaults",
            " to appConfig. You cannot pass this with `--format json`, `--endpoint`, or `--list`.",
        )))
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .short('e')
                .value_parser(clap::builder::PossibleValuesParser::new(Endpoint::VARIANTS))
                .help("Print the full request URL for one endpoint instead of the whole config."),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .short('l')
                .action(ArgAction::SetTrue)
                .help(concat!(
                    "Print each endpoint's name, HTTP method, and full request URL, one per",
                    " line. You cannot pass `--endpoint` when this is set.",
                )),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable verbose output."),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Enable debugging output."),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppresses most output."),
        )
        .group(ArgGroup::new("log-level").args(["verbose", "debug", "quiet"]))
        .max_term_width(MAX_TERM_WIDTH)
}

pub(crate) fn init_logger_from_matches(matches: &ArgMatches) -> Result<(), log::SetLoggerError> {
    let level = if matches.get_flag("debug") {
        log::LevelFilter::Debug
    } else if matches.get_flag("verbose") {
        log::LevelFilter::Info
    } else if matches.get_flag("quiet") {
        log::LevelFilter::Error
    } else {
        log::LevelFilter::Warn
    };

    songlib_config::init_logger(level)
}

fn validate_args(matches: &ArgMatches) -> Result<()> {
    if matches.contains_id("binding") && output_format(matches)? == Format::Json {
        return Err(CliError::InvalidArgsError(
            "You cannot combine the --binding and --format json options".to_string(),
        )
        .into());
    }

    if matches.contains_id("endpoint") && matches.get_flag("list") {
        return Err(CliError::InvalidArgsError(
            "You cannot combine the --endpoint and --list options".to_string(),
        )
        .into());
    }

    // `--format` has a default, so it only counts when it was given on the command line.
    let single = if matches.contains_id("endpoint") {
        Some("endpoint")
    } else if matches.get_flag("list") {
        Some("list")
    } else {
        None
    };
    if let Some(a) = single {
        if matches.contains_id("binding") {
            return Err(CliError::InvalidArgsError(format!(
                "You cannot combine the --{a} and --binding options"
            ))
            .into());
        }
        if matches.value_source("format") == Some(ValueSource::CommandLine) {
            return Err(CliError::InvalidArgsError(format!(
                "You cannot combine the --{a} and --format options"
            ))
            .into());
        }
    }

    Ok(())
}

fn output_format(matches: &ArgMatches) -> Result<Format> {
    let f = matches
        .get_one::<String>("format")
        .map_or("js", String::as_str);
    Ok(Format::from_str(f)?)
}

fn run(matches: &ArgMatches) -> Result<String> {
    let config = app_config();

    if let Some(name) = matches.get_one::<String>("endpoint") {
        debug!("Printing the URL for the {name} endpoint");
        return Ok(format!("{}\n", config.url_for(name)?));
    }

    if matches.get_flag("list") {
        let mut output = String::new();
        for (endpoint, _) in config.endpoints().iter() {
            output.push_str(&format!(
                "{:<16} {:<5} {}\n",
                endpoint.as_ref(),
                endpoint.method().as_ref(),
                config.endpoint_url(endpoint)?,
            ));
        }
        return Ok(output);
    }

    match output_format(matches)? {
        Format::Js => {
            let binding = matches
                .get_one::<String>("binding")
                .map_or(DEFAULT_BINDING, String::as_str);
            Ok(render_global_script(config, binding)?)
        }
        Format::Json => Ok(format!("{}\n", config.to_json()?)),
    }
}

fn print_err(e: &Error) {
    error!("{e}");
    if let Some(ce) = e.downcast_ref::<CliError>() {
        match ce {
            CliError::InvalidArgsError(_) => {
                println!();
                cmd().print_help().unwrap();
            }
        }
    }
}
