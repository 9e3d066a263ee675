use std::io::Write;

use clap::{Arg, ArgAction, Command};
use log::LevelFilter;
use weakcrypto::demos::{demonstrations, find_demonstration, Demonstration};
use weakcrypto::{Config, Result};

fn cli() -> Command {
    Command::new("weakcrypto")
        .version(clap::crate_version!())
        .about("Demonstrations of Fermat factoring and CRC32 packet forgery")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("JSON file overriding the built-in attack parameters")
                .action(ArgAction::Set)
                .required(false),
        )
        .subcommand(Command::new("list").about("List the available demonstrations"))
        .subcommand(
            Command::new("run")
                .about("Run one or all demonstrations")
                .arg(
                    Arg::new("name")
                        .value_name("NAME")
                        .required_unless_present("all"),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .short('a')
                        .action(ArgAction::SetTrue)
                        .conflicts_with("name"),
                ),
        )
        .subcommand_required(true)
}

fn run() -> Result<()> {
    let matches = cli().get_matches();
    let config = match matches.get_one::<String>("config") {
        Some(path) => {
            log::info!("loading parameters from `{path}`");
            Config::from_path(path)?
        }
        None => Config::default(),
    };

    let mut stdout = std::io::stdout().lock();
    match matches.subcommand() {
        Some(("list", _)) => {
            for demo in demonstrations(&config) {
                writeln!(stdout, "{:<12} {}", demo.name(), demo.description())?;
            }
        }
        Some(("run", m)) => {
            let selected: Vec<Box<dyn Demonstration>> = if m.get_flag("all") {
                demonstrations(&config)
            } else {
                let name = m.get_one::<String>("name").map(String::as_str).unwrap_or_default();
                vec![find_demonstration(&config, name)?]
            };
            for demo in selected {
                log::debug!("running `{}`", demo.name());
                demo.run(&mut stdout)?;
            }
        }
        _ => unreachable!("subcommand is required"),
    }
    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
