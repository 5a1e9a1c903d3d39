#![warn(rust_2018_idioms)]

mod input;

use std::io::{self, Read};
use std::process;

use anyhow::Context;
use clap::{App, Arg};
use dotenv::dotenv;
use log::LevelFilter;
use numwords_core::{Config, Converter, ScaleTable};

pub fn main() {
    if let Err(err) = run() {
        log::error!("{:#}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let matches = App::new("numwords")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Writes integers out in English words, as on a check")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .env("NUMWORDS_CONFIG")
                .help("Sets the JSON config file to read")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Enables debug logging"),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .help("Fails instead of printing \"unknown\" for numbers that are too large"),
        )
        .arg(
            Arg::with_name("INTEGER")
                .help("Sets the integer to convert, read from stdin if omitted")
                .index(1),
        )
        .get_matches();

    // the logger lets everything through, the max level is adjusted once the config is known
    env_logger::Builder::new()
        .filter_level(LevelFilter::Debug)
        .try_init()?;
    log::set_max_level(if matches.is_present("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    let mut config = match matches.value_of("config") {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => Config::default(),
    };
    config = config.with_flags(matches.is_present("verbose"), matches.is_present("strict"));
    if config.debug {
        log::set_max_level(LevelFilter::Debug);
    }
    log::debug!("{:?}", config);

    let text = match matches.value_of("INTEGER") {
        Some(text) => text.to_string(),
        None => {
            log::debug!("Reading number from stdin");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read number from stdin")?;
            text
        }
    };

    let converter = Converter::new(ScaleTable::english());
    let words = input::words_for(&converter, &text, config.strict)?;
    println!("{}", words);

    Ok(())
}
