mod cli;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use passgen::PassgenError;
use passgen::config::Settings;
use passgen::generators::create_generator;
use passgen::randomness::source_for;
use passgen::vocabulary::init_default_corpus;

use crate::cli::{Cli, Mode};

fn run(cli: Cli) -> Result<(), PassgenError> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(wordlist) = cli.wordlist {
        settings.wordlist = wordlist;
    }
    let count = cli.count.unwrap_or(settings.count);
    let kind = cli.mode.map(Mode::into_kind).unwrap_or(settings.generator);

    let corpus = init_default_corpus(&settings.wordlist);
    let generator = create_generator(&kind, corpus, source_for(cli.seed))?;

    for _ in 0..count {
        println!("{}", generator.generate()?);
    }
    info!("Generated {} password(s)", count);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
