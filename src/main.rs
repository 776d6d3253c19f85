use clap::{error::ErrorKind, CommandFactory, Parser};
use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
};
use workout_tracker::{
    config::{Config, ConfigStore, FileConfigStore, OutputFormat},
    info::Locale,
    package::{sample_packages, Package},
};

/// fitness tracker: distance, speed and calories from sensor packages
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Reads sensor packages for running (RUN), sports walking (WLK) and swimming (SWM) and prints distance, mean speed and calories burned for each. Without --package the built-in sample readings are used."
)]
pub struct Cli {
    /// sensor package as TAG:ARG,ARG,... (e.g. RUN:15000,1,75); repeatable
    #[clap(short = 'p', long = "package")]
    packages: Vec<Package>,

    /// language of the summary labels
    #[clap(short = 'l', long, value_enum)]
    locale: Option<Locale>,

    /// output format
    #[clap(long, value_enum)]
    format: Option<OutputFormat>,

    /// config file to read preferences from
    #[clap(long)]
    config: Option<PathBuf>,

    /// store the effective locale and format in the config file
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }

    /// Stored preferences with command line flags on top
    fn effective_config(&self, stored: Config) -> Config {
        Config {
            locale: self.locale.unwrap_or(stored.locale),
            format: self.format.unwrap_or(stored.format),
        }
    }

    fn packages(&self) -> Vec<Package> {
        if self.packages.is_empty() {
            sample_packages()
        } else {
            self.packages.clone()
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let store = cli.config_store();
    log::debug!("reading preferences from {}", store.path().display());
    let config = cli.effective_config(store.load());

    if cli.save_config {
        store.save(&config)?;
        log::info!("saved preferences to {}", store.path().display());
    }

    let result = run(&cli.packages(), &config, &mut io::stdout().lock());
    if let Err(e) = result {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::InvalidValue, e).exit();
    }

    Ok(())
}

/// Read every package in order and write one summary per line
fn run<W: Write>(
    packages: &[Package],
    config: &Config,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    for package in packages {
        let training = package.read()?;
        let info = training.show_training_info();
        match config.format {
            OutputFormat::Text => writeln!(out, "{}", info.get_message(config.locale))?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&info)?)?,
        }
    }
    Ok(())
}
