use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use sharedsecret::cli::{self, Cli, Mode, SharesSource};
use sharedsecret::commands;
use sharedsecret::domain::{GenerationRequest, Secret};
use sharedsecret::error::Error;
use sharedsecret::generator::ShareGenerator;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .try_init();
}

/// Read an existing secret securely from stdin (hidden input when TTY available)
fn read_existing_secret() -> Result<Zeroizing<String>> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter secret (base 62):");
        let secret =
            rpassword::read_password().context("Failed to read secret from stdin")?;
        Ok(Zeroizing::new(secret))
    } else {
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        let mut secret = Zeroizing::new(String::new());
        handle
            .read_line(&mut secret)
            .context("Failed to read secret from stdin")?;
        Ok(secret)
    }
}

/// Read shares from the terminal with hidden input, one per line, until an
/// empty line
fn read_shares_interactive() -> Result<Vec<Zeroizing<String>>> {
    eprintln!("Enter shares (one per line, empty line to finish):");

    let mut lines = Vec::new();
    loop {
        let line = Zeroizing::new(
            rpassword::read_password().context("Failed to read share from stdin")?,
        );
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.mode {
        Mode::Generate => {
            let request = GenerationRequest::from_params(cli.shares, cli.threshold)?;
            let existing = if cli.existing {
                Some(read_existing_secret()?.parse::<Secret>()?)
            } else {
                None
            };
            commands::generate_with(
                &mut ShareGenerator::from_os_rng(),
                &request,
                existing,
                &mut out,
            )?;
        }
        Mode::Recover => match &cli.secrets {
            SharesSource::Stdin if atty::is(atty::Stream::Stdin) => {
                let lines = read_shares_interactive()?;
                commands::recover_lines(
                    lines.iter().map(|line| line.as_str()),
                    io::stderr(),
                    &mut out,
                )?;
            }
            SharesSource::Stdin => {
                commands::recover(io::stdin().lock(), io::stderr(), &mut out)?;
            }
            SharesSource::File(path) => {
                let file = File::open(path).map_err(|source| Error::Open {
                    path: path.clone(),
                    source,
                })?;
                commands::recover(BufReader::new(file), io::stderr(), &mut out)?;
            }
        },
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            eprint!("{}", cli::error_report(&err));
            return ExitCode::FAILURE;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
    };

    init_tracing();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if err.downcast_ref::<Error>().is_some_and(Error::is_usage) {
                eprintln!();
                eprint!("{}", cli::usage());
            }
            ExitCode::FAILURE
        }
    }
}
