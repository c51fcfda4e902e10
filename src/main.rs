use anyhow::{bail, Context, Result};
use clap::Parser;
use console::Term;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wordforge::cli::Cli;
use wordforge::history::{
    append_history, generate_history_output, history_to_json, load_history, HistoryEntry,
};
use wordforge::output::output_wordlist;
use wordforge::profile::{prompt_generator_config, prompt_profile, split_csv};
use wordforge::report::{banner, output_report, GenerationReport};
use wordforge::VariationEngine;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // log records from the library reach this subscriber through tracing-log
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn show_history(cli: &Cli) -> Result<()> {
    let entries = match cli.history {
        Some(ref path) => load_history(path)?,
        None => Vec::new(),
    };
    if cli.json {
        println!("{}", history_to_json(&entries));
    } else {
        print!("{}", generate_history_output(&entries));
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    if !cli.quiet {
        eprint!("{}", banner());
    }

    if cli.show_history {
        return show_history(&cli);
    }

    let mut profile = cli.load_profile()?;
    let mut config = cli.generator_config(&profile);

    if cli.interactive {
        let term = Term::stderr();
        let mut answers = prompt_profile(&term).context("Failed to read target details")?;
        if let Some(ref keywords) = cli.keywords {
            answers.add_keywords(split_csv(keywords));
        }
        profile = answers;
        config = prompt_generator_config(&term, config).context("Failed to read configuration")?;
    }

    let mut seeds = profile.seed_tokens();
    seeds.extend(cli.extra_seeds());

    if seeds.is_empty() {
        bail!("no input provided: supply --profile, --word, --keywords or --interactive");
    }

    let engine = VariationEngine::new(config);
    let wordlist = engine.generate(&seeds);

    let written = output_wordlist(&cli.output, &wordlist)?;
    let saved_to = std::fs::canonicalize(&cli.output).unwrap_or_else(|_| cli.output.clone());
    tracing::info!(path = %saved_to.display(), count = written, "wordlist written");

    let mut report = GenerationReport::new(
        profile.target_name(),
        &seeds,
        engine.config(),
        &wordlist,
        cli.preview,
    );
    report.set_output(saved_to.display().to_string());

    if let Some(ref path) = cli.history {
        append_history(path, &HistoryEntry::from_report(&report))?;
    }

    if cli.json {
        println!("{}", report.to_json());
    } else if !cli.quiet {
        output_report(&report);
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}
