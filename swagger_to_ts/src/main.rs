//! Binary to generate TypeScript interfaces from a Swagger document.
//!
//! Usage: `swagger2ts -s swagger.json [-o interfaces]`
//!
//! Writes one `<schema>.interface.ts` file per entry of `definitions`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use swagger_to_ts::{
    Diagnostic, DiagnosticKind, GenerateSettings, Generation, SwaggerGenError, UnitOutcome,
    generate_from_path, write_units,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Generate TypeScript interfaces from the definitions of a Swagger document
#[derive(Parser, Debug)]
#[command(name = "swagger2ts", version, about, long_about = None)]
struct Cli {
    /// Swagger.json path
    #[arg(short = 's', long = "swagger-name", value_name = "PATH")]
    swagger_name: PathBuf,

    /// Output directory (created if absent)
    #[arg(short, long, default_value = "interfaces")]
    out_dir: PathBuf,

    /// Additional schema keys to skip; `ApiResponse` is always skipped
    #[arg(long = "skip", value_name = "KEY")]
    skip: Vec<String>,

    /// Emit one import per referencing property instead of one per schema
    #[arg(long)]
    keep_duplicate_imports: bool,

    /// Render everything but write nothing
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn settings(&self) -> GenerateSettings {
        let mut settings = GenerateSettings {
            output_dir: self.out_dir.clone(),
            dedupe_imports: !self.keep_duplicate_imports,
            ..GenerateSettings::default()
        };
        settings.reserved_keys.extend(self.skip.iter().cloned());
        settings
    }
}

fn init_logging() {
    let filter: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_banner() {
    println!();
    println!("  {}", " Generating interfaces ".white().bold().on_bright_black());
    println!();
}

fn run(cli: &Cli) -> Result<usize, SwaggerGenError> {
    let settings: GenerateSettings = cli.settings();
    let generation: Generation = generate_from_path(&cli.swagger_name, &settings)?;
    for diagnostic in &generation.diagnostics {
        log_diagnostic(diagnostic);
    }

    if cli.dry_run {
        for unit in &generation.units {
            println!("Generating: {} {}", unit.schema_key, "(dry run)".dimmed());
        }
        return Ok(0);
    }

    let outcomes: Vec<UnitOutcome> = write_units(&generation.units, &settings.output_dir)?;
    let mut failures: usize = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) => println!(
                "Generating: {} {} {}",
                outcome.schema_key,
                "→".green(),
                outcome.path.display()
            ),
            Err(error) => {
                failures += 1;
                eprintln!("{} {}: {error}", "✗".red(), outcome.schema_key);
            }
        }
    }

    let written: usize = outcomes.len() - failures;
    if failures == 0 {
        println!("{}", format!("{written} interfaces generated").green().bold());
    } else {
        println!(
            "{}",
            format!("{written} interfaces generated, {failures} failed").yellow().bold()
        );
    }
    Ok(failures)
}

fn log_diagnostic(diagnostic: &Diagnostic) {
    match diagnostic.kind {
        DiagnosticKind::ReservedKeySkipped => info!("{diagnostic}"),
        _ => warn!("{diagnostic}"),
    }
}

fn main() -> ExitCode {
    let cli: Cli = Cli::parse();
    init_logging();
    print_banner();

    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(2),
        Err(error) => {
            eprintln!("{} {error}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
