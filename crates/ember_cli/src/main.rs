//! ember: command-line driver for the Ember front end.
//!
//! Usage:
//!   ember tokens [FILE...] [-e SOURCE]
//!   ember parse  [FILE...] [-e SOURCE] [--output ast|tokens|json|none]
//!
//! Exit codes: 0 on success, 1 when a file or configuration cannot be read,
//! 2 when any input has syntax errors.

mod fancy;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::{ArgAction, Args, Parser as ClapParser, Subcommand};
use ember_ast::node::Module;
use ember_core::{EmberError, Result};
use ember_diagnostics::{DiagnosticCategory, Issue, PrettyReporter, Reporter};
use ember_options::{DiagnosticFormat, DiagnosticsOptions, EmberConfig, OutputKind};
use ember_parser::{parse_source, ParseFailure};
use ember_printer::AstPrinter;
use log::debug;
use rayon::prelude::*;
use serde::Serialize;

#[derive(ClapParser, Debug)]
#[command(name = "ember", about = "ember - scanner and parser for the Ember language", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to ember.json (defaults to ./ember.json when present).
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Diagnostic format: pretty, json or fancy.
    #[arg(long, global = true)]
    format: Option<DiagnosticFormat>,

    /// Force colored diagnostics.
    #[arg(long, global = true, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored diagnostics.
    #[arg(long = "no-color", global = true)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the token stream of each input.
    Tokens(InputArgs),

    /// Parse each input and print its syntax tree.
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// What to print for inputs that parse cleanly.
        #[arg(short = 'o', long)]
        output: Option<OutputKind>,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Ember source files.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Use SOURCE as the input instead of reading files.
    #[arg(short = 'e', long = "eval", value_name = "SOURCE", conflicts_with = "files")]
    eval: Option<String>,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// One input, read into memory.
struct SourceInput {
    name: String,
    text: String,
}

/// The outcome of parsing one input.
struct FileReport {
    input: SourceInput,
    result: std::result::Result<Module, ParseFailure>,
    issues: Vec<Issue>,
}

/// JSON shape for `--format json`.
#[derive(Serialize)]
struct FileIssues<'a> {
    file: &'a str,
    issues: &'a [Issue],
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            print_error(&err.to_string());
            1
        }
    };
    process::exit(exit_code);
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let file_config = ember_options::load_config(cli.config.as_deref(), &cwd)?;

    let (input, output) = match &cli.command {
        Command::Tokens(input) => (input, Some(OutputKind::Tokens)),
        Command::Parse { input, output } => (input, *output),
    };

    // Command-line flags override ember.json.
    let color = if cli.color {
        Some(true)
    } else if cli.no_color {
        Some(false)
    } else {
        None
    };
    let overrides = EmberConfig {
        diagnostics: DiagnosticsOptions {
            format: cli.format,
            color,
        },
        output,
    };
    let config = file_config.merged_with(&overrides);
    debug!("effective configuration: {:?}", config);

    let inputs = collect_inputs(input)?;
    if inputs.is_empty() {
        print_error("No input files given.");
        return Ok(1);
    }

    if let Command::Tokens(_) = cli.command {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for source in &inputs {
            if inputs.len() > 1 {
                writeln!(out, "==> {} <==", source.name)?;
            }
            write!(out, "{}", ember_scanner::dump_tokens(&source.text))?;
        }
        return Ok(0);
    }

    run_parse(inputs, &config)
}

/// Read every input. Files are read in parallel; order is preserved.
fn collect_inputs(args: &InputArgs) -> Result<Vec<SourceInput>> {
    if let Some(text) = &args.eval {
        return Ok(vec![SourceInput {
            name: "<eval>".to_string(),
            text: text.clone(),
        }]);
    }
    args.files.par_iter().map(|path| read_input(path)).collect()
}

fn read_input(path: &Path) -> Result<SourceInput> {
    let text = std::fs::read_to_string(path).map_err(|err| EmberError::read_source(path, err))?;
    Ok(SourceInput {
        name: path.display().to_string(),
        text,
    })
}

fn run_parse(inputs: Vec<SourceInput>, config: &EmberConfig) -> Result<i32> {
    let start = Instant::now();

    // Each input gets its own scanner, parser and reporter.
    let reports: Vec<FileReport> = inputs
        .into_par_iter()
        .map(|input| {
            let (result, reporter) = parse_source(&input.text);
            FileReport {
                input,
                result,
                issues: reporter.into_issues(),
            }
        })
        .collect();

    let use_color = config.color(atty_is_terminal());
    let mut error_count = 0;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for report in &reports {
        print_issues(report, config.format(), use_color)?;

        match &report.result {
            Ok(module) => print_module(&mut out, report, module, config.output())?,
            Err(failure) => error_count += failure.error_count,
        }
    }
    out.flush()?;

    debug!(
        "parsed {} input(s) in {:.2}ms",
        reports.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    if error_count > 0 {
        if config.format() != DiagnosticFormat::Json {
            let plural = if error_count == 1 { "" } else { "s" };
            if use_color {
                eprintln!("\n{}Found {} error{}.{}", RED, error_count, plural, RESET);
            } else {
                eprintln!("\nFound {} error{}.", error_count, plural);
            }
        }
        return Ok(2);
    }

    Ok(0)
}

fn print_module(out: &mut impl Write, report: &FileReport, module: &Module, output: OutputKind) -> Result<()> {
    match output {
        OutputKind::Ast => write!(out, "{}", AstPrinter::new().print_module(module))?,
        OutputKind::Tokens => write!(out, "{}", ember_scanner::dump_tokens(&report.input.text))?,
        OutputKind::Json => {
            let json = serde_json::to_string_pretty(module)
                .map_err(|err| EmberError::Serialize(err.to_string()))?;
            writeln!(out, "{}", json)?;
        }
        OutputKind::None => {}
    }
    Ok(())
}

fn print_issues(report: &FileReport, format: DiagnosticFormat, use_color: bool) -> Result<()> {
    if report.issues.is_empty() && format != DiagnosticFormat::Json {
        return Ok(());
    }

    match format {
        DiagnosticFormat::Pretty => {
            if use_color {
                eprintln!("{}{}{}{}", BOLD, CYAN, report.input.name, RESET);
            } else {
                eprintln!("{}", report.input.name);
            }
            let mut reporter = PrettyReporter::stderr();
            for issue in &report.issues {
                match issue.severity {
                    DiagnosticCategory::Error => reporter.error(&issue.message, &issue.token),
                    DiagnosticCategory::Warning => reporter.warn(&issue.message, &issue.token),
                }
            }
        }
        DiagnosticFormat::Json => {
            let json = serde_json::to_string(&FileIssues {
                file: &report.input.name,
                issues: &report.issues,
            })
            .map_err(|err| EmberError::Serialize(err.to_string()))?;
            eprintln!("{}", json);
        }
        DiagnosticFormat::Fancy => {
            let rendered =
                fancy::render_issues(&report.input.name, &report.input.text, &report.issues, use_color);
            eprint!("{}", rendered);
        }
    }
    Ok(())
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    // On Unix, check whether stderr is a terminal.
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}
