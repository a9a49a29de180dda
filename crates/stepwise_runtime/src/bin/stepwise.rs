//! Stepwise CLI entry point.

use std::env;
use std::io;
use std::process::ExitCode;

use stepwise_foundation::{Error, Result};
use stepwise_runtime::{CliConfig, Repl, Session, print_error, read_source};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<ExitCode> {
    let config = CliConfig::parse(args)?;

    if config.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if config.show_version {
        println!("stepwise {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    init_tracing(config.log_filter.as_deref())?;

    let options = config.render_options();
    let mut session = Session::with_options(options);

    for file in &config.files {
        let source = read_source(file)?;
        tracing::info!(path = %file.display(), bytes = source.len(), "loaded document");
        let added = session.submit(&source);
        if !config.json && !added.is_empty() {
            println!("{}", options.render_all(added));
        }
    }

    if config.json {
        println!("{}", session.report().to_json()?);
    }

    if config.is_batch() {
        return Ok(if session.program().has_errors() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    let mut repl = Repl::new()?.with_session(session);
    if !config.files.is_empty() {
        repl = repl.without_banner();
    }
    repl.run()?;
    Ok(ExitCode::SUCCESS)
}

/// Installs the stderr subscriber. `--log` wins over `RUST_LOG`.
fn init_tracing(filter: Option<&str>) -> Result<()> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| Error::invalid_argument(format!("invalid --log filter: {e}")))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| Error::invalid_argument(format!("cannot install logger: {e}")))
}

fn print_help() {
    println!(
        "\x1b[1mStepwise\x1b[0m - Line-oriented equation parser

\x1b[1mUSAGE:\x1b[0m
    stepwise [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Documents to parse before the REPL starts (- reads stdin)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information
    -b, --batch      Parse the files and exit (status 1 if any line failed)
        --json       Print a per-line JSON report instead (implies --batch)
        --debug      Render statements in tagged debug form
        --trace      Print the parser trace under each line error
        --log <F>    Log filter, e.g. stepwise_language=trace (default: RUST_LOG or warn)

\x1b[1mREPL COMMANDS:\x1b[0m
    :help            Show the line syntax and commands
    :program         Re-render the whole document
    :json            Print the document report

\x1b[1mEXAMPLES:\x1b[0m
    stepwise                         Start an interactive session
    stepwise steps.eq                Parse a document, then continue interactively
    stepwise --batch --trace steps.eq
    echo '2x + 3 = 11' | stepwise --json -"
    );
}
