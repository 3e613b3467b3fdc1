//! Demo binary: declares a full-featured flag set with flagline and
//! evaluates its own argument vector with it, printing the resulting
//! `Evaluation` as JSON or YAML. Serves as executable documentation for
//! the library crates.

use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

use flagline_core::{FlagSpec, Registry};
use flagline_eval::{Evaluation, Evaluator};

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "\
flagline - declarative argument parsing demo

Usage: flagline [OPTIONS] [INPUTS]...

Options:
  -h, --help             Show this help and exit
      --version          Show version and exit
      --format <FMT>     Output format: json or yaml [default: json]
  -v, --verbose          Verbose marker toggle
      --color            Enable color marker (default)
      --no-color         Disable color marker
  -D <KEY> <VALUE>       Record a key/value pair (repeatable)
  -o, --output <FILE>    Output file (last occurrence wins)

Set RUST_LOG=debug to watch the engine walk the token stream.";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Declares the demo's own command line.
fn build_registry() -> Registry {
    let mut registry = Registry::new();
    let register = [
        FlagSpec::new("help")
            .with_tag("h", "-")
            .with_tag("help", "--")
            .abort(),
        FlagSpec::new("version").with_tag("version", "--").abort(),
        FlagSpec::new("format")
            .with_tag("format", "--")
            .consumes(1)
            .allow(["json", "yaml"])
            .default_values(["json"]),
        FlagSpec::new("verbose")
            .with_tag("v", "-")
            .with_tag("verbose", "--"),
        FlagSpec::new("color")
            .with_tag("color", "--")
            .with_toggle("no-color", "--", false)
            .default_state(true),
        FlagSpec::new("define").with_tag("D", "-").consumes(2).multiple(),
        FlagSpec::new("output")
            .with_tag("o", "-")
            .with_tag("output", "--")
            .consumes(1)
            .overwrite(),
        FlagSpec::new("inputs").multiple(),
    ];
    for spec in register {
        // The declarations above are statically valid; register only
        // fails on contradictory specs.
        registry
            .register(spec)
            .expect("demo flag declarations are valid");
    }
    registry
}

fn render(eval: &Evaluation) -> Result<String, String> {
    match eval.last_value("format").unwrap_or("json") {
        "yaml" => serde_yaml::to_string(eval).map_err(|e| e.to_string()),
        _ => serde_json::to_string_pretty(eval).map_err(|e| e.to_string()),
    }
}

fn main() -> ExitCode {
    init_tracing();

    let registry = build_registry();
    let evaluator = Evaluator::new(&registry);
    let tokens: Vec<String> = std::env::args().skip(1).collect();
    debug!(count = tokens.len(), "evaluating argument vector");

    let eval = match evaluator.evaluate(&tokens) {
        Ok(eval) => eval,
        Err(err) => {
            eprintln!("flagline: {err}");
            eprintln!("Try 'flagline --help' for usage.");
            return ExitCode::from(2);
        }
    };

    match eval.aborted_by() {
        Some("help") => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Some("version") => {
            println!("flagline {PACKAGE_VERSION}");
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    match render(&eval) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("flagline: failed to render result: {err}");
            ExitCode::FAILURE
        }
    }
}
