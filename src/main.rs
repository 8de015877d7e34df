//! CLI entry point for dirtree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirtree::{BuilderConfig, Error, OutputConfig, TreeBuilder, TreeFormatter, exit_codes};
use tracing::debug;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Draw a directory as an ASCII tree")]
#[command(version)]
struct Args {
    /// Directory to display
    path: PathBuf,

    /// Include files, annotated with their size in bytes
    #[arg(short = 'f', long = "files")]
    files: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn parse_args() -> dirtree::Result<Args> {
    Args::try_parse().map_err(|e| {
        // --help and --version are not failures
        if !e.use_stderr() {
            let _ = e.print();
            process::exit(exit_codes::OK);
        }
        Error::Usage(usage_message(&e.to_string()))
    })
}

/// clap's rendered error without its own `error: ` lead-in, since every
/// failure is already reported as `dirtree: <message>`.
fn usage_message(rendered: &str) -> String {
    let rendered = rendered.trim_end();
    rendered
        .strip_prefix("error: ")
        .unwrap_or(rendered)
        .to_string()
}

fn run(args: &Args) -> dirtree::Result<()> {
    let builder = TreeBuilder::new(BuilderConfig {
        include_files: args.files,
    });
    let entries = builder.build(&args.path)?;
    debug!(top_level = entries.len(), "tree built");

    let formatter = TreeFormatter::new(OutputConfig {
        use_color: should_use_color(args.color),
    });
    formatter.print(&entries).map_err(Error::Output)
}

fn main() {
    dirtree::logging::init();

    let result = parse_args().and_then(|args| run(&args));

    if let Err(e) = result {
        eprintln!("dirtree: {}", e);
        process::exit(exit_codes::for_error(&e));
    }
}
