use std::io::{self, BufRead, BufWriter, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vitone::{mask, normalize_vietnamese_accent, slug};

#[derive(Parser)]
#[command(name = "vitone", about = "Put Vietnamese tone marks on the right vowel")]
struct Cli {
    /// Log resolver decisions to stderr (filter with RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fix tone placement of the given text, or of every stdin line
    Accent {
        text: Vec<String>,
    },

    /// Print an ASCII slug of the given text, or of every stdin line
    Slug {
        text: Vec<String>,
    },

    /// Replace a range of characters with '*'
    Mask {
        text: String,
        /// First masked character; negative counts from the end
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        start: isize,
        /// One past the last masked character; zero or negative counts from the end
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        end: isize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        init_tracing();
    }

    match cli.command {
        Command::Accent { text } => run_lines(&text, normalize_vietnamese_accent),
        Command::Slug { text } => run_lines(&text, slug::normalize),
        Command::Mask { text, start, end } => {
            println!("{}", mask::mask(&text, start, end));
            Ok(())
        }
    }
}

/// Applies `f` to the joined arguments, or line by line to stdin when there
/// are none.
fn run_lines(args: &[String], f: fn(&str) -> String) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.is_empty() {
        for line in io::stdin().lock().lines() {
            writeln!(out, "{}", f(&line?))?;
        }
    } else {
        writeln!(out, "{}", f(&args.join(" ")))?;
    }

    out.flush()?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vitone=trace")),
        )
        .init();
}
