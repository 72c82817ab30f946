//! hfc CLI - keyed Huffman file compressor
//!
//! Compresses single files into self-describing Huffman containers whose
//! payload is obfuscated with an integer key.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use commands::{WriteOptions, cmd_compress, cmd_decompress, cmd_info, cmd_test};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "hfc")]
#[command(author, version, about = "Keyed Huffman file compressor")]
#[command(long_about = "
hfc compresses a file with a static Huffman code built from its byte
frequencies. The code table is stored in the output; the length header and
payload are obfuscated with the integer key (only key mod 256 matters).
The obfuscation is not encryption.

Examples:
  hfc compress notes.txt notes.hfc 42
  hfc decompress notes.hfc notes.txt 42
  hfc test notes.hfc 42
  hfc info notes.hfc --json
")]
struct Cli {
    /// Log level for diagnostics on stderr
    #[arg(long, value_enum, global = true, default_value = "warn")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Container to write
        output: PathBuf,

        /// Obfuscation key (integer, only the low byte is used)
        #[arg(allow_negative_numbers = true)]
        key: i64,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Decompress a container
    #[command(alias = "d")]
    Decompress {
        /// Container to read
        input: PathBuf,

        /// File to write
        output: PathBuf,

        /// Obfuscation key used at compression time
        #[arg(allow_negative_numbers = true)]
        key: i64,

        /// Refuse containers declaring more than this many bytes
        #[arg(long)]
        max_output: Option<u64>,

        #[command(flatten)]
        write: WriteArgs,
    },

    /// Check that a container decodes completely with the given key
    #[command(alias = "t")]
    Test {
        /// Container to check
        input: PathBuf,

        /// Obfuscation key used at compression time
        #[arg(allow_negative_numbers = true)]
        key: i64,

        /// Refuse containers declaring more than this many bytes
        #[arg(long)]
        max_output: Option<u64>,
    },

    /// Show the code table of a container (no key needed)
    #[command(alias = "i")]
    Info {
        /// Container to inspect
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Flags shared by commands that write an output file.
#[derive(clap::Args)]
struct WriteArgs {
    /// Overwrite the output without asking
    #[arg(short, long)]
    force: bool,

    /// Copy the input's modification time to the output
    #[arg(long)]
    preserve_mtime: bool,

    /// Show a spinner while the codec runs
    #[arg(short = 'P', long)]
    progress: bool,
}

impl From<WriteArgs> for WriteOptions {
    fn from(args: WriteArgs) -> Self {
        Self {
            force: args.force,
            preserve_mtime: args.preserve_mtime,
            progress: args.progress,
        }
    }
}

/// Diagnostic log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    /// Everything, including per-step details
    Trace,
    /// Pipeline milestones
    Debug,
    /// General progress
    Info,
    /// Length mismatches and other suspicious conditions
    Warn,
    /// Errors only
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

fn init_logging(level: LogLevel) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: could not install logger: {}", e);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            key,
            write,
        } => cmd_compress(&input, &output, key, write.into()),
        Commands::Decompress {
            input,
            output,
            key,
            max_output,
            write,
        } => cmd_decompress(&input, &output, key, max_output, write.into()),
        Commands::Test {
            input,
            key,
            max_output,
        } => cmd_test(&input, key, max_output),
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "hfc", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
