use anyhow::Result;
use clap::{Parser, Subcommand};

use knightpath_cli::logging::{init_tracing, LogFormat};
use knightpath_cli::output::OutputFormat;
use knightpath_lib::{decode, BoardConfig};

mod commands;

use commands::moves::handle_moves_command;
use commands::path::{handle_path_command, PathCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest knight paths on a bounded board")]
struct Cli {
    /// Output format for results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Log output format (falls back to LOG_FORMAT, then text).
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Last file letter on the board (default: i).
    #[arg(long, value_parser = parse_file_letter)]
    max_file: Option<i32>,

    /// Last rank digit on the board (default: 8).
    #[arg(long, value_parser = clap::value_parser!(i32).range(0..=9))]
    max_rank: Option<i32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest knight path between two squares.
    ///
    /// Without START the request is read from one line of stdin as
    /// `START TARGET [RESTRICTED...]`.
    Path {
        /// Starting square, e.g. a1.
        start: Option<String>,
        /// Target square, e.g. h8.
        target: Option<String>,
        /// Square the knight may not land on; repeatable.
        #[arg(long = "restrict", value_name = "SQUARE")]
        restrict: Vec<String>,
    },
    /// List the legal knight moves from a square.
    Moves {
        /// Square to move from.
        square: String,
        /// Square the knight may not land on; repeatable.
        #[arg(long = "restrict", value_name = "SQUARE")]
        restrict: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(LogFormat::resolve(cli.log_format));

    let config = BoardConfig::default().with_upper_bounds(cli.max_file, cli.max_rank);

    match cli.command {
        Command::Path {
            start,
            target,
            restrict,
        } => {
            let args = PathCommandArgs {
                start,
                target,
                restrict,
            };
            handle_path_command(&config, cli.format, &args, std::io::stdin().lock())
        }
        Command::Moves { square, restrict } => {
            handle_moves_command(&config, cli.format, &square, &restrict)
        }
    }
}

fn parse_file_letter(value: &str) -> std::result::Result<i32, String> {
    decode(&format!("{value}0"))
        .map(|coord| coord.x)
        .map_err(|_| format!("'{value}' is not a file letter"))
}
