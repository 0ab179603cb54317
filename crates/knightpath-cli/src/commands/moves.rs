//! Moves command handler for listing the knight moves of one square.

use anyhow::{Context, Result};

use knightpath_cli::output::{MovesSummary, OutputFormat};
use knightpath_lib::{knight_moves, BoardConfig, Square};

/// Handle the moves subcommand.
pub fn handle_moves_command(
    config: &BoardConfig,
    format: OutputFormat,
    square: &str,
    restrict: &[String],
) -> Result<()> {
    let summary = moves_summary(config, square, restrict)?;
    format
        .render_moves(&summary)
        .context("failed to write moves output")
}

fn moves_summary(config: &BoardConfig, square: &str, restrict: &[String]) -> Result<MovesSummary> {
    let mut board = config.build().context("invalid board configuration")?;
    board.set_restricted_squares(restrict);

    let origin = board
        .square_from_str(square)
        .with_context(|| format!("invalid square '{square}'"))?;

    Ok(MovesSummary {
        square: origin.notation(),
        moves: knight_moves(&origin).iter().map(Square::notation).collect(),
    })
}
