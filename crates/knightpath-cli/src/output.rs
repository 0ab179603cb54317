//! Output formatting for path and move rendering.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use knightpath_lib::{PathRenderMode, PathSummary};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Space-separated squares on one line.
    #[default]
    Plain,
    /// Headed listing, one square per line.
    Text,
    /// Markdown-flavoured listing.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

/// Legal knight moves from a single square.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MovesSummary {
    pub square: String,
    pub moves: Vec<String>,
}

impl OutputFormat {
    /// Write a path summary to stdout in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization or writing fails.
    pub fn render_path(self, summary: &PathSummary) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_path(&mut stdout, summary)
    }

    /// Write a path summary to `out` in this format.
    pub fn write_path<W: Write>(self, out: &mut W, summary: &PathSummary) -> io::Result<()> {
        let mode = match self {
            OutputFormat::Plain => PathRenderMode::Plain,
            OutputFormat::Text => PathRenderMode::Text,
            OutputFormat::Rich => PathRenderMode::RichText,
            OutputFormat::Json => return write_json(out, summary),
        };
        out.write_all(summary.render(mode).as_bytes())
    }

    /// Write the knight moves of a square to stdout in this format.
    pub fn render_moves(self, summary: &MovesSummary) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_moves(&mut stdout, summary)
    }

    /// Write the knight moves of a square to `out` in this format.
    pub fn write_moves<W: Write>(self, out: &mut W, summary: &MovesSummary) -> io::Result<()> {
        match self {
            OutputFormat::Plain => writeln!(out, "{}", summary.moves.join(" ")),
            OutputFormat::Text => {
                writeln!(
                    out,
                    "Knight moves from {} ({}):",
                    summary.square,
                    summary.moves.len()
                )?;
                for square in &summary.moves {
                    writeln!(out, " - {square}")?;
                }
                Ok(())
            }
            OutputFormat::Rich => {
                writeln!(
                    out,
                    "**Moves** from `{}` ({})",
                    summary.square,
                    summary.moves.len()
                )?;
                for square in &summary.moves {
                    writeln!(out, "* **{square}**")?;
                }
                Ok(())
            }
            OutputFormat::Json => write_json(out, summary),
        }
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use knightpath_lib::{plan_path, BoardConfig, PathRequest};

    fn render_path(format: OutputFormat, line: &str) -> String {
        let request = PathRequest::parse_line(line).unwrap();
        let plan = plan_path(&BoardConfig::default(), &request).unwrap();
        let mut buffer = Vec::new();
        format
            .write_path(&mut buffer, &PathSummary::from_plan(&plan))
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn plain_path_output() {
        assert_eq!(render_path(OutputFormat::Plain, "a1 b3"), "a1 b3\n");
    }

    #[test]
    fn json_path_output_is_valid_json() {
        let rendered = render_path(OutputFormat::Json, "a1 b3");
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["moves"], 1);
    }

    #[test]
    fn text_moves_output() {
        let summary = MovesSummary {
            square: "a0".to_string(),
            moves: vec!["c1".to_string(), "b2".to_string()],
        };
        let mut buffer = Vec::new();
        OutputFormat::Text.write_moves(&mut buffer, &summary).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Knight moves from a0 (2):\n - c1\n - b2\n"
        );
    }
}
