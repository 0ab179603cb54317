use std::fmt::Write;

use serde::Serialize;

use crate::coord::{encode, Coord};
use crate::routing::PathPlan;

/// Presentation style for turning a [`PathSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRenderMode {
    /// Space-joined notation on a single line; an empty line when unreachable.
    Plain,
    /// Headed listing with one numbered step per line.
    Text,
    /// Markdown-flavoured listing.
    RichText,
}

/// Endpoint of a path query.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathEndpoint {
    pub square: String,
    pub x: i32,
    pub y: i32,
}

impl From<Coord> for PathEndpoint {
    fn from(coord: Coord) -> Self {
        Self {
            square: encode(coord),
            x: coord.x,
            y: coord.y,
        }
    }
}

/// Square visited along a planned path.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathStep {
    pub index: usize,
    pub square: String,
    pub x: i32,
    pub y: i32,
}

/// Structured representation of a planned path that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathSummary {
    pub start: PathEndpoint,
    pub target: PathEndpoint,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moves: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub restricted: Vec<String>,
    pub steps: Vec<PathStep>,
}

impl PathSummary {
    /// Convert a [`PathPlan`] into a summary with notation for every square.
    pub fn from_plan(plan: &PathPlan) -> Self {
        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, coord)| PathStep {
                index,
                square: encode(*coord),
                x: coord.x,
                y: coord.y,
            })
            .collect();

        Self {
            start: plan.start.into(),
            target: plan.target.into(),
            found: plan.found(),
            moves: plan.move_count(),
            restricted: plan.restricted.iter().copied().map(encode).collect(),
            steps,
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: PathRenderMode) -> String {
        match mode {
            PathRenderMode::Plain => self.render_plain(),
            PathRenderMode::Text => self.render_text(),
            PathRenderMode::RichText => self.render_rich(),
        }
    }

    fn joined_squares(&self) -> String {
        self.steps
            .iter()
            .map(|step| step.square.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn render_plain(&self) -> String {
        format!("{}\n", self.joined_squares())
    }

    fn render_text(&self) -> String {
        let mut buffer = String::new();
        let Some(moves) = self.moves else {
            let _ = writeln!(
                buffer,
                "No path found from {} to {}.",
                self.start.square, self.target.square
            );
            return buffer;
        };

        let _ = writeln!(
            buffer,
            "Path from {} to {} ({}):",
            self.start.square,
            self.target.square,
            move_label(moves)
        );
        for step in &self.steps {
            let _ = writeln!(buffer, "{:>3}: {}", step.index, step.square);
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let Some(moves) = self.moves else {
            let _ = writeln!(
                buffer,
                "**No path** from `{}` to `{}`",
                self.start.square, self.target.square
            );
            return buffer;
        };

        let _ = writeln!(
            buffer,
            "**Path** _{} → {}_ ({})",
            self.start.square,
            self.target.square,
            move_label(moves)
        );
        for step in &self.steps {
            let _ = writeln!(buffer, "* {:>2}. **{}**", step.index, step.square);
        }
        buffer
    }
}

fn move_label(moves: usize) -> String {
    if moves == 1 {
        "1 move".to_string()
    } else {
        format!("{moves} moves")
    }
}
