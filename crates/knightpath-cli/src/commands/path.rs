//! Path command handler for computing shortest knight paths.

use std::io::BufRead;

use anyhow::{Context, Result};
use tracing::info;

use knightpath_cli::output::OutputFormat;
use knightpath_lib::{plan_path, BoardConfig, PathRequest, PathSummary};

/// Arguments for the path command.
#[derive(Debug, Clone, Default)]
pub struct PathCommandArgs {
    /// Starting square; when absent the request is read from one input line.
    pub start: Option<String>,
    /// Target square.
    pub target: Option<String>,
    /// Extra restricted squares.
    pub restrict: Vec<String>,
}

impl PathCommandArgs {
    /// Build the request from positional arguments, or from a single line of
    /// `input` formatted as `START TARGET [RESTRICTED...]` when no start
    /// square was given.
    pub fn to_request<R: BufRead>(&self, input: R) -> Result<PathRequest> {
        let request = match &self.start {
            Some(start) => {
                let tokens = std::iter::once(start.clone()).chain(self.target.clone());
                PathRequest::from_tokens(tokens)?
            }
            None => {
                let line = read_request_line(input)?;
                PathRequest::parse_line(&line)?
            }
        };
        Ok(request.with_restricted(self.restrict.iter().cloned()))
    }
}

/// Handle the path subcommand.
pub fn handle_path_command<R: BufRead>(
    config: &BoardConfig,
    format: OutputFormat,
    args: &PathCommandArgs,
    input: R,
) -> Result<()> {
    let request = args.to_request(input)?;
    let plan = plan_path(config, &request).with_context(|| {
        format!(
            "failed to plan path from '{}' to '{}'",
            request.start, request.target
        )
    })?;

    info!(
        start = %plan.start,
        target = %plan.target,
        found = plan.found(),
        moves = ?plan.move_count(),
        "path planned"
    );

    let summary = PathSummary::from_plan(&plan);
    format
        .render_path(&summary)
        .context("failed to write path output")
}

fn read_request_line<R: BufRead>(mut input: R) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("error reading input")?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_arguments_take_precedence_over_input() {
        let args = PathCommandArgs {
            start: Some("a1".to_string()),
            target: Some("h8".to_string()),
            restrict: vec!["b3".to_string()],
        };
        let request = args.to_request("d4 d5\n".as_bytes()).unwrap();
        assert_eq!(
            request,
            PathRequest::new("a1", "h8").with_restricted(["b3"])
        );
    }

    #[test]
    fn input_line_supplies_request_when_start_absent() {
        let args = PathCommandArgs {
            restrict: vec!["c2".to_string()],
            ..PathCommandArgs::default()
        };
        let request = args.to_request("a1 h8 b3\nignored\n".as_bytes()).unwrap();
        assert_eq!(
            request,
            PathRequest::new("a1", "h8").with_restricted(["b3", "c2"])
        );
    }

    #[test]
    fn start_without_target_is_rejected() {
        let args = PathCommandArgs {
            start: Some("a1".to_string()),
            ..PathCommandArgs::default()
        };
        let error = args.to_request("".as_bytes()).unwrap_err();
        assert!(format!("{error}").contains("missing target coordinate"));
    }

    #[test]
    fn empty_input_is_rejected() {
        let error = PathCommandArgs::default()
            .to_request("".as_bytes())
            .unwrap_err();
        assert!(format!("{error}").contains("missing start coordinate"));
    }
}
