//! Command-line argument parsing for the serp-overview CLI.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use crate::config::DEFAULT_TRUNCATION_BUDGET;
use crate::error::{OverviewError, OverviewResult};

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Render content through the pipeline (default)
    Render(RenderArgs),
}

/// Options for the render command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderArgs {
    /// Visible-character budget for the collapsed preview
    pub budget: usize,
    /// Bypass truncation entirely
    pub expanded: bool,
    /// Keep platform paste artifacts instead of stripping them
    pub keep_paste_artifacts: bool,
    /// Emit the outcome as JSON instead of bare markup
    pub json: bool,
    /// Content file to read; stdin when absent
    pub input: Option<String>,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            budget: DEFAULT_TRUNCATION_BUDGET,
            expanded: false,
            keep_paste_artifacts: false,
            json: false,
            input: None,
        }
    }
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use serp_overview::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["serp-overview".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> OverviewResult<CliCommand>
where
    I: Iterator<Item = String>,
{
    let mut render = RenderArgs::default();
    let mut args = args.skip(1); // Skip the program name

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--expanded" => render.expanded = true,
            "--keep-paste-artifacts" => render.keep_paste_artifacts = true,
            "--json" => render.json = true,
            "--budget" => {
                let value = args
                    .next()
                    .ok_or_else(|| OverviewError::InvalidBudget("<missing>".to_string()))?;
                render.budget = value
                    .parse()
                    .map_err(|_| OverviewError::InvalidBudget(value))?;
            }
            _ if !arg.starts_with('-') => render.input = Some(arg),
            _ => {} // Unknown flags are ignored
        }
    }

    Ok(CliCommand::Render(render))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(parts: &[&str]) -> OverviewResult<CliCommand> {
        let mut args = vec!["serp-overview".to_string()];
        args.extend(parts.iter().map(|s| s.to_string()));
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]).unwrap(), CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap(), CliCommand::Version);
    }

    #[test]
    fn test_parse_no_args_renders_stdin() {
        let CliCommand::Render(args) = parse(&[]).unwrap() else {
            panic!("expected render command");
        };
        assert_eq!(args, RenderArgs::default());
        assert_eq!(args.budget, DEFAULT_TRUNCATION_BUDGET);
    }

    #[test]
    fn test_parse_budget() {
        let CliCommand::Render(args) = parse(&["--budget", "500"]).unwrap() else {
            panic!("expected render command");
        };
        assert_eq!(args.budget, 500);
    }

    #[test]
    fn test_parse_budget_invalid() {
        assert!(matches!(
            parse(&["--budget", "lots"]),
            Err(OverviewError::InvalidBudget(v)) if v == "lots"
        ));
        assert!(matches!(
            parse(&["--budget"]),
            Err(OverviewError::InvalidBudget(_))
        ));
    }

    #[test]
    fn test_parse_flags_and_file() {
        let CliCommand::Render(args) =
            parse(&["--expanded", "--json", "--keep-paste-artifacts", "content.html"]).unwrap()
        else {
            panic!("expected render command");
        };
        assert!(args.expanded);
        assert!(args.json);
        assert!(args.keep_paste_artifacts);
        assert_eq!(args.input.as_deref(), Some("content.html"));
    }

    #[test]
    fn test_unknown_flag_ignored() {
        let CliCommand::Render(args) = parse(&["--wat"]).unwrap() else {
            panic!("expected render command");
        };
        assert_eq!(args, RenderArgs::default());
    }
}
