//! Command-line argument parsing for pagebuddy
//!
//! Provides clap-based CLI with subcommands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pagebuddy - Browse row-oriented data as paginated terminal views
#[derive(Parser, Debug)]
#[command(name = "pagebuddy")]
#[command(author = "Jerome (Kubashen) Naidoo")]
#[command(version)]
#[command(about = "Browse row-oriented data as paginated terminal views", long_about = None)]
pub struct Args {
    /// Data file to browse, one row per line
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Browse a generated sample dataset of N rows instead of a file
    #[arg(long, value_name = "N")]
    pub sample: Option<usize>,

    /// Rows per page for this run (overrides saved and configured sizes)
    #[arg(short, long, value_name = "N")]
    pub page_size: Option<usize>,

    /// View name used for remembered settings (defaults to the file stem)
    #[arg(long)]
    pub view: Option<String>,

    /// Directory for saved view settings and input history
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display current configuration
    Config,

    /// Remove saved view settings
    Clean {
        /// Only this view (all views when omitted)
        #[arg(long)]
        view: Option<String>,
    },
}

impl Args {
    /// Check argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.command.is_none() && self.file.is_none() && self.sample.is_none() {
            return Err(
                "Data source required. Pass a FILE or --sample N, or run a subcommand.".to_string(),
            );
        }

        if self.file.is_some() && self.sample.is_some() {
            return Err("Cannot combine FILE with --sample.".to_string());
        }

        if self.command.is_some() && (self.file.is_some() || self.sample.is_some()) {
            return Err("Cannot specify a data source with a subcommand.".to_string());
        }

        if self.page_size == Some(0) {
            return Err("--page-size must be greater than 0.".to_string());
        }

        Ok(())
    }

    /// Settings key for this run: explicit --view, else the file stem,
    /// else "sample"
    pub fn view_name(&self) -> String {
        if let Some(view) = &self.view {
            return sanitize_view_name(view);
        }

        if let Some(file) = &self.file {
            if let Some(stem) = file.file_stem().and_then(|s| s.to_str()) {
                return sanitize_view_name(stem);
            }
        }

        "sample".to_string()
    }
}

/// Squash a raw name into the store's key alphabet
pub fn sanitize_view_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "view".to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            file: None,
            sample: None,
            page_size: None,
            view: None,
            data_dir: None,
            config: None,
            plain: false,
            command: None,
        }
    }

    #[test]
    fn test_validate_success_with_file() {
        let args = Args {
            file: Some(PathBuf::from("rows.txt")),
            ..base_args()
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_success_with_sample() {
        let args = Args {
            sample: Some(250),
            ..base_args()
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_success_with_subcommand() {
        let args = Args {
            command: Some(Commands::Config),
            ..base_args()
        };
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validate_fail_without_source() {
        assert!(base_args().validate().is_err());
    }

    #[test]
    fn test_validate_fail_file_and_sample() {
        let args = Args {
            file: Some(PathBuf::from("rows.txt")),
            sample: Some(10),
            ..base_args()
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_fail_source_with_subcommand() {
        let args = Args {
            file: Some(PathBuf::from("rows.txt")),
            command: Some(Commands::Config),
            ..base_args()
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_fail_zero_page_size() {
        let args = Args {
            sample: Some(10),
            page_size: Some(0),
            ..base_args()
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_view_name_from_flag() {
        let args = Args {
            sample: Some(10),
            view: Some("Quarterly Sales".to_string()),
            ..base_args()
        };
        assert_eq!(args.view_name(), "quarterly-sales");
    }

    #[test]
    fn test_view_name_from_file_stem() {
        let args = Args {
            file: Some(PathBuf::from("data/Inventory Items.txt")),
            ..base_args()
        };
        assert_eq!(args.view_name(), "inventory-items");
    }

    #[test]
    fn test_view_name_fallback() {
        let args = Args {
            sample: Some(10),
            ..base_args()
        };
        assert_eq!(args.view_name(), "sample");
    }

    #[test]
    fn test_sanitize_trims_leading_dots() {
        assert_eq!(sanitize_view_name(".env"), "env");
        assert_eq!(sanitize_view_name("..."), "view");
    }

    #[test]
    fn test_sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_view_name("sales-2024_q1.v2"), "sales-2024_q1.v2");
    }
}
