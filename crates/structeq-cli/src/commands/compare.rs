//! Compare command
//!
//! Usage: structeq compare <LEFT> <RIGHT> [--mode <MODE>] [--ignore <NAME>]... [--config <FILE>]

use clap::{Args, ValueEnum};
use serde_json::Value;
use std::path::{Path, PathBuf};
use structeq_core::assertions::format_diagnostics;
use structeq_core::logging_facility::{init, Profile};
use structeq_core::{ComparisonConfig, StructEqError, StructuralComparer};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Reference document (JSON)
    pub left: PathBuf,

    /// Document compared against the reference (JSON)
    pub right: PathBuf,

    /// Comparison mode
    #[arg(short, long, value_enum, default_value_t = Mode::Full)]
    pub mode: Mode,

    /// Member (object key) to skip at every depth; repeatable
    #[arg(short, long, value_name = "NAME")]
    pub ignore: Vec<String>,

    /// TOML file with comparison flags; takes precedence over --mode
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log human-readable events to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Log JSON events to stderr
    #[arg(long, conflicts_with = "verbose")]
    pub log_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Full,
    Sub,
    Intersection,
    Shape,
    SubShape,
}

impl Mode {
    fn config(self) -> ComparisonConfig {
        match self {
            Mode::Full => ComparisonConfig::full(),
            Mode::Sub => ComparisonConfig::sub(),
            Mode::Intersection => ComparisonConfig::intersection(),
            Mode::Shape => ComparisonConfig::shape(),
            Mode::SubShape => ComparisonConfig::sub_shape(),
        }
    }
}

/// Result of a completed comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Equal,
    NotEqual,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Equal => 0,
            Outcome::NotEqual => 1,
        }
    }
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<Outcome, Box<dyn std::error::Error>> {
    if args.log_json {
        init(Profile::Production);
    } else if args.verbose {
        init(Profile::Development);
    }

    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| StructEqError::Io {
                message: format!("{}: {}", path.display(), e),
            })?;
            ComparisonConfig::from_toml_str(&text)?
        }
        None => args.mode.config(),
    };

    let left = load_document(&args.left)?;
    let right = load_document(&args.right)?;

    let mut comparer = StructuralComparer::new(config.with_record_errors(true)).ignoring(args.ignore);
    if comparer.compare(&left, &right)? {
        println!("equal");
        Ok(Outcome::Equal)
    } else {
        println!("not equal");
        print!("{}", format_diagnostics(comparer.errors()));
        Ok(Outcome::NotEqual)
    }
}

fn load_document(path: &Path) -> Result<Value, StructEqError> {
    let text = std::fs::read_to_string(path).map_err(|e| StructEqError::Io {
        message: format!("{}: {}", path.display(), e),
    })?;
    serde_json::from_str(&text).map_err(|e| StructEqError::Serialization {
        message: format!("{}: {}", path.display(), e),
    })
}
