use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// An operation the demo applies to its operands `A` and `B`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    #[serde(alias = "sub")]
    Subtract,
    #[serde(alias = "mul")]
    Multiply,
    #[serde(alias = "t")]
    Transpose,
}

impl Operation {
    /// Header printed above the result.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Add => "Matrix C (A + B):",
            Operation::Subtract => "Matrix C (A - B):",
            Operation::Multiply => "Matrix C (A * B):",
            Operation::Transpose => "Matrix A^T:",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Transpose => "transpose",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "subtract" | "sub" => Ok(Operation::Subtract),
            "multiply" | "mul" => Ok(Operation::Multiply),
            "transpose" | "t" => Ok(Operation::Transpose),
            _ => Err(format!(
                "Unknown operation: {}. Expected one of add, subtract, multiply, transpose",
                s
            )),
        }
    }
}

/// Settings for the demonstration run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub operations: Vec<Operation>,
    /// Fixed number of decimals when printing; `None` prints the shortest form.
    pub precision: Option<usize>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            operations: vec![Operation::Multiply],
            precision: None,
        }
    }
}

/// Load a demo configuration from a JSON file.
pub fn load_demo_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: DemoConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

impl DemoConfig {
    /// Config file (or defaults) with command-line overrides applied on top.
    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => load_demo_config(path)?,
            None => DemoConfig::default(),
        };

        if let Some(ops) = matches.get_many::<Operation>("op") {
            config.operations = ops.copied().collect();
        }
        if let Some(&precision) = matches.get_one::<usize>("precision") {
            config.precision = Some(precision);
        }

        if config.operations.is_empty() {
            log::warn!("No operations configured, only the operands will be printed");
        }

        Ok(config)
    }
}
