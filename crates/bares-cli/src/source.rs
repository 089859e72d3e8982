//! Where expressions come from: a file, stdin, or the command line.
//!
//! Every line is one independent expression. Only the line terminator is
//! stripped, so blank lines are kept and reported like any other input.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionSource {
    File(PathBuf),
    Stdin,
    Literals(Vec<String>),
}

impl ExpressionSource {
    /// Picks the source from the CLI arguments. `-e` literals win over a
    /// file; a missing file or `-` means stdin.
    pub fn from_args(file: Option<PathBuf>, literals: Vec<String>) -> Self {
        if !literals.is_empty() {
            return ExpressionSource::Literals(literals);
        }
        match file {
            Some(path) if path.as_os_str() != "-" => ExpressionSource::File(path),
            _ => ExpressionSource::Stdin,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ExpressionSource::File(path) => path.display().to_string(),
            ExpressionSource::Stdin => "<stdin>".to_string(),
            ExpressionSource::Literals(_) => "<command line>".to_string(),
        }
    }

    pub fn read(&self) -> Result<Vec<String>> {
        match self {
            ExpressionSource::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open expression file {:?}", path))?;
                read_lines(BufReader::new(file))
                    .with_context(|| format!("Failed to read expression file {:?}", path))
            }
            ExpressionSource::Stdin => {
                read_lines(io::stdin().lock()).context("Failed to read expressions from stdin")
            }
            ExpressionSource::Literals(exprs) => Ok(exprs.clone()),
        }
    }
}

pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        lines.push(line);
    }
    Ok(lines)
}
