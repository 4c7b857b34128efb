//! Puzzle input lookup. Inputs live in one folder per day under a configurable root:
//!
//! ```text
//! inputs/Day01/input.txt
//! inputs/Day01/example.txt
//! ```
//!
//! The root comes from `AOC_INPUT_DIR` and falls back to `inputs`. A missing file reads as empty
//! input so a day without its input still runs.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{debug, warn};

pub const INPUT_DIR_VAR: &str = "AOC_INPUT_DIR";
pub const DEFAULT_INPUT_DIR: &str = "inputs";
pub const DEFAULT_INPUT_FILE: &str = "input.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputConfig {
    root: PathBuf,
}

impl InputConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_env() -> Self {
        let root = env::var_os(INPUT_DIR_VAR)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));
        debug!(root = %root.display(), "resolved input directory");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `root/DayNN/file` with the day zero padded to two digits.
    pub fn day_path(&self, day: u32, file: &str) -> PathBuf {
        self.root.join(format!("Day{day:02}")).join(file)
    }

    pub fn input_path(&self, day: u32) -> PathBuf {
        self.day_path(day, DEFAULT_INPUT_FILE)
    }

    pub fn read_input(&self, day: u32) -> Result<String> {
        read_to_string(self.input_path(day))
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Whole file contents, empty if the file doesn't exist.
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "input file not found, using empty input");
            Ok(String::new())
        }
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(read_to_string(path)?.lines().map(str::to_string).collect())
}

/// Like [`read_lines`] but skips lines that are empty or only whitespace.
pub fn read_non_blank_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(read_to_string(path)?
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}
