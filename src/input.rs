//! Simulation input loader.
//!
//! Reads the line-oriented `key=value` format used to save and share
//! simulation setups:
//!
//! ```text
//! # disk with 100 positions
//! tamanho=100
//! cabeca=50
//! requisicoes=48, 54, 10, 90
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Missing keys fall
//! back to [`DEFAULT_DISK_SIZE`] and [`DEFAULT_HEAD`]. The parsed input is
//! validated before it is returned, so it can go straight to the policies.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::comparison::{compare_all, ComparisonResult};
use crate::models::{DiskExtent, Position, RequestSet, SchedulingResult};
use crate::policies::{run_policy, PolicyId};
use crate::validation::validate_input;
use crate::{Error, Result};

/// Disk size used when the input does not set `tamanho`.
pub const DEFAULT_DISK_SIZE: u64 = 50;
/// Head position used when the input does not set `cabeca`.
pub const DEFAULT_HEAD: Position = 25;

const KEY_SIZE: &str = "tamanho";
const KEY_HEAD: &str = "cabeca";
const KEY_REQUESTS: &str = "requisicoes";

/// A validated simulation setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationInput {
    pub extent: DiskExtent,
    pub head: Position,
    pub requests: RequestSet,
}

impl SimulationInput {
    /// Runs one policy on this input.
    pub fn run(&self, policy: PolicyId) -> SchedulingResult {
        run_policy(policy, &self.requests, self.head, self.extent)
    }

    /// Runs and ranks every policy on this input.
    pub fn compare(&self) -> ComparisonResult {
        compare_all(&self.requests, self.head, self.extent)
    }
}

/// Parses and validates simulation input text.
///
/// # Errors
/// - [`Error::MissingValue`] if `tamanho` or `cabeca` has an empty value
/// - [`Error::InvalidValue`] if either is not a non-negative integer
/// - [`Error::Validation`] if the result fails [`validate_input`]
pub fn parse_input(text: &str) -> Result<SimulationInput> {
    let mut size = DEFAULT_DISK_SIZE;
    let mut head = DEFAULT_HEAD;
    let mut requests = Vec::new();

    for (number, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            warn!(line = number + 1, content = line, "ignoring line without '='");
            continue;
        };
        let (key, value) = (key.trim(), value.trim());

        match key {
            KEY_SIZE => size = parse_integer(key, value)?,
            KEY_HEAD => head = parse_integer(key, value)?,
            KEY_REQUESTS => requests = parse_requests(value),
            _ => warn!(line = number + 1, key, "ignoring unknown key"),
        }
    }

    validate_input(size, head, &requests).map_err(Error::Validation)?;

    Ok(SimulationInput {
        extent: DiskExtent::new(size),
        head,
        requests: RequestSet::new(requests),
    })
}

/// Reads and parses a simulation input file.
pub fn load_input(path: impl AsRef<Path>) -> Result<SimulationInput> {
    let text = fs::read_to_string(path)?;
    parse_input(&text)
}

fn parse_integer(key: &str, value: &str) -> Result<u64> {
    if value.is_empty() {
        return Err(Error::MissingValue(key.to_string()));
    }
    value.parse().map_err(|_| Error::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Comma-separated positions. Items that are not integers are skipped.
fn parse_requests(value: &str) -> Vec<Position> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .filter_map(|item| match item.parse() {
            Ok(position) => Some(position),
            Err(_) => {
                warn!(item, "skipping request that is not a position");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use std::io::Write;

    const SAMPLE: &str = "\
# sample setup
tamanho=100
cabeca=50

requisicoes=48, 54, 10, 90
";

    #[test]
    fn test_parse_sample() {
        let input = parse_input(SAMPLE).unwrap();
        assert_eq!(input.extent, DiskExtent::new(100));
        assert_eq!(input.head, 50);
        assert_eq!(input.requests.as_slice(), &[48, 54, 10, 90]);
    }

    #[test]
    fn test_parse_then_compare() {
        let cmp = parse_input(SAMPLE).unwrap().compare();
        assert_eq!(cmp.best_policies, vec![PolicyId::Scan]);

        let input = parse_input(SAMPLE).unwrap();
        assert_eq!(input.run(PolicyId::CScan).total_movement, 196);
    }

    #[test]
    fn test_defaults() {
        let input = parse_input("requisicoes=1,2,3").unwrap();
        assert_eq!(input.extent.size(), DEFAULT_DISK_SIZE);
        assert_eq!(input.head, DEFAULT_HEAD);

        let input = parse_input("").unwrap();
        assert!(input.requests.is_empty());
    }

    #[test]
    fn test_whitespace_and_unknown_keys() {
        let text = "  tamanho = 20 \nvelocidade=800\ngarbage\n  # comment\ncabeca=3";
        let input = parse_input(text).unwrap();
        assert_eq!(input.extent.size(), 20);
        assert_eq!(input.head, 3);
    }

    #[test]
    fn test_bad_request_items_are_skipped() {
        let input = parse_input("requisicoes=4, x, , 7,-1").unwrap();
        assert_eq!(input.requests.as_slice(), &[4, 7]);
    }

    #[test]
    fn test_invalid_size() {
        let err = parse_input("tamanho=big").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref key, .. } if key == "tamanho"));

        let err = parse_input("cabeca=").unwrap_err();
        assert!(matches!(err, Error::MissingValue(ref key) if key == "cabeca"));
    }

    #[test]
    fn test_validation_failure() {
        let err = parse_input("tamanho=10\ncabeca=2\nrequisicoes=3,3,12").unwrap_err();
        let Error::Validation(errors) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateRequest));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::RequestOutOfRange));
    }

    #[test]
    fn test_default_head_outside_small_disk() {
        let err = parse_input("tamanho=10").unwrap_err();
        assert!(err.to_string().contains("Head position 25"));
    }

    #[test]
    fn test_load_input_from_file() {
        let path = std::env::temp_dir().join(format!("u-disksched-{}.txt", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        drop(file);

        let input = load_input(&path).unwrap();
        assert_eq!(input.requests.len(), 4);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_input("/nonexistent/u-disksched/input.txt").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
