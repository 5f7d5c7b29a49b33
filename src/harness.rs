//! Directory-driven pass/fail runner.
//!
//! Every regular file in a directory is validated and the verdict is compared
//! with the expectation encoded in its name: a name containing `fail` must be
//! rejected, a name containing `pass` must be accepted. The core parser knows
//! nothing about files; this module owns the loop and the accumulator.

use crate::{validate_or_parse_with, Options};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What a file's name says its content should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Pass,
    Fail,
}

impl Expectation {
    /// Reads the expectation from a file name. `fail` takes precedence over
    /// `pass`; a name with neither is unclassified.
    pub fn from_file_name(name: &str) -> Option<Self> {
        if name.contains("fail") {
            Some(Expectation::Fail)
        } else if name.contains("pass") {
            Some(Expectation::Pass)
        } else {
            None
        }
    }
}

/// The validator's answer for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    /// Rejected, with the reason.
    Invalid(String),
}

impl Verdict {
    /// Validates raw bytes. Input that is not UTF-8 is invalid.
    pub fn of_bytes(bytes: &[u8], options: Options) -> Self {
        let text = match std::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => return Verdict::Invalid(format!("input is not UTF-8: {}", err)),
        };
        match validate_or_parse_with(text, options) {
            Ok(_) => Verdict::Valid,
            Err(err) => Verdict::Invalid(err.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// The result of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub path: PathBuf,
    pub expected: Option<Expectation>,
    pub verdict: Verdict,
}

impl Outcome {
    /// `None` for unclassified files, otherwise whether the verdict agrees
    /// with the expectation.
    pub fn is_match(&self) -> Option<bool> {
        self.expected.map(|expected| match expected {
            Expectation::Pass => self.verdict.is_valid(),
            Expectation::Fail => !self.verdict.is_valid(),
        })
    }
}

/// Running totals for a suite.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    /// Files whose verdict matched their expectation.
    pub passed: usize,
    /// Files whose verdict contradicted their expectation.
    pub failed: usize,
    /// Files with no expectation in their name, or that could not be read.
    pub unclassified: usize,
    /// The contradicting outcomes, in file-name order.
    pub mismatches: Vec<Outcome>,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome.is_match() {
            Some(true) => self.passed += 1,
            Some(false) => {
                self.failed += 1;
                self.mismatches.push(outcome);
            }
            None => self.unclassified += 1,
        }
    }

    /// `true` when no file contradicted its expectation.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// A directory of test inputs plus the options to validate them with.
#[derive(Debug, Clone)]
pub struct Suite {
    dir: PathBuf,
    options: Options,
}

impl Suite {
    pub fn new(dir: impl Into<PathBuf>, options: Options) -> Self {
        Suite {
            dir: dir.into(),
            options,
        }
    }

    /// Checks every regular file directly inside the directory, in file-name
    /// order. Sub-directories are skipped.
    ///
    /// # Errors
    /// Fails only if the directory itself cannot be listed. Unreadable files
    /// are logged and counted as unclassified.
    pub fn run(&self) -> Result<Tally> {
        let mut tally = Tally::default();
        for path in self.files()? {
            match self.check_file(&path) {
                Ok(outcome) => {
                    debug!(
                        path = %outcome.path.display(),
                        expected = ?outcome.expected,
                        valid = outcome.verdict.is_valid(),
                        "checked file"
                    );
                    if outcome.is_match() == Some(false) {
                        warn!(
                            path = %outcome.path.display(),
                            verdict = ?outcome.verdict,
                            "verdict contradicts file name"
                        );
                    }
                    tally.record(outcome);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping unreadable file");
                    tally.unclassified += 1;
                }
            }
        }
        Ok(tally)
    }

    /// Reads and validates a single file.
    pub fn check_file(&self, path: &Path) -> Result<Outcome> {
        let bytes =
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let expected = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(Expectation::from_file_name);
        Ok(Outcome {
            path: path.to_path_buf(),
            expected,
            verdict: Verdict::of_bytes(&bytes, self.options),
        })
    }

    fn files(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("failed to open directory {}", self.dir.display()))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("failed to list directory {}", self.dir.display()))?;
            if entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_expectation_from_file_name() {
        assert_eq!(
            Expectation::from_file_name("pass1.json"),
            Some(Expectation::Pass)
        );
        assert_eq!(
            Expectation::from_file_name("fail12.json"),
            Some(Expectation::Fail)
        );
        assert_eq!(
            Expectation::from_file_name("pass_then_fail.json"),
            Some(Expectation::Fail)
        );
        assert_eq!(Expectation::from_file_name("notes.txt"), None);
    }

    #[test]
    fn test_verdict_of_bytes() {
        assert!(Verdict::of_bytes(b"{}", Options::default()).is_valid());
        assert!(!Verdict::of_bytes(b"", Options::default()).is_valid());
        match Verdict::of_bytes(&[b'"', 0xFF, b'"'], Options::default()) {
            Verdict::Invalid(reason) => assert!(reason.starts_with("input is not UTF-8")),
            Verdict::Valid => panic!("non-UTF-8 input must be invalid"),
        }
    }

    #[test]
    fn test_suite_tallies_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pass1.json"), r#"{"key": "value"}"#).unwrap();
        fs::write(dir.path().join("pass2.json"), "[1, 2, 3]").unwrap();
        fs::write(dir.path().join("fail1.json"), r#"{"key": "value",}"#).unwrap();
        fs::write(dir.path().join("fail2.json"), "").unwrap();
        // Valid but named as a failure case.
        fs::write(dir.path().join("fail3.json"), "{}").unwrap();
        fs::write(dir.path().join("README"), "not json").unwrap();
        fs::create_dir(dir.path().join("pass_subdir")).unwrap();

        let tally = Suite::new(dir.path(), Options::default()).run().unwrap();
        assert_eq!(tally.passed, 4);
        assert_eq!(tally.failed, 1);
        assert_eq!(tally.unclassified, 1);
        assert!(!tally.is_clean());
        assert_eq!(tally.mismatches.len(), 1);
        assert!(tally.mismatches[0].path.ends_with("fail3.json"));
        assert_eq!(tally.mismatches[0].verdict, Verdict::Valid);
    }

    #[test]
    fn test_suite_missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = Suite::new(&missing, Options::default()).run().unwrap_err();
        assert!(err.to_string().starts_with("failed to open directory"));
    }

    #[test]
    fn test_suite_uses_options() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pass_signed.json"), "[-1]").unwrap();

        let strict = Suite::new(dir.path(), Options::default()).run().unwrap();
        assert_eq!(strict.failed, 1);

        let signed = Options::default().with_numbers(crate::NumberGrammar::Signed);
        let relaxed = Suite::new(dir.path(), signed).run().unwrap();
        assert!(relaxed.is_clean());
        assert_eq!(relaxed.passed, 1);
    }
}
