//! Append-only list of diagnostics produced by a validation session.

use std::fmt;

use crate::crosscheck::Mismatch;

/// Ordered diagnostics, suitable for direct display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MismatchLog {
    entries: Vec<String>,
}

impl MismatchLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the diagnostic of `mismatch`, if it has one.
    ///
    /// Returns true when an entry was appended.
    pub fn record(&mut self, mismatch: &Mismatch) -> bool {
        match mismatch.diagnostic() {
            Some(text) => {
                self.entries.push(text);
                true
            }
            None => false,
        }
    }

    /// Returns the number of diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Diagnostics in the order they were recorded.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<String> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a MismatchLog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for MismatchLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_mismatches_are_not_recorded() {
        let mut log = MismatchLog::new();
        assert!(!log.record(&Mismatch::MissingStructureId));
        assert!(!log.record(&Mismatch::MissingResidues {
            chain_label: "A".into()
        }));
        assert!(log.is_empty());
    }

    #[test]
    fn diagnosed_mismatches_keep_order() {
        let mut log = MismatchLog::new();
        log.record(&Mismatch::EntryObsoleted);
        log.record(&Mismatch::NumberingMismatch {
            position_label: "4".into(),
        });
        assert_eq!(log.len(), 2);
        assert!(log.entries()[0].contains("probably obsoleted entry"));
        assert!(log.entries()[1].contains("completely mismatched"));
        assert_eq!(log.to_string().lines().count(), 2);
    }
}
