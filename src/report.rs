//! Aggregation of per-locale missing-key results.
//!
//! The problem count, not the printed rendering, decides whether a check run
//! passes. Printing lives in `cli::report`.

/// Missing keys for one target locale file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyReport {
    /// File name as configured (e.g. `zh-CN.json`).
    pub locale: String,
    /// Missing keys in ascending order.
    pub missing_keys: Vec<String>,
}

impl MissingKeyReport {
    pub fn is_clean(&self) -> bool {
        self.missing_keys.is_empty()
    }
}

/// All locale reports of one check run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub reports: Vec<MissingKeyReport>,
}

impl ValidationReport {
    pub fn push(&mut self, report: MissingKeyReport) {
        self.reports.push(report);
    }

    /// Total number of missing keys across all target locales.
    pub fn problem_count(&self) -> usize {
        self.reports.iter().map(|r| r.missing_keys.len()).sum()
    }

    /// Number of locale files with at least one missing key.
    pub fn failing_locale_count(&self) -> usize {
        self.reports.iter().filter(|r| !r.is_clean()).count()
    }

    pub fn is_clean(&self) -> bool {
        self.problem_count() == 0
    }
}
