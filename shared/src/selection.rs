use std::fmt;
use std::str::FromStr;

use crate::errors::RangeError;
use crate::stream::Snapshot;

pub const ALL_LANGUAGES: &str = "all";
pub const DEFAULT_RANK_RANGE: &str = "1-20";

/// Rank windows offered by the rank selector.
pub const RANK_WINDOWS: &[&str] = &[
    "1-20", "21-40", "41-60", "61-80", "81-100", "1-50", "1-100", "101-200", "201-500",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    All,
    Code(String),
}

impl Language {
    /// Resolve a stored language value against the snapshot. Anything that is not
    /// a language key present in the snapshot becomes `All`.
    pub fn resolve(value: &str, snapshot: &Snapshot) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_LANGUAGES || !snapshot.has_language(value) {
            return Self::All;
        }
        Self::Code(value.to_owned())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_LANGUAGES,
            Self::Code(code) => code,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive, 1-based rank window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankRange {
    pub start: usize,
    pub end: usize,
}

impl RankRange {
    /// Zero-based half-open index bounds of this window over `len` items.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let lo = (self.start - 1).min(len);
        let hi = self.end.min(len);
        (lo, hi)
    }
}

impl Default for RankRange {
    fn default() -> Self {
        Self { start: 1, end: 20 }
    }
}

impl FromStr for RankRange {
    type Err = RangeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || RangeError::Malformed(raw.to_owned());
        let (start, end) = raw.split_once('-').ok_or_else(malformed)?;
        let start: usize = start.trim().parse().map_err(|_| malformed())?;
        let end: usize = end.trim().parse().map_err(|_| malformed())?;
        if start == 0 || end == 0 {
            return Err(RangeError::NotPositive(raw.to_owned()));
        }
        if start > end {
            return Err(RangeError::Reversed(raw.to_owned()));
        }
        Ok(Self { start, end })
    }
}

impl fmt::Display for RankRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// User-controlled filter inputs. `rank_range` is kept raw and parsed on every
/// pipeline run so malformed input can be rejected without losing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub language: Language,
    pub search_text: String,
    pub rank_range: String,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            language: Language::All,
            search_text: String::new(),
            rank_range: DEFAULT_RANK_RANGE.to_owned(),
        }
    }
}

impl SelectionState {
    pub fn parsed_range(&self) -> Result<RankRange, RangeError> {
        self.rank_range.parse()
    }
}

/// Restored rank windows must be one the selector can show.
pub fn known_rank_window(raw: &str) -> Option<&'static str> {
    RANK_WINDOWS.iter().copied().find(|window| *window == raw)
}
