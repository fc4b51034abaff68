use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::errors::SnapshotError;
use crate::selection::Language;

pub const PROFILE_URL_BASE: &str = "https://www.twitch.tv/";
pub const PREVIEW_URL_BASE: &str = "https://static-cdn.jtvnw.net/previews-ttv/live_user_";

/// One live stream entry from the snapshot document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamRecord {
    pub user_login: String,
    pub user_name: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub viewer_count: u64,
}

impl StreamRecord {
    pub fn profile_url(&self) -> String {
        format!("{PROFILE_URL_BASE}{}", self.user_login)
    }

    pub fn preview_url(&self) -> String {
        format!("{PREVIEW_URL_BASE}{}.jpg", self.user_login)
    }

    /// Tile label, e.g. `#3 Alice (1200)`.
    pub fn label(&self, rank: usize) -> String {
        format!("#{rank} {} ({})", self.user_name, self.viewer_count)
    }

    /// Hover text, e.g. `Alice｜Chess`.
    pub fn tooltip(&self) -> String {
        format!("{}｜{}", self.user_name, self.game_name)
    }

    pub fn aria_label(&self) -> String {
        format!("{}（{} viewers）", self.user_name, self.viewer_count)
    }
}

/// Stream records grouped by language code, loaded once per page session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    languages: BTreeMap<String, Vec<StreamRecord>>,
}

impl Snapshot {
    pub fn new(languages: BTreeMap<String, Vec<StreamRecord>>) -> Self {
        Self { languages }
    }

    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(raw).map_err(|e| SnapshotError::Parse(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Language codes in ascending order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn has_language(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }

    pub fn record_count(&self) -> usize {
        self.languages.values().map(Vec::len).sum()
    }

    /// Records for a language selection. `All` concatenates every language in
    /// ascending code order; an unknown code yields nothing.
    pub fn records_for<'a>(
        &'a self,
        language: &'a Language,
    ) -> Box<dyn Iterator<Item = &'a StreamRecord> + 'a> {
        match language {
            Language::All => Box::new(self.languages.values().flatten()),
            Language::Code(code) => match self.languages.get(code) {
                Some(records) => Box::new(records.iter()),
                None => Box::new(std::iter::empty()),
            },
        }
    }

    /// Unique game names for a language, case-sensitive and ascending.
    pub fn game_names(&self, language: &Language) -> Vec<String> {
        self.records_for(language)
            .map(|record| record.game_name.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}
