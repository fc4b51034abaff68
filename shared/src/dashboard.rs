use crate::errors::RangeError;
use crate::filter::{FilterOutcome, RenderCache, plan_render};
use crate::prefs::{KeyValueStore, PrefKey, Preferences};
use crate::selection::{
    ALL_LANGUAGES, DEFAULT_RANK_RANGE, Language, SelectionState, known_rank_window,
};
use crate::stream::Snapshot;

pub const NO_DATA_LABEL: &str = "No data";

/// Autocomplete entries for the game search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSuggestions {
    Games(Vec<String>),
    /// The active language has no records; show one inert entry.
    NoData,
}

impl GameSuggestions {
    pub fn entries(&self) -> Vec<String> {
        match self {
            Self::Games(games) => games.clone(),
            Self::NoData => vec![NO_DATA_LABEL.to_owned()],
        }
    }
}

/// Everything the dashboard controls mutate: the snapshot, the current
/// selection, persisted preferences and the last rendered frame.
///
/// Every mutating call persists its preference; callers follow it with
/// [`Dashboard::refresh`] to re-derive the surface.
#[derive(Debug)]
pub struct Dashboard<S> {
    snapshot: Snapshot,
    selection: SelectionState,
    prefs: Preferences<S>,
    cache: RenderCache,
}

impl<S: KeyValueStore> Dashboard<S> {
    /// Build from a freshly loaded snapshot, restoring saved preferences.
    /// A saved language not in the snapshot and a saved rank window the
    /// selector cannot show both fall back to their defaults.
    pub fn restore(snapshot: Snapshot, store: S) -> Self {
        let prefs = Preferences::new(store);
        let language = Language::resolve(&prefs.load(PrefKey::Language, ALL_LANGUAGES), &snapshot);
        let search_text = prefs.load(PrefKey::GameSearch, "").trim().to_owned();
        let saved_range = prefs.load(PrefKey::RankRange, DEFAULT_RANK_RANGE);
        let rank_range = known_rank_window(&saved_range)
            .unwrap_or(DEFAULT_RANK_RANGE)
            .to_owned();

        Self {
            snapshot,
            selection: SelectionState {
                language,
                search_text,
                rank_range,
            },
            prefs,
            cache: RenderCache::default(),
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn preferences(&self) -> &Preferences<S> {
        &self.prefs
    }

    /// `all` followed by every snapshot language.
    pub fn language_options(&self) -> Vec<String> {
        std::iter::once(ALL_LANGUAGES)
            .chain(self.snapshot.languages())
            .map(str::to_owned)
            .collect()
    }

    pub fn suggestions(&self) -> GameSuggestions {
        let games = self.snapshot.game_names(&self.selection.language);
        if games.is_empty() {
            GameSuggestions::NoData
        } else {
            GameSuggestions::Games(games)
        }
    }

    pub fn change_language(&mut self, value: &str) {
        self.selection.language = Language::resolve(value, &self.snapshot);
        self.prefs
            .save(PrefKey::Language, self.selection.language.as_str());
    }

    pub fn input_search(&mut self, raw: &str) {
        let trimmed = raw.trim();
        self.prefs.save(PrefKey::GameSearch, trimmed);
        self.selection.search_text = trimmed.to_owned();
    }

    pub fn change_rank_range(&mut self, raw: &str) {
        self.prefs.save(PrefKey::RankRange, raw);
        self.selection.rank_range = raw.to_owned();
    }

    pub fn reset(&mut self) {
        self.prefs.clear_all();
        self.selection = SelectionState::default();
    }

    /// Re-run the filter pipeline against the current selection.
    pub fn refresh(&mut self) -> Result<FilterOutcome, RangeError> {
        plan_render(&self.snapshot, &self.selection, &mut self.cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryStore;
    use serde_json::json;

    fn snapshot() -> Snapshot {
        let raw = json!({
            "en": [
                { "user_login": "a", "user_name": "A", "game_name": "Chess", "viewer_count": 100 },
                { "user_login": "b", "user_name": "B", "game_name": "Chess", "viewer_count": 50 }
            ],
            "ja": [
                { "user_login": "c", "user_name": "C", "game_name": "Go", "viewer_count": 200 }
            ]
        });
        Snapshot::from_json(&raw.to_string()).expect("snapshot parses")
    }

    fn rendered_logins(outcome: FilterOutcome) -> Vec<String> {
        match outcome {
            FilterOutcome::Render { records, .. } => {
                records.into_iter().map(|r| r.user_login).collect()
            }
            other => panic!("expected a render, got {other:?}"),
        }
    }

    #[test]
    fn restores_saved_preferences() {
        let store = MemoryStore::new();
        store.set("currentLang", "en");
        store.set("gameSearch", "  chess ");
        store.set("rankRange", "21-40");

        let dashboard = Dashboard::restore(snapshot(), store);
        let selection = dashboard.selection();
        assert_eq!(selection.language, Language::Code("en".into()));
        assert_eq!(selection.search_text, "chess");
        assert_eq!(selection.rank_range, "21-40");
    }

    #[test]
    fn restore_discards_unknown_language_and_window() {
        let store = MemoryStore::new();
        store.set("currentLang", "fr");
        store.set("rankRange", "abc-10");

        let dashboard = Dashboard::restore(snapshot(), store);
        assert_eq!(dashboard.selection(), &SelectionState::default());
    }

    #[test]
    fn language_change_persists_and_rebuilds_suggestions() {
        let mut dashboard = Dashboard::restore(snapshot(), MemoryStore::new());
        assert_eq!(
            dashboard.suggestions(),
            GameSuggestions::Games(vec!["Chess".into(), "Go".into()])
        );

        dashboard.change_language("ja");
        assert_eq!(
            dashboard.preferences().load(PrefKey::Language, ""),
            "ja"
        );
        assert_eq!(
            dashboard.suggestions(),
            GameSuggestions::Games(vec!["Go".into()])
        );
        assert_eq!(rendered_logins(dashboard.refresh().expect("valid")), vec!["c"]);
    }

    #[test]
    fn search_and_range_drive_the_rendered_window() {
        let mut dashboard = Dashboard::restore(snapshot(), MemoryStore::new());
        dashboard.change_language("en");
        dashboard.input_search(" chess ");
        dashboard.change_rank_range("1-1");

        assert_eq!(
            dashboard.preferences().load(PrefKey::GameSearch, ""),
            "chess"
        );
        assert_eq!(rendered_logins(dashboard.refresh().expect("valid")), vec!["a"]);
    }

    #[test]
    fn invalid_range_keeps_previous_frame() {
        let mut dashboard = Dashboard::restore(snapshot(), MemoryStore::new());
        assert_eq!(
            rendered_logins(dashboard.refresh().expect("valid")),
            vec!["c", "a", "b"]
        );

        dashboard.change_rank_range("abc-10");
        assert!(dashboard.refresh().is_err());

        dashboard.change_rank_range("1-20");
        assert_eq!(
            dashboard.refresh().expect("valid"),
            FilterOutcome::Unchanged
        );
    }

    #[test]
    fn reset_clears_preferences_and_state() {
        let mut dashboard = Dashboard::restore(snapshot(), MemoryStore::new());
        dashboard.change_language("ja");
        dashboard.input_search("go");
        dashboard.change_rank_range("5-10");

        dashboard.reset();

        assert!(dashboard.preferences().store().is_empty());
        let selection = dashboard.selection();
        assert_eq!(selection.language, Language::All);
        assert_eq!(selection.search_text, "");
        assert_eq!(selection.rank_range, "1-20");
        assert_eq!(
            dashboard.suggestions(),
            GameSuggestions::Games(vec!["Chess".into(), "Go".into()])
        );
    }

    #[test]
    fn empty_snapshot_degrades_to_placeholders() {
        let mut dashboard = Dashboard::restore(Snapshot::default(), MemoryStore::new());
        assert_eq!(dashboard.language_options(), vec!["all"]);
        assert_eq!(dashboard.suggestions(), GameSuggestions::NoData);
        assert_eq!(dashboard.suggestions().entries(), vec!["No data"]);
        assert_eq!(
            dashboard.refresh().expect("valid"),
            FilterOutcome::Placeholder
        );
    }

    #[test]
    fn language_options_list_all_first() {
        let dashboard = Dashboard::restore(snapshot(), MemoryStore::new());
        assert_eq!(dashboard.language_options(), vec!["all", "en", "ja"]);
    }
}
