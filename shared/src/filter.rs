use std::cmp::Reverse;

use crate::errors::RangeError;
use crate::selection::SelectionState;
use crate::stream::{Snapshot, StreamRecord};

/// Pixel size of the render surface tiles are laid out for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Fields that decide whether a drawn tile is still accurate.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RenderKey {
    user_login: String,
    viewer_count: u64,
    game_name: String,
}

impl From<&StreamRecord> for RenderKey {
    fn from(record: &StreamRecord) -> Self {
        Self {
            user_login: record.user_login.clone(),
            viewer_count: record.viewer_count,
            game_name: record.game_name.clone(),
        }
    }
}

/// Remembers the last drawn slice so identical re-runs skip rendering.
/// Starts empty, so the very first run always draws (even the placeholder).
#[derive(Debug, Clone, Default)]
pub struct RenderCache {
    last: Option<Vec<RenderKey>>,
}

impl RenderCache {
    /// Same length and the same `(login, viewers, game)` at every position.
    pub fn is_unchanged(&self, records: &[StreamRecord]) -> bool {
        let Some(last) = &self.last else {
            return false;
        };
        last.len() == records.len()
            && last
                .iter()
                .zip(records)
                .all(|(key, record)| *key == RenderKey::from(record))
    }

    pub fn remember(&mut self, records: &[StreamRecord]) {
        self.last = Some(records.iter().map(RenderKey::from).collect());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutcome {
    /// Same frame as last time; leave the surface alone.
    Unchanged,
    /// Nothing matched; show the "no data" placeholder.
    Placeholder,
    /// Draw these records; `rank_offset` is the global rank of the first one.
    Render {
        records: Vec<StreamRecord>,
        rank_offset: usize,
    },
}

/// Sorted, filtered rank window for the current selection.
///
/// Records are ordered by viewer count, highest first. The sort is stable, so
/// equal counts keep snapshot order (languages ascending, then file order).
pub fn compute_visible(
    snapshot: &Snapshot,
    selection: &SelectionState,
) -> Result<Vec<StreamRecord>, RangeError> {
    let range = selection.parsed_range()?;

    let mut list: Vec<&StreamRecord> = snapshot.records_for(&selection.language).collect();
    list.sort_by_key(|record| Reverse(record.viewer_count));

    let needle = selection.search_text.trim().to_lowercase();
    if !needle.is_empty() {
        list.retain(|record| record.game_name.to_lowercase().contains(&needle));
    }

    let (lo, hi) = range.bounds(list.len());
    Ok(list[lo..hi].iter().map(|record| (*record).clone()).collect())
}

/// Run the pipeline and decide what the surface should do.
pub fn plan_render(
    snapshot: &Snapshot,
    selection: &SelectionState,
    cache: &mut RenderCache,
) -> Result<FilterOutcome, RangeError> {
    let range = selection.parsed_range()?;
    let records = compute_visible(snapshot, selection)?;

    if cache.is_unchanged(&records) {
        return Ok(FilterOutcome::Unchanged);
    }
    cache.remember(&records);

    if records.is_empty() {
        return Ok(FilterOutcome::Placeholder);
    }
    Ok(FilterOutcome::Render {
        records,
        rank_offset: range.start,
    })
}
