pub mod dashboard;
pub mod errors;
pub mod filter;
pub mod prefs;
pub mod selection;
pub mod stream;
pub mod treemap;

pub use dashboard::{Dashboard, GameSuggestions, NO_DATA_LABEL};
pub use errors::{RangeError, SnapshotError};
pub use filter::{FilterOutcome, RenderCache, SurfaceSize, compute_visible, plan_render};
pub use prefs::{KeyValueStore, MemoryStore, PrefKey, Preferences};
pub use selection::{Language, RANK_WINDOWS, RankRange, SelectionState};
pub use stream::{Snapshot, StreamRecord};
pub use treemap::TileRect;
