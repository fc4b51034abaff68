use streamtree_shared::{Snapshot, SnapshotError};

/// Relative path of the snapshot document, next to `index.html`.
pub const SNAPSHOT_PATH: &str = "data.json";

/// Fetch and decode the stream snapshot.
pub async fn fetch_snapshot() -> Result<Snapshot, SnapshotError> {
    let resp = gloo_net::http::Request::get(SNAPSHOT_PATH)
        .send()
        .await
        .map_err(|e| SnapshotError::Fetch(e.to_string()))?;

    if !resp.ok() {
        return Err(SnapshotError::Status(resp.status()));
    }

    resp.json::<Snapshot>()
        .await
        .map_err(|e| SnapshotError::Parse(e.to_string()))
}

/// Load the snapshot once at startup. Any failure is logged and yields an
/// empty snapshot so the dashboard shows its "no data" states.
pub async fn load_snapshot() -> Snapshot {
    match fetch_snapshot().await {
        Ok(snapshot) => {
            web_sys::console::info_1(
                &format!(
                    "Loaded snapshot: {} languages, {} streams",
                    snapshot.languages().count(),
                    snapshot.record_count()
                )
                .into(),
            );
            snapshot
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("Snapshot load failed: {e}").into());
            Snapshot::default()
        }
    }
}
