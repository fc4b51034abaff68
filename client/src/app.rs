use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::controls::Controls;
use crate::snapshot;
use crate::state::DashboardHandle;
use crate::surface::TreemapSurface;

fn remove_loading_shell() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(shell) = document.get_element_by_id("app-loading-shell") {
        shell.remove();
    }
}

#[component]
pub fn App() -> impl IntoView {
    let handle = DashboardHandle::new();
    provide_context(handle);

    // Load the snapshot once on mount. Failure still installs an empty
    // snapshot so the controls and placeholder come up.
    Effect::new(move || {
        spawn_local(async move {
            let snapshot = snapshot::load_snapshot().await;
            handle.install(snapshot);
            remove_loading_shell();
        });
    });

    view! {
        <div style="display: flex; flex-direction: column; height: 100vh; background: #0e0e10; color: #efeff1; font-family: 'Inter', system-ui, sans-serif;">
            <Controls />
            <TreemapSurface />
        </div>
    }
}
