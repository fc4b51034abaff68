use leptos::prelude::*;

use streamtree_shared::treemap::{self, TileRect};
use streamtree_shared::{StreamRecord, SurfaceSize};

use crate::resize;
use crate::state::DashboardHandle;

/// Gap between tiles and around the surface edge, in pixels.
pub(crate) const TILE_PADDING: f64 = 2.0;
/// Only the top ranks get a live preview image.
pub(crate) const PREVIEW_RANK_LIMIT: usize = 500;
/// Height used when the surface element reports none.
pub(crate) const FALLBACK_SURFACE_HEIGHT: u32 = 500;

/// One positioned stream tile, ready to be turned into DOM.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Tile {
    pub rank: usize,
    pub rect: TileRect,
    pub href: String,
    pub preview_src: Option<String>,
    pub alt: String,
    pub label: String,
    pub title: String,
    pub aria_label: String,
}

/// What the render surface currently shows.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SurfaceFrame {
    Loading,
    Placeholder,
    Tiles(Vec<Tile>),
}

/// Lay out a rank window. `rank_offset` is the global rank of `records[0]`.
pub(crate) fn build_tiles(
    records: &[StreamRecord],
    rank_offset: usize,
    surface: SurfaceSize,
) -> Vec<Tile> {
    let weights: Vec<f64> = records.iter().map(|r| r.viewer_count as f64).collect();
    let rects = treemap::layout(
        &weights,
        surface.width as f64,
        surface.height as f64,
        TILE_PADDING,
    );

    records
        .iter()
        .zip(rects)
        .enumerate()
        .map(|(i, (record, rect))| {
            let rank = i + rank_offset;
            Tile {
                rank,
                rect,
                href: record.profile_url(),
                preview_src: (rank <= PREVIEW_RANK_LIMIT).then(|| record.preview_url()),
                alt: record.user_name.clone(),
                label: record.label(rank),
                title: record.tooltip(),
                aria_label: record.aria_label(),
            }
        })
        .collect()
}

/// Measure a surface element, substituting the fallback height for zero.
pub(crate) fn measure(client_width: i32, client_height: i32) -> SurfaceSize {
    let width = client_width.max(0) as u32;
    let height = if client_height > 0 {
        client_height as u32
    } else {
        FALLBACK_SURFACE_HEIGHT
    };
    SurfaceSize::new(width, height)
}

fn px(v: f64) -> String {
    format!("{v}px")
}

/// Render surface: absolutely positioned tiles, or a status line.
#[component]
pub fn TreemapSurface() -> impl IntoView {
    let handle: DashboardHandle = expect_context();
    let frame = handle.frame;
    let surface_ref = handle.surface;

    // Re-run the pipeline once the surface stops changing size.
    Effect::new(move || {
        let Some(el) = surface_ref.get() else {
            return;
        };
        resize::observe(&el, move || handle.refresh());
        on_cleanup(|| {
            resize::disconnect();
        });
    });

    view! {
        <div
            id="treemap"
            node_ref=surface_ref
            style="position: relative; flex: 1; min-height: 0; overflow: hidden; background: #0e0e10;"
        >
            {move || match frame.get() {
                SurfaceFrame::Loading => view! {
                    <p class="treemap-status" style="margin: 24px; color: #adadb8;">"Loading..."</p>
                }
                .into_any(),
                SurfaceFrame::Placeholder => view! {
                    <p class="treemap-status" style="margin: 24px; color: #adadb8;">"No data available"</p>
                }
                .into_any(),
                SurfaceFrame::Tiles(tiles) => tiles
                    .into_iter()
                    .map(|tile| view! { <TileView tile=tile /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn TileView(tile: Tile) -> impl IntoView {
    let Tile {
        rect,
        href,
        preview_src,
        alt,
        label,
        title,
        aria_label,
        ..
    } = tile;

    view! {
        <a
            class="tile"
            href=href
            target="_blank"
            rel="noopener noreferrer"
            aria-label=aria_label
            style:left=px(rect.x0)
            style:top=px(rect.y0)
            style:width=px(rect.width())
            style:height=px(rect.height())
            style="position: absolute; overflow: hidden; display: block; background: #18181b; border-radius: 2px; color: #efeff1; text-decoration: none;"
        >
            {preview_src.map(|src| view! {
                <img
                    loading="lazy"
                    src=src
                    alt=alt
                    style="width: 100%; height: 100%; object-fit: cover; display: block;"
                />
            })}
            <div
                class="label"
                title=title
                style="position: absolute; left: 0; right: 0; bottom: 0; padding: 2px 4px; background: rgba(0,0,0,0.6); font-size: 0.75rem; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; pointer-events: none;"
            >
                {label}
            </div>
        </a>
    }
}
