use leptos::prelude::*;
use wasm_bindgen::JsCast;

use streamtree_shared::{GameSuggestions, RANK_WINDOWS};

use crate::state::DashboardHandle;

const GAME_LIST_ID: &str = "game-list";

const FIELD_STYLE: &str = "background: #1f1f23; border: 1px solid #3a3a3d; border-radius: 4px; color: #efeff1; font-family: 'Inter', system-ui, sans-serif; font-size: 0.85rem; padding: 6px 8px; outline: none;";

fn select_value(e: &leptos::ev::Event) -> Option<String> {
    let target = e.target()?;
    let select = target.dyn_into::<web_sys::HtmlSelectElement>().ok()?;
    Some(select.value())
}

/// Header bar: search, language, rank window and reset.
#[component]
pub fn Controls() -> impl IntoView {
    view! {
        <header style="display: flex; flex-wrap: wrap; align-items: center; gap: 8px; padding: 10px 16px; background: #18181b; border-bottom: 1px solid #2f2f35;">
            <SearchBox />
            <LanguageSelect />
            <RankSelect />
            <ResetButton />
        </header>
    }
}

#[component]
fn SearchBox() -> impl IntoView {
    let handle: DashboardHandle = expect_context();
    let search_box = handle.search_box;
    let suggestions = handle.suggestions;

    let on_input = move |e: leptos::ev::Event| {
        let Some(input) = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        handle.input_search(input.value());
    };

    view! {
        <input
            id="game-search"
            type="search"
            placeholder="Filter by game..."
            aria-label="Filter by game"
            autocomplete="off"
            list=GAME_LIST_ID
            style=format!("{FIELD_STYLE} min-width: 220px;")
            prop:value=move || search_box.get()
            on:input=on_input
        />
        <datalist id=GAME_LIST_ID>
            {move || match suggestions.get() {
                GameSuggestions::Games(games) => games
                    .into_iter()
                    .map(|game| view! { <option value=game></option> })
                    .collect_view()
                    .into_any(),
                GameSuggestions::NoData => view! {
                    <option value=streamtree_shared::NO_DATA_LABEL disabled=true></option>
                }
                .into_any(),
            }}
        </datalist>
    }
}

#[component]
fn LanguageSelect() -> impl IntoView {
    let handle: DashboardHandle = expect_context();
    let language = handle.language;
    let options = handle.language_options;

    let on_change = move |e: leptos::ev::Event| {
        if let Some(value) = select_value(&e) {
            handle.change_language(value);
        }
    };

    view! {
        <select
            id="language-select"
            aria-label="Language"
            style=FIELD_STYLE
            prop:value=move || language.get()
            on:change=on_change
        >
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|code| {
                        let value = code.clone();
                        let current = code.clone();
                        // Seeds the choice while options are (re)built; the
                        // select's value property tracks later changes.
                        view! {
                            <option
                                value=value
                                selected=move || language.get() == current
                            >
                                {code}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </select>
    }
}

#[component]
fn RankSelect() -> impl IntoView {
    let handle: DashboardHandle = expect_context();
    let rank_range = handle.rank_range;

    let on_change = move |e: leptos::ev::Event| {
        if let Some(value) = select_value(&e) {
            handle.change_rank_range(value);
        }
    };

    view! {
        <select
            id="rank-range"
            aria-label="Rank range"
            style=FIELD_STYLE
            prop:value=move || rank_range.get()
            on:change=on_change
        >
            {RANK_WINDOWS
                .iter()
                .map(|&window| {
                    view! {
                        <option value=window selected=move || rank_range.get() == window>
                            {window}
                        </option>
                    }
                })
                .collect::<Vec<_>>()}
        </select>
    }
}

#[component]
fn ResetButton() -> impl IntoView {
    let handle: DashboardHandle = expect_context();

    view! {
        <button
            id="reset"
            on:click=move |_| handle.reset()
            style="background: #1f1f23; border: 1px solid #3a3a3d; border-radius: 4px; color: #adadb8; font-family: 'Inter', system-ui, sans-serif; font-size: 0.8rem; padding: 6px 12px; cursor: pointer;"
        >
            "Reset"
        </button>
    }
}
