//! ファイル選択コンポーネント

use leptos::ev;
use leptos::prelude::*;
use repair_vision_common::ACCEPT_ATTRIBUTE;
use web_sys::HtmlInputElement;

use crate::selected_image::{collect_files, SelectedImage};

/// PNG/JPEGの複数選択。選択のたびに一覧全体を差し替える。
#[component]
pub fn FileSelector<F>(on_files_selected: F) -> impl IntoView
where
    F: Fn(Vec<SelectedImage>) + 'static,
{
    let on_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            on_files_selected(collect_files(&list));
        }
    };

    view! {
        <input
            type="file"
            class="file-selector"
            accept=ACCEPT_ATTRIBUTE
            multiple=true
            on:change=on_change
        />
    }
}
