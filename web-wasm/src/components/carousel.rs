//! カルーセルコンポーネント
//!
//! 1枚ずつ表示し、前後ボタンで循環する。プレビューと解析結果の両方で使う。
//! 列が差し替えられたら親側で作り直すため、カーソルは常に先頭から始まる。

use leptos::prelude::*;
use repair_vision_common::CyclicCursor;

#[component]
pub fn Carousel<T, R, V, FS>(
    items: Vec<T>,
    render: R,
    #[prop(into)] empty_text: String,
    on_select: FS,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    R: Fn(&T, usize) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
    FS: Fn(T) + 'static,
{
    if items.is_empty() {
        return view! { <p class="text-muted carousel-empty">{empty_text}</p> }.into_any();
    }

    let cursor = RwSignal::new(CyclicCursor::new(items.len()));
    let items = StoredValue::new(items);

    let current_item = move || {
        cursor
            .get_untracked()
            .current()
            .and_then(|index| items.with_value(|v| v.get(index).cloned()))
    };

    view! {
        <div class="carousel">
            <div
                class="carousel-frame"
                on:click=move |_| {
                    if let Some(item) = current_item() {
                        on_select(item);
                    }
                }
            >
                {move || {
                    cursor
                        .get()
                        .current()
                        .and_then(|index| {
                            items.with_value(|v| v.get(index).map(|item| render(item, index)))
                        })
                }}
            </div>
            <button
                type="button"
                class="carousel-nav carousel-prev"
                on:click=move |_| cursor.update(|c| c.prev())
            >
                "◀"
            </button>
            <button
                type="button"
                class="carousel-nav carousel-next"
                on:click=move |_| cursor.update(|c| c.next())
            >
                "▶"
            </button>
        </div>
    }
    .into_any()
}
