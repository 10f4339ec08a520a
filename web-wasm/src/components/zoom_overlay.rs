//! 拡大表示オーバーレイ
//!
//! 背景クリックまたは×ボタンで閉じる。画像部分のクリックでは閉じない。

use leptos::ev;
use leptos::prelude::*;
use repair_vision_common::ZoomState;

#[component]
pub fn ZoomOverlay(zoom: RwSignal<ZoomState>) -> impl IntoView {
    let close = move || zoom.update(|z| z.close());

    move || {
        zoom.with(|z| z.image().map(str::to_string)).map(|src| {
            view! {
                <div class="zoom-backdrop" on:click=move |_| close()>
                    <div
                        class="zoom-content"
                        on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                    >
                        <img src=src alt="Zoomed Image" class="zoom-image" />
                        <button type="button" class="zoom-close" on:click=move |_| close()>
                            "X"
                        </button>
                    </div>
                </div>
            }
        })
    }
}
