//! 送信前の選択画像プレビュー

use leptos::prelude::*;

use crate::components::carousel::Carousel;
use crate::selected_image::PreviewItem;

#[component]
pub fn PreviewImages(items: Vec<PreviewItem>) -> impl IntoView {
    view! {
        <div class="panel preview-panel">
            <h3>"Preview Images"</h3>
            <Carousel
                items=items
                render=|item: &PreviewItem, _: usize| {
                    view! { <img class="carousel-image" src=item.url.clone() alt=item.alt().to_string() /> }
                }
                empty_text="No images to preview"
                on_select=|_: PreviewItem| {}
            />
        </div>
    }
}
