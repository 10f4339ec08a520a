//! 解析結果画像のカルーセル（クリックで拡大）

use leptos::prelude::*;
use repair_vision_common::{ProcessedImage, ZoomState};

use crate::components::carousel::Carousel;

#[component]
pub fn ResultImages(images: Vec<ProcessedImage>, zoom: RwSignal<ZoomState>) -> impl IntoView {
    view! {
        <div class="panel result-panel">
            <h3>"Processed Images"</h3>
            <Carousel
                items=images
                render=|image: &ProcessedImage, index: usize| {
                    view! {
                        <img
                            class="carousel-image zoomable"
                            src=image.data_url()
                            alt=format!("Processed Image {}", index + 1)
                        />
                    }
                }
                empty_text="No processed images returned"
                on_select=move |image: ProcessedImage| zoom.update(|z| z.open(image.data_url()))
            />
        </div>
    }
}
