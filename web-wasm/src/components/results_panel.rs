//! プレビューと解析結果の表示エリア
//!
//! カルーセルは自分の列が変わったときだけ作り直す。送信開始や
//! 破棄された決着ではコントローラーが通知しても位置を保つ。

use leptos::prelude::*;
use repair_vision_common::{SubmissionController, ZoomState};

use crate::components::{
    preview_images::PreviewImages, result_images::ResultImages, summary_view::SummaryView,
};
use crate::selected_image::{PreviewItem, SelectedImage};

#[component]
pub fn ResultsPanel(
    controller: RwSignal<SubmissionController<SelectedImage>, LocalStorage>,
    zoom: RwSignal<ZoomState>,
) -> impl IntoView {
    let previews = Memo::new(move |_| {
        controller.with(|c| c.files().iter().map(PreviewItem::from).collect::<Vec<_>>())
    });
    let response = Memo::new(move |_| controller.with(|c| c.response().cloned()));
    let report = Memo::new(move |_| response.with(|r| r.as_ref().and_then(|r| r.report().cloned())));

    view! {
        <div class="results-layout">
            <div class="results-column">
                {move || view! { <PreviewImages items=previews.get() /> }}

                {move || {
                    report
                        .get()
                        .map(|r| view! { <ResultImages images=r.image_details zoom=zoom /> })
                }}
            </div>

            <div class="results-column">
                <SummaryView response=response.into() />
            </div>
        </div>
    }
}
