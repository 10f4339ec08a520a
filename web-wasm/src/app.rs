//! メインアプリケーションコンポーネント
//!
//! 状態は `SubmissionController` 1つにまとめ、表示側は
//! そこから必要な部分だけをMemoで取り出す。

use leptos::prelude::*;
use repair_vision_common::{SubmissionController, ZoomState};
use web_sys::AbortController;

use crate::api::detect::FetchDetectionService;
use crate::components::{
    footer::Footer,
    header::Header,
    results_panel::ResultsPanel,
    upload_form::UploadForm,
    zoom_overlay::ZoomOverlay,
};
use crate::config;
use crate::selected_image::SelectedImage;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let endpoint = config::resolve().endpoint();

    // アプリケーション状態
    let controller = RwSignal::new_local(SubmissionController::<SelectedImage>::new());
    let zoom = RwSignal::new(ZoomState::default());
    let in_flight = StoredValue::new_local(None::<AbortController>);

    let status = Memo::new(move |_| controller.with(|c| c.status()));
    let is_uploading = Signal::derive(move || status.get().is_in_flight());

    // ファイル選択ハンドラ
    let on_files_selected = move |files: Vec<SelectedImage>| {
        controller.update(|c| {
            for old in c.files() {
                old.release();
            }
            c.select_files(files);
        });
    };

    // 送信ハンドラ
    let on_submit = move |_: ()| {
        let Some(submission) = controller.try_update(|c| c.begin_submit()) else {
            return;
        };

        // 送信中のリクエストがあれば中断する
        let abort = match AbortController::new() {
            Ok(abort) => Some(abort),
            Err(e) => {
                log::warn!("AbortController unavailable: {:?}", e);
                None
            }
        };
        in_flight.update_value(|slot| {
            if let Some(previous) = slot.take() {
                previous.abort();
            }
            *slot = abort.clone();
        });

        let service = FetchDetectionService::new(endpoint.clone(), abort.map(|a| a.signal()));
        wasm_bindgen_futures::spawn_local(async move {
            let settlement = submission.dispatch(&service).await;
            controller.update(|c| {
                c.settle(settlement);
            });
        });
    };

    view! {
        <Header />
        <main class="container" data-status=move || status.get().as_str()>
            <UploadForm
                is_uploading=is_uploading
                on_files_selected=on_files_selected
                on_submit=on_submit
            />

            <ResultsPanel controller=controller zoom=zoom />
        </main>
        <Footer />

        <ZoomOverlay zoom=zoom />
    }
}
