//! アップロードフォームコンポーネント

use leptos::ev;
use leptos::prelude::*;

use crate::components::file_selector::FileSelector;
use crate::selected_image::SelectedImage;

#[component]
pub fn UploadForm<FS, FU>(
    is_uploading: Signal<bool>,
    on_files_selected: FS,
    on_submit: FU,
) -> impl IntoView
where
    FS: Fn(Vec<SelectedImage>) + 'static,
    FU: Fn(()) + 'static,
{
    view! {
        <form
            class="upload-form"
            on:submit=move |ev: ev::SubmitEvent| {
                ev.prevent_default();
                on_submit(());
            }
        >
            <div class="upload-row">
                <FileSelector on_files_selected=on_files_selected />
                <button
                    type="submit"
                    class="btn btn-primary"
                    class:uploading=move || is_uploading.get()
                    disabled=move || is_uploading.get()
                >
                    {move || if is_uploading.get() { "Uploading..." } else { "Upload" }}
                </button>
            </div>
        </form>
    }
}
