//! フッターコンポーネント

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="text-muted">
                "Images are analyzed by the remote detection service and are not stored by this page."
            </p>
        </footer>
    }
}
