//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <nav class="header-nav">
                <a href="#" class="brand">
                    <span class="brand-title">"Estimating Auto Repair Using CV"</span>
                </a>
            </nav>
        </header>
    }
}
