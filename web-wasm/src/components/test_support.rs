//! ブラウザテスト用のマウント補助

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FilePropertyBag, HtmlElement};

use crate::selected_image::SelectedImage;

/// bodyに新しいdivを追加してビューをマウントする
pub fn mount<F, N>(f: F) -> HtmlElement
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let document = web_sys::window().unwrap().document().unwrap();
    let container: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&container).unwrap();
    std::mem::forget(leptos::mount::mount_to(container.clone(), f));
    container
}

pub fn click(container: &HtmlElement, selector: &str) {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("{} not found", selector))
        .unchecked_into::<HtmlElement>()
        .click();
}

pub fn query_all(container: &HtmlElement, selector: &str) -> u32 {
    container.query_selector_all(selector).unwrap().length()
}

pub fn text_of(container: &HtmlElement, selector: &str) -> String {
    container
        .query_selector(selector)
        .unwrap()
        .and_then(|e| e.text_content())
        .unwrap_or_default()
}

pub fn attr_of(container: &HtmlElement, selector: &str, name: &str) -> String {
    container
        .query_selector(selector)
        .unwrap()
        .and_then(|e| e.get_attribute(name))
        .unwrap_or_default()
}

/// 中身が数バイトのJPEGとして選択されたファイルを作る
pub fn image_file(name: &str) -> SelectedImage {
    let parts = js_sys::Array::of1(&"\u{ff}\u{d8}\u{ff}".into());
    let options = FilePropertyBag::new();
    options.set_type("image/jpeg");
    let file = File::new_with_str_sequence_and_options(&parts, name, &options).unwrap();
    SelectedImage::from_file(file).unwrap()
}

/// 保留中のエフェクトが描画し終わるまで待つ
pub async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}
