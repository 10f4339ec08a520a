//! 欠陥検出サービスへの送信（fetch + FormData）

use repair_vision_common::{upload_manifest, DetectionService, Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, FormData, Request, RequestInit, RequestMode, Response};

use crate::selected_image::SelectedImage;

/// fetchによる検出サービス呼び出し
pub struct FetchDetectionService {
    endpoint: String,
    abort: Option<AbortSignal>,
}

impl FetchDetectionService {
    /// # Arguments
    /// * `endpoint` - POST先のURL
    /// * `abort` - 後続の送信で中断するためのシグナル
    pub fn new(endpoint: String, abort: Option<AbortSignal>) -> Self {
        Self { endpoint, abort }
    }
}

impl DetectionService<SelectedImage> for FetchDetectionService {
    async fn detect(&self, files: &[SelectedImage]) -> Result<String> {
        let form = build_form(files)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&form);
        opts.set_signal(self.abort.as_ref());

        // Content-Type（boundary付き）はブラウザに任せる
        let request = Request::new_with_str_and_init(&self.endpoint, &opts).map_err(js_error)?;

        let window = web_sys::window().ok_or_else(|| Error::Transport("window not available".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        if !resp.ok() {
            return Err(Error::Status(resp.status()));
        }

        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        text.as_string()
            .ok_or_else(|| Error::Transport("response body is not text".into()))
    }
}

/// 1ファイル1パート、全パート同じフィールド名でFormDataを作る
fn build_form(files: &[SelectedImage]) -> Result<FormData> {
    let form = FormData::new().map_err(js_error)?;
    for (image, part) in files.iter().zip(upload_manifest(files)) {
        form.append_with_blob_and_filename(part.field, image.file(), &part.file_name)
            .map_err(js_error)?;
    }
    Ok(form)
}

/// JsValueのエラーを通信エラーに変換
pub fn js_error(value: JsValue) -> Error {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Transport(message)
}
