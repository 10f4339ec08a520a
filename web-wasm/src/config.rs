//! 接続先の解決
//!
//! 優先順位:
//! 1. index.html の `<meta name="repair-vision-service" content="...">`
//! 2. ビルド時の環境変数 `REPAIR_VISION_SERVICE_URL`
//! 3. 既定値

use repair_vision_common::ServiceConfig;

const META_NAME: &str = "repair-vision-service";

/// ページとビルド設定から接続先を決める
pub fn resolve() -> ServiceConfig {
    first_valid([
        ("meta tag", meta_content()),
        (
            "REPAIR_VISION_SERVICE_URL",
            option_env!("REPAIR_VISION_SERVICE_URL").map(str::to_string),
        ),
    ])
}

/// 最初に妥当な候補を採用する。不正な値は警告して読み飛ばす。
fn first_valid<'a>(candidates: impl IntoIterator<Item = (&'a str, Option<String>)>) -> ServiceConfig {
    for (source, value) in candidates {
        let Some(value) = value else {
            continue;
        };
        match ServiceConfig::from_base_url(&value) {
            Ok(config) => {
                log::info!("detection service from {}: {}", source, config.endpoint());
                return config;
            }
            Err(e) => log::warn!("ignoring {}: {}", source, e),
        }
    }

    let config = ServiceConfig::default();
    log::info!("detection service (default): {}", config.endpoint());
    config
}

fn meta_content() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", META_NAME);
    let element = document.query_selector(&selector).ok()??;
    element
        .get_attribute("content")
        .filter(|value| !value.trim().is_empty())
}
