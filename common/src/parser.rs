//! 検出サービスのレスポンスパーサー
//!
//! 2xxのレスポンス本文を検証し、DetectionReportへ変換する。
//! 必須フィールドの欠落や不正なBase64はここでエラーにする。

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{DefectRecord, DetectionReport, ProcessedImage};

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G'];

#[derive(Deserialize)]
struct WireReport {
    total_repair_cost: f64,
    total_defects: f64,
    defects: Vec<DefectRecord>,
    image_details: Vec<WireImage>,
}

#[derive(Deserialize)]
struct WireImage {
    processed_image_base64: String,
}

/// レスポンス本文をパース
///
/// # Arguments
/// * `body` - 2xxレスポンスの本文（JSON）
///
/// # Returns
/// * `Ok(DetectionReport)` - 検証済みレポート
/// * `Err` - JSONが不正、必須フィールド欠落、画像データ不正
///
/// # Examples
/// ```
/// use repair_vision_common::parse_detection_response;
///
/// let body = r#"{"total_repair_cost": 0, "total_defects": 0, "defects": [], "image_details": []}"#;
/// let report = parse_detection_response(body).unwrap();
/// assert!(report.defects.is_empty());
/// ```
pub fn parse_detection_response(body: &str) -> Result<DetectionReport> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(Error::MalformedResponse("JSON object expected".into()));
    }

    let wire: WireReport = serde_json::from_value(value)
        .map_err(|e| Error::MalformedResponse(e.to_string()))?;

    let image_details = wire
        .image_details
        .into_iter()
        .enumerate()
        .map(|(index, image)| validate_image(index, image.processed_image_base64))
        .collect::<Result<Vec<_>>>()?;

    let report = DetectionReport {
        total_repair_cost: wire.total_repair_cost,
        total_defects: wire.total_defects,
        defects: wire.defects,
        image_details,
    };
    warn_inconsistencies(&report);
    Ok(report)
}

fn validate_image(index: usize, encoded: String) -> Result<ProcessedImage> {
    // data URLで返されても受け付ける
    let encoded = match encoded.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data.to_string(),
        _ => encoded,
    };

    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| Error::InvalidImage {
            index,
            reason: e.to_string(),
        })?;

    if bytes.is_empty() {
        return Err(Error::InvalidImage {
            index,
            reason: "empty image data".into(),
        });
    }

    Ok(ProcessedImage {
        encoded: encoded.trim().to_string(),
        mime_type: sniff_mime_type(&bytes),
    })
}

/// 先頭バイトからMIMEタイプを判定（不明ならJPEG扱い）
pub fn sniff_mime_type(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(PNG_SIGNATURE) {
        "image/png"
    } else {
        "image/jpeg"
    }
}

fn warn_inconsistencies(report: &DetectionReport) {
    if report.total_defects != report.defects.len() as f64 {
        log::warn!(
            "total_defects={} but {} defect rows received",
            report.total_defects,
            report.defects.len()
        );
    }

    let image_count = report.image_details.len();
    for defect in &report.defects {
        let index = defect.image_index;
        if index.fract() != 0.0 || index < 0.0 || index >= image_count as f64 {
            log::warn!(
                "defect '{}' on '{}' references image {} of {}",
                defect.defect_type,
                defect.part,
                defect.image_index,
                image_count
            );
        }
    }
}
