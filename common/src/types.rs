//! 検出サービスの型定義
//!
//! - DefectRecord: 欠陥1件（テーブルの1行）
//! - ProcessedImage: 注釈付き画像（検証済み）
//! - DetectionReport: 成功レスポンス全体
//! - ServiceResponse: 成功/失敗のタグ付き結果

use serde::{Deserialize, Serialize};

/// 送信失敗時にUIへ表示する固定メッセージ
pub const FAILURE_MESSAGE: &str = "Failed to detect defects.";

/// 検出された欠陥1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefectRecord {
    /// JSONの数値（`0` でも `0.0` でもよい）
    pub image_index: f64,
    pub part: String,
    pub defect_type: String,
    pub severity: String,
    pub repair_cost: f64,
}

/// 注釈付き画像（Base64検証済み）
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedImage {
    pub(crate) encoded: String,
    pub(crate) mime_type: &'static str,
}

impl ProcessedImage {
    /// `<img src>` にそのまま渡せるData URL
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.encoded)
    }
}

/// 成功レスポンス
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionReport {
    pub total_repair_cost: f64,
    pub total_defects: f64,
    pub defects: Vec<DefectRecord>,
    pub image_details: Vec<ProcessedImage>,
}

/// 直近の送信結果
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResponse {
    Success(DetectionReport),
    Failure { message: String },
}

impl ServiceResponse {
    pub fn failure() -> Self {
        ServiceResponse::Failure {
            message: FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn report(&self) -> Option<&DetectionReport> {
        match self {
            ServiceResponse::Success(report) => Some(report),
            ServiceResponse::Failure { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ServiceResponse::Success(_) => None,
            ServiceResponse::Failure { message } => Some(message),
        }
    }
}

/// 送信状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::InFlight => "in-flight",
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionStatus::InFlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> ProcessedImage {
        ProcessedImage {
            encoded: "iVBORw0KGgo=".to_string(),
            mime_type: "image/png",
        }
    }

    #[test]
    fn test_data_url() {
        assert_eq!(sample_image().data_url(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_defect_record_deserialize() {
        let json = r#"{
            "image_index": 1,
            "part": "front bumper",
            "defect_type": "dent",
            "severity": "moderate",
            "repair_cost": 250.5
        }"#;
        let record: DefectRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.image_index, 1.0);
        assert_eq!(record.part, "front bumper");
        assert_eq!(record.repair_cost, 250.5);
    }

    #[test]
    fn test_defect_record_missing_field_is_error() {
        let json = r#"{"image_index": 0, "part": "door"}"#;
        assert!(serde_json::from_str::<DefectRecord>(json).is_err());
    }

    #[test]
    fn test_service_response_accessors() {
        let failure = ServiceResponse::failure();
        assert_eq!(failure.error_message(), Some(FAILURE_MESSAGE));
        assert!(failure.report().is_none());

        let success = ServiceResponse::Success(DetectionReport {
            total_repair_cost: 0.0,
            total_defects: 0.0,
            defects: vec![],
            image_details: vec![sample_image()],
        });
        assert!(success.error_message().is_none());
        assert_eq!(success.report().map(|r| r.image_details.len()), Some(1));
    }

    #[test]
    fn test_status_default_is_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
        assert!(!SubmissionStatus::Idle.is_in_flight());
        assert!(SubmissionStatus::InFlight.is_in_flight());
        assert_eq!(SubmissionStatus::InFlight.as_str(), "in-flight");
    }
}
