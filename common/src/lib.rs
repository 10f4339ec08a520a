//! Repair Vision Common Library
//!
//! 欠陥検出UIの状態管理とレスポンス検証。ブラウザAPIには依存しない。

pub mod config;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod parser;
pub mod service;
pub mod types;
pub mod upload;
pub mod zoom;

pub use config::ServiceConfig;
pub use controller::SubmissionController;
pub use cursor::CyclicCursor;
pub use error::{Error, Result};
pub use parser::parse_detection_response;
pub use service::{DetectionService, Settlement, Submission, SubmissionId};
pub use types::{
    DefectRecord, DetectionReport, ProcessedImage, ServiceResponse, SubmissionStatus,
    FAILURE_MESSAGE,
};
pub use upload::{upload_manifest, ImageHandle, UploadPart, ACCEPT_ATTRIBUTE, FILES_FIELD};
pub use zoom::ZoomState;
