//! 送信コントローラー
//!
//! 選択ファイル・送信状態・直近レスポンスを1か所で持つ。

use crate::parser::parse_detection_response;
use crate::service::{Settlement, Submission, SubmissionId};
use crate::types::{ServiceResponse, SubmissionStatus};
use crate::upload::ImageHandle;

#[derive(Debug, Clone)]
pub struct SubmissionController<F> {
    files: Vec<F>,
    status: SubmissionStatus,
    response: Option<ServiceResponse>,
    next_id: u64,
    latest: Option<SubmissionId>,
}

impl<F> Default for SubmissionController<F> {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            status: SubmissionStatus::Idle,
            response: None,
            next_id: 1,
            latest: None,
        }
    }
}

impl<F: ImageHandle> SubmissionController<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 選択ファイルを差し替える（追加ではない）
    ///
    /// 直近のレスポンスは保持する。
    pub fn select_files(&mut self, files: Vec<F>) {
        log::debug!("{} file(s) selected", files.len());
        self.files = files;
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn response(&self) -> Option<&ServiceResponse> {
        self.response.as_ref()
    }

    /// 送信を開始する
    ///
    /// ファイル0件でも送信する。送信中に呼ばれた場合は新しい送信が優先され、
    /// 古い送信の決着は `settle` で破棄される。
    pub fn begin_submit(&mut self) -> Submission<F> {
        let id = SubmissionId(self.next_id);
        self.next_id += 1;

        if let Some(previous) = self.latest.filter(|_| self.status.is_in_flight()) {
            log::warn!(
                "submission #{} supersedes in-flight #{}",
                id.value(),
                previous.value()
            );
        }

        self.latest = Some(id);
        self.status = SubmissionStatus::InFlight;
        Submission::new(id, self.files.clone())
    }

    /// 送信の決着を反映する
    ///
    /// 最新の送信でなければ何もせず `false` を返す。
    pub fn settle(&mut self, settlement: Settlement) -> bool {
        if self.latest != Some(settlement.id) || !self.status.is_in_flight() {
            log::warn!(
                "dropping stale settlement for submission #{}",
                settlement.id.value()
            );
            return false;
        }

        let response = match settlement
            .outcome
            .and_then(|body| parse_detection_response(&body))
        {
            Ok(report) => {
                log::info!(
                    "submission #{}: {} defect(s), {} processed image(s)",
                    settlement.id.value(),
                    report.defects.len(),
                    report.image_details.len()
                );
                ServiceResponse::Success(report)
            }
            Err(e) => {
                log::error!("submission #{} failed: {}", settlement.id.value(), e);
                ServiceResponse::failure()
            }
        };

        self.response = Some(response);
        self.status = SubmissionStatus::Idle;
        true
    }
}
