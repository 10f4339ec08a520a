//! 検出サービスとの境界
//!
//! 実際の通信はブラウザ側（fetch + FormData）が実装し、
//! テストではモックに差し替える。

use crate::error::Result;
use crate::upload::ImageHandle;

/// 送信ごとの連番
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionId(pub(crate) u64);

impl SubmissionId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// 検出サービス
#[allow(async_fn_in_trait)]
pub trait DetectionService<F: ImageHandle> {
    /// 全ファイルを1回のPOSTで送り、2xxレスポンスの本文を返す
    ///
    /// 通信エラー、2xx以外、本文の読み取り失敗はErrを返す。
    /// リトライもタイムアウトもしない。
    async fn detect(&self, files: &[F]) -> Result<String>;
}

/// 送信1回分（開始時点のファイル一覧のスナップショット）
#[derive(Debug, Clone)]
pub struct Submission<F> {
    id: SubmissionId,
    files: Vec<F>,
}

impl<F: ImageHandle> Submission<F> {
    pub(crate) fn new(id: SubmissionId, files: Vec<F>) -> Self {
        Self { id, files }
    }

    pub fn id(&self) -> SubmissionId {
        self.id
    }

    pub fn files(&self) -> &[F] {
        &self.files
    }

    /// サービスを1回だけ呼び出す
    pub async fn dispatch<S: DetectionService<F>>(self, service: &S) -> Settlement {
        log::debug!(
            "submission #{}: posting {} file(s)",
            self.id.value(),
            self.files.len()
        );
        let outcome = service.detect(&self.files).await;
        Settlement {
            id: self.id,
            outcome,
        }
    }
}

/// 送信の決着（成功本文または通信エラー）
#[derive(Debug)]
pub struct Settlement {
    pub id: SubmissionId,
    pub outcome: Result<String>,
}
