//! アップロード対象のファイルとmultipartの構成

/// multipartで全ファイルに共通のフィールド名
pub const FILES_FIELD: &str = "files";

/// ファイル選択で受け付けるMIMEタイプ
pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/png", "image/jpeg"];

/// `<input type="file" accept=...>` 用の値
pub const ACCEPT_ATTRIBUTE: &str = "image/png, image/jpeg";

/// ユーザーが選択した画像ファイル
///
/// ブラウザでは `web_sys::File` をラップする。テストではモックを使う。
pub trait ImageHandle: Clone {
    fn file_name(&self) -> String;
}

/// multipartの1パート分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPart {
    pub field: &'static str,
    pub file_name: String,
}

/// 送信パートの一覧を作る（選択順を保持）
pub fn upload_manifest<F: ImageHandle>(files: &[F]) -> Vec<UploadPart> {
    files
        .iter()
        .map(|file| UploadPart {
            field: FILES_FIELD,
            file_name: file.file_name(),
        })
        .collect()
}

/// 受け付け対象のMIMEタイプか
pub fn is_accepted(declared: &str) -> bool {
    let declared = declared.trim().to_ascii_lowercase();
    ACCEPTED_MIME_TYPES.contains(&declared.as_str())
}
