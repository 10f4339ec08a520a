//! 選択された画像ファイル

use repair_vision_common::upload::is_accepted;
use repair_vision_common::{ImageHandle, Result};
use web_sys::{File, FileList, Url};

use crate::api::detect::js_error;

/// 選択ファイルとプレビュー用のObject URL
#[derive(Debug, Clone)]
pub struct SelectedImage {
    file: File,
    preview_url: String,
}

impl SelectedImage {
    pub fn from_file(file: File) -> Result<Self> {
        let preview_url = Url::create_object_url_with_blob(&file).map_err(js_error)?;
        Ok(Self { file, preview_url })
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    pub fn preview_url(&self) -> &str {
        &self.preview_url
    }

    /// Object URLを解放する（選択が差し替えられたとき）
    pub fn release(&self) {
        if let Err(e) = Url::revoke_object_url(&self.preview_url) {
            log::warn!("revoke {} failed: {:?}", self.preview_url, e);
        }
    }
}

impl ImageHandle for SelectedImage {
    fn file_name(&self) -> String {
        self.file.name()
    }
}

/// FileListを選択順のまま変換
pub fn collect_files(list: &FileList) -> Vec<SelectedImage> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|file| {
            if !is_accepted(&file.type_()) {
                log::warn!("{} has type '{}', sending anyway", file.name(), file.type_());
            }
            match SelectedImage::from_file(file) {
                Ok(image) => Some(image),
                Err(e) => {
                    log::error!("preview failed: {}", e);
                    None
                }
            }
        })
        .collect()
}

/// プレビューカルーセル用の表示データ
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewItem {
    pub name: String,
    pub url: String,
}

impl From<&SelectedImage> for PreviewItem {
    fn from(image: &SelectedImage) -> Self {
        Self {
            name: image.file_name(),
            url: image.preview_url().to_string(),
        }
    }
}

impl PreviewItem {
    /// 画像のalt属性（ファイル名が空なら汎用文言）
    pub fn alt(&self) -> &str {
        if self.name.is_empty() {
            "Uploaded Image"
        } else {
            &self.name
        }
    }
}
