//! カルーセル用の循環カーソル
//!
//! プレビュー画像と解析結果画像の両カルーセルで共有する。

/// 長さ `len` の列を指す循環カーソル
///
/// `len > 0` のとき `index` は常に `[0, len)` に収まる。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CyclicCursor {
    index: usize,
    len: usize,
}

impl CyclicCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// 現在位置（空ならNone）
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// 前へ（先頭なら末尾へ）
    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
    }

    /// 次へ（末尾なら先頭へ）
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = if self.index == self.len - 1 {
            0
        } else {
            self.index + 1
        };
    }
}
