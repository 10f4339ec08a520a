//! 拡大表示オーバーレイの状態

/// 拡大表示の状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoomState {
    is_open: bool,
    image: String,
}

impl ZoomState {
    pub fn open(&mut self, image: String) {
        self.is_open = true;
        self.image = image;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.image.clear();
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// 表示中の画像（閉じていればNone）
    pub fn image(&self) -> Option<&str> {
        self.is_open.then_some(self.image.as_str())
    }
}
