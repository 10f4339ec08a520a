pub mod carousel;
pub mod file_selector;
pub mod footer;
pub mod header;
pub mod preview_images;
pub mod result_images;
pub mod results_panel;
pub mod summary_view;
pub mod upload_form;
pub mod zoom_overlay;

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod test_support;
