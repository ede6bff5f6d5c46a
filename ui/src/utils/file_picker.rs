//! Image picker for avatar and cover uploads.
//!
//! The picker sits behind [`FilePickerHandler`] so widget tests can hand in a file without
//! opening a system dialog.
//!
//! # Platform Support
//!
//! - **Native (Windows, macOS, Linux)**: native dialogs via the `rfd` crate.
//! - **Web (WASM)**: not supported, the stub never returns a file.

use growthyari_business::FileUpload;

/// Extensions offered in the dialog filter.
#[cfg(not(target_arch = "wasm32"))]
const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Trait for picking an image file, enabling mock implementations for testing.
pub trait FilePickerHandler {
    /// Opens a picker titled `title` and returns the chosen file, if any.
    fn pick_image(&self, title: &str) -> Option<FileUpload>;
}

/// Default file picker handler using the system file dialog.
#[derive(Default)]
pub struct SystemFilePickerHandler;

#[cfg(not(target_arch = "wasm32"))]
impl FilePickerHandler for SystemFilePickerHandler {
    fn pick_image(&self, title: &str) -> Option<FileUpload> {
        let path = rfd::FileDialog::new()
            .add_filter("Image", &IMAGE_EXTENSIONS)
            .set_title(title)
            .pick_file()?;

        log::info!("User selected file: {path:?}");
        load_file(&path)
    }
}

#[cfg(target_arch = "wasm32")]
impl FilePickerHandler for SystemFilePickerHandler {
    fn pick_image(&self, _title: &str) -> Option<FileUpload> {
        log::debug!("File picker is not available on the web build");
        None
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_file(path: &std::path::Path) -> Option<FileUpload> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Failed to read file {path:?}: {e}");
            return None;
        }
    };
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_owned());

    log::debug!("Read {} bytes from {file_name}", bytes.len());
    Some(FileUpload::new(file_name, bytes))
}
