//! Storage of uploaded dataset files.

mod upload;

pub use upload::{upload_file_name, UploadStore};
