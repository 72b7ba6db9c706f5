pub mod content_disposition;
pub mod file_size;
