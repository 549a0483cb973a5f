pub mod paths;

pub use paths::{format_path_with_tilde, validate_document_file_name, validate_file_size};
