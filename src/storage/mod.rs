//! Input and output files
//!
//! - [`read_clippings`]: loads the whole export into memory
//! - [`save_documents`]: writes one `<title>.<extension>` file per rendered document
//!
//! Both sit outside the conversion core and report problems through `anyhow`.

pub mod reader;
pub mod writer;

pub use reader::read_clippings;
pub use writer::save_documents;
