pub mod cli;
pub mod compress;
pub mod config;
pub mod error;
pub mod optimize;
pub mod report;

pub use cli::Args;
pub use compress::{compress_document, compress_page_content, PageCompression};
pub use config::Settings;
pub use error::OptimizeError;
pub use optimize::{optimize, optimize_pdf};
pub use report::SizeReport;
