mod conditional;
mod directory;
mod error;
mod file;
pub(crate) mod headers;

pub use directory::render_directory;
pub use error::{render_error, render_redirect};
pub use file::render_file;
