mod load_error;
pub use load_error::LoadError;

mod load_file;
pub use load_file::load_file;
