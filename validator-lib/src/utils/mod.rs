mod filesystem;
mod string;

pub use filesystem::write_error_to_log;
pub use string::normalize_header;
