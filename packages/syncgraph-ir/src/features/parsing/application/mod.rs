mod parse_file;

pub use parse_file::{front_end_for_path, ParseFileUseCase};
