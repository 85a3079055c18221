pub mod json;
pub mod text;

pub use json::{read_json_file, read_json_file_as, JsonDecoder, SerdeJsonDecoder};
pub use text::{read_file, FsTextReader, TextReader};
