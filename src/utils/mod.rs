pub mod path;

pub use path::{ext_segments, file_name, file_stem, has_ext};
