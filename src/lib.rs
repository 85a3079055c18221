pub mod core;
pub mod reader;
pub mod render;
pub mod utils;

pub use core::{FileTextError, FileTextUtils, FileTextUtilsBuilder, RenderOptions, Result};

pub use reader::{
    read_file, read_json_file, read_json_file_as, FsTextReader, JsonDecoder, SerdeJsonDecoder,
    TextReader,
};

pub use render::{render_file, render_tmpl, TemplateRenderer, TeraRenderer};

pub use utils::{ext_segments, has_ext};

pub mod prelude {
    pub use crate::core::{FileTextUtils, RenderOptions, Result};
    pub use crate::utils::has_ext;
}
