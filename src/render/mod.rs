pub mod renderer;

pub use renderer::{render_file, render_tmpl, TemplateRenderer, TeraRenderer};
