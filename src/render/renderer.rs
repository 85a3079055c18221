use crate::core::error::Result;
use crate::core::types::RenderOptions;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tera::{Context, Tera};

/// Template collaborator: renders a template from a file path or from an
/// in-memory template string.
#[async_trait]
pub trait TemplateRenderer: Send + Sync {
    async fn render_path(
        &self,
        path: &Path,
        data: &Value,
        options: &RenderOptions,
    ) -> Result<String>;

    fn render_str(&self, template: &str, data: &Value, options: &RenderOptions) -> Result<String>;
}

/// Default renderer backed by `tera`. Every call compiles and renders
/// one-off; no template registry is kept between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct TeraRenderer;

#[async_trait]
impl TemplateRenderer for TeraRenderer {
    async fn render_path(
        &self,
        path: &Path,
        data: &Value,
        options: &RenderOptions,
    ) -> Result<String> {
        log::debug!("Rendering template: {}", path.display());
        let template = tokio::fs::read_to_string(path).await?;
        self.render_str(&template, data, options)
    }

    fn render_str(&self, template: &str, data: &Value, options: &RenderOptions) -> Result<String> {
        let context = Context::from_serialize(data)?;
        let rendered = Tera::one_off(template, &context, options.autoescape)?;
        Ok(rendered)
    }
}

/// Renders a template file against `data`. Passing `None` for `options`
/// applies the renderer defaults.
pub async fn render_file<P, T>(
    path: P,
    data: &T,
    options: Option<&RenderOptions>,
) -> Result<String>
where
    P: AsRef<Path>,
    T: Serialize,
{
    let value = serde_json::to_value(data)?;
    let defaults = RenderOptions::default();
    TeraRenderer
        .render_path(path.as_ref(), &value, options.unwrap_or(&defaults))
        .await
}

/// Renders an already-loaded template string against `data`. Synchronous;
/// no I/O occurs. Compilation and render failures are returned as errors.
pub fn render_tmpl<T>(template: &str, data: &T, options: Option<&RenderOptions>) -> Result<String>
where
    T: Serialize,
{
    let value = serde_json::to_value(data)?;
    let defaults = RenderOptions::default();
    TeraRenderer.render_str(template, &value, options.unwrap_or(&defaults))
}
