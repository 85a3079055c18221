use crate::core::error::Result;
use crate::core::types::RenderOptions;
use crate::reader::{FsTextReader, JsonDecoder, SerdeJsonDecoder, TextReader};
use crate::render::{TemplateRenderer, TeraRenderer};
use crate::utils::path::has_ext;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

/// Facade over the three collaborators. Stateless between calls; safe to
/// share across tasks.
pub struct FileTextUtils {
    reader: Arc<dyn TextReader>,
    decoder: Arc<dyn JsonDecoder>,
    renderer: Arc<dyn TemplateRenderer>,
}

impl FileTextUtils {
    pub fn new() -> Self {
        Self {
            reader: Arc::new(FsTextReader),
            decoder: Arc::new(SerdeJsonDecoder),
            renderer: Arc::new(TeraRenderer),
        }
    }

    pub fn builder() -> FileTextUtilsBuilder {
        FileTextUtilsBuilder::new()
    }

    pub fn has_ext<P: AsRef<Path>>(&self, path: P, ext: &str) -> bool {
        has_ext(path, ext)
    }

    pub async fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        self.reader.read_text(path.as_ref()).await
    }

    pub async fn read_json_file<P: AsRef<Path>>(&self, path: P) -> Result<Value> {
        let text = self.reader.read_text(path.as_ref()).await?;
        self.decoder.decode(&text)
    }

    pub async fn read_json_file_as<T, P>(&self, path: P) -> Result<T>
    where
        T: DeserializeOwned,
        P: AsRef<Path>,
    {
        let value = self.read_json_file(path).await?;
        let typed = serde_json::from_value(value)?;
        Ok(typed)
    }

    pub async fn render_file<P, T>(
        &self,
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
        self.renderer
            .render_path(path.as_ref(), &value, options.unwrap_or(&defaults))
            .await
    }

    pub fn render_tmpl<T>(
        &self,
        template: &str,
        data: &T,
        options: Option<&RenderOptions>,
    ) -> Result<String>
    where
        T: Serialize,
    {
        let value = serde_json::to_value(data)?;
        let defaults = RenderOptions::default();
        self.renderer
            .render_str(template, &value, options.unwrap_or(&defaults))
    }
}

impl Default for FileTextUtils {
    fn default() -> Self {
        Self::new()
    }
}

pub struct FileTextUtilsBuilder {
    reader: Option<Arc<dyn TextReader>>,
    decoder: Option<Arc<dyn JsonDecoder>>,
    renderer: Option<Arc<dyn TemplateRenderer>>,
}

impl FileTextUtilsBuilder {
    pub fn new() -> Self {
        Self {
            reader: None,
            decoder: None,
            renderer: None,
        }
    }

    pub fn reader(mut self, reader: Arc<dyn TextReader>) -> Self {
        self.reader = Some(reader);
        self
    }

    pub fn decoder(mut self, decoder: Arc<dyn JsonDecoder>) -> Self {
        self.decoder = Some(decoder);
        self
    }

    pub fn renderer(mut self, renderer: Arc<dyn TemplateRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn build(self) -> FileTextUtils {
        FileTextUtils {
            reader: self.reader.unwrap_or_else(|| Arc::new(FsTextReader)),
            decoder: self.decoder.unwrap_or_else(|| Arc::new(SerdeJsonDecoder)),
            renderer: self.renderer.unwrap_or_else(|| Arc::new(TeraRenderer)),
        }
    }
}

impl Default for FileTextUtilsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::FileTextError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::fs;

    struct StaticReader {
        text: String,
    }

    #[async_trait]
    impl TextReader for StaticReader {
        async fn read_text(&self, _path: &Path) -> Result<String> {
            Ok(self.text.clone())
        }
    }

    #[tokio::test]
    async fn test_read_file_through_default_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file.html");
        fs::write(&path, "<h1>Title</h1>").unwrap();

        let utils = FileTextUtils::new();
        let text = utils.read_file(&path).await.unwrap();
        assert_eq!(text, "<h1>Title</h1>");
    }

    #[tokio::test]
    async fn test_read_json_file_uses_substituted_reader() {
        let utils = FileTextUtils::builder()
            .reader(Arc::new(StaticReader {
                text: r#"{ "title": "Title" }"#.to_string(),
            }))
            .build();

        let value = utils.read_json_file("ignored.json").await.unwrap();
        assert_eq!(value, json!({ "title": "Title" }));
    }

    #[tokio::test]
    async fn test_read_json_file_parse_failure_after_successful_read() {
        let utils = FileTextUtils::builder()
            .reader(Arc::new(StaticReader {
                text: "<h1>Title</h1>".to_string(),
            }))
            .build();

        let err = utils.read_json_file("ignored.json").await.unwrap_err();
        assert!(matches!(err, FileTextError::Json(_)));
    }

    #[tokio::test]
    async fn test_render_file_through_facade() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tmpl.html");
        fs::write(&path, "<h1>{{ title }}</h1>").unwrap();

        let utils = FileTextUtils::new();
        let data = json!({ "title": "Title" });
        let rendered = utils.render_file(&path, &data, None).await.unwrap();
        assert_eq!(rendered, "<h1>Title</h1>");
    }

    #[test]
    fn test_render_tmpl_through_facade() {
        let utils = FileTextUtils::new();
        let data = json!({ "title": "Title" });
        let rendered = utils.render_tmpl("<h1>{{ title }}</h1>", &data, None).unwrap();
        assert_eq!(rendered, "<h1>Title</h1>");
    }

    #[test]
    fn test_has_ext_through_facade() {
        let utils = FileTextUtils::new();
        assert!(utils.has_ext("fake/path/with/name.this.that", "this"));
        assert!(!utils.has_ext("fake/path/with/name.this.that", "name"));
    }

    #[tokio::test]
    async fn test_operations_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"{ "title": "Title" }"#).unwrap();

        let utils = FileTextUtils::new();
        let first = utils.read_json_file(&path).await.unwrap();
        let second = utils.read_json_file(&path).await.unwrap();
        assert_eq!(first, second);

        let data = json!({ "title": "Title" });
        let a = utils.render_tmpl("<h1>{{ title }}</h1>", &data, None).unwrap();
        let b = utils.render_tmpl("<h1>{{ title }}</h1>", &data, None).unwrap();
        assert_eq!(a, b);
    }
}
