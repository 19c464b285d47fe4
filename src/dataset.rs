use crate::config::Config;
use crate::error::DatasetError;
use crate::models::{Dataset, VocabEntry};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

/// Anything that can produce the vocabulary list.
#[async_trait]
pub trait VocabLoader: Send + Sync {
    async fn load(&self) -> Result<Dataset, DatasetError>;

    /// Human readable source, used in logs
    fn describe(&self) -> String;
}

/// Reads a JSON array from disk. Also accepts a `data.js` style script that
/// assigns the array to a variable.
#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl VocabLoader for FileLoader {
    async fn load(&self) -> Result<Dataset, DatasetError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        parse_dataset(strip_script_wrapper(&content))
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Fetches the JSON array once over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLoader {
    client: reqwest::Client,
    url: String,
}

impl HttpLoader {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl VocabLoader for HttpLoader {
    async fn load(&self) -> Result<Dataset, DatasetError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(DatasetError::HttpStatus(response.status().as_u16()));
        }

        let body = response.text().await?;
        parse_dataset(&body)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}

#[derive(Debug, Deserialize)]
struct VocabEntryRaw {
    #[serde(alias = "term")]
    en: Option<String>,
    #[serde(alias = "phonetic")]
    ipa: Option<String>,
    #[serde(alias = "translation")]
    zh: Option<String>,
    #[serde(alias = "image", alias = "imageRef", alias = "image_ref")]
    img: Option<String>,
}

impl VocabEntryRaw {
    fn into_entry(self, index: usize) -> Result<VocabEntry, DatasetError> {
        let require = |value: Option<String>, field: &'static str| {
            value.ok_or(DatasetError::MissingField { index, field })
        };

        Ok(VocabEntry {
            term: require(self.en, "en")?,
            phonetic: require(self.ipa, "ipa")?,
            translation: require(self.zh, "zh")?,
            image_ref: require(self.img, "img")?,
        })
    }
}

/// Parses a JSON array of entries, keeping their order.
pub fn parse_dataset(json: &str) -> Result<Dataset, DatasetError> {
    let raw: Vec<VocabEntryRaw> = serde_json::from_str(json)?;
    let entries = raw
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.into_entry(index))
        .collect::<Result<Vec<_>, _>>()?;

    Dataset::new(entries)
}

fn strip_script_wrapper(content: &str) -> &str {
    let trimmed = content.trim();
    if trimmed.starts_with('[') {
        return trimmed;
    }

    if let Some(start) = trimmed.find('[')
        && let Some(end) = trimmed.rfind(']')
        && start < end
    {
        return &trimmed[start..=end];
    }

    trimmed
}

/// Local file first, then the URL if one is configured.
pub fn loaders_from_config(config: &Config) -> Vec<Box<dyn VocabLoader>> {
    let mut loaders: Vec<Box<dyn VocabLoader>> = vec![Box::new(FileLoader::new(&config.data_file))];
    if let Some(url) = &config.data_url {
        loaders.push(Box::new(HttpLoader::new(url.clone())));
    }
    loaders
}

/// Tries each loader in order and returns the first dataset produced.
/// When all of them fail the last error is returned.
pub async fn load_first(loaders: &[Box<dyn VocabLoader>]) -> Result<Dataset, DatasetError> {
    let mut last_error = DatasetError::NoSource;

    for loader in loaders {
        match loader.load().await {
            Ok(dataset) => {
                tracing::info!(
                    source = %loader.describe(),
                    entries = dataset.len(),
                    "vocabulary loaded"
                );
                return Ok(dataset);
            }
            Err(e) => {
                tracing::warn!(source = %loader.describe(), error = %e, "vocabulary source failed");
                last_error = e;
            }
        }
    }

    Err(last_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const SAMPLE: &str = r#"[
        {"en": "Stop", "ipa": "/stɒp/", "zh": "停车", "img": "img/stop.png"},
        {"en": "No Entry", "ipa": "/nəʊ ˈentri/", "zh": "禁止驶入", "img": "img/no_entry.png"}
    ]"#;

    struct CountingLoader {
        calls: Arc<AtomicUsize>,
        result: fn() -> Result<Dataset, DatasetError>,
    }

    #[async_trait]
    impl VocabLoader for CountingLoader {
        async fn load(&self) -> Result<Dataset, DatasetError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.result)()
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    #[test]
    fn test_parse_dataset_keeps_order() {
        let dataset = parse_dataset(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[0].term, "Stop");
        assert_eq!(dataset[1].translation, "禁止驶入");
        assert_eq!(dataset[1].image_ref, "img/no_entry.png");
    }

    #[test]
    fn test_bundled_dataset_is_valid() {
        let dataset = parse_dataset(include_str!("../data/vocab.json")).unwrap();
        assert!(dataset.len() >= crate::quiz::MIN_QUIZ_ENTRIES);
    }

    #[test]
    fn test_parse_dataset_accepts_long_field_names() {
        let json = r#"[{"term": "Yield", "phonetic": "/jiːld/", "translation": "让行", "imageRef": "y.png"}]"#;
        let dataset = parse_dataset(json).unwrap();
        assert_eq!(dataset[0].term, "Yield");
        assert_eq!(dataset[0].image_ref, "y.png");
    }

    #[test]
    fn test_parse_dataset_missing_field() {
        let json = r#"[
            {"en": "Stop", "ipa": "/stɒp/", "zh": "停车", "img": "a.png"},
            {"en": "Yield", "ipa": "/jiːld/", "img": "b.png"}
        ]"#;
        match parse_dataset(json) {
            Err(DatasetError::MissingField { index, field }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "zh");
            }
            other => panic!("expected missing field, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_dataset_null_field_is_missing() {
        let json = r#"[{"en": null, "ipa": "x", "zh": "y", "img": "z"}]"#;
        assert!(matches!(
            parse_dataset(json),
            Err(DatasetError::MissingField { index: 0, field: "en" })
        ));
    }

    #[test]
    fn test_parse_dataset_empty_array() {
        assert!(matches!(parse_dataset("[]"), Err(DatasetError::Empty)));
    }

    #[test]
    fn test_parse_dataset_invalid_json() {
        assert!(matches!(parse_dataset("{not json"), Err(DatasetError::Json(_))));
    }

    #[test]
    fn test_strip_script_wrapper() {
        let script = "const appDataRaw = [{\"en\": \"a\"}];\n";
        assert_eq!(strip_script_wrapper(script), "[{\"en\": \"a\"}]");
        assert_eq!(strip_script_wrapper("  [1, 2] "), "[1, 2]");
    }

    #[tokio::test]
    async fn test_file_loader_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let dataset = FileLoader::new(&path).load().await.unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[tokio::test]
    async fn test_file_loader_reads_script() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.js");
        std::fs::write(&path, format!("const appDataRaw = {};", SAMPLE)).unwrap();

        let dataset = FileLoader::new(&path).load().await.unwrap();
        assert_eq!(dataset[0].term, "Stop");
    }

    #[tokio::test]
    async fn test_file_loader_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileLoader::new(dir.path().join("absent.json")).load().await;
        assert!(matches!(result, Err(DatasetError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_first_stops_at_first_success() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let third = Arc::new(AtomicUsize::new(0));
        let loaders: Vec<Box<dyn VocabLoader>> = vec![
            Box::new(CountingLoader {
                calls: first.clone(),
                result: || Err(DatasetError::Empty),
            }),
            Box::new(CountingLoader {
                calls: second.clone(),
                result: || parse_dataset(SAMPLE),
            }),
            Box::new(CountingLoader {
                calls: third.clone(),
                result: || parse_dataset(SAMPLE),
            }),
        ];

        let dataset = load_first(&loaders).await.unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
        assert_eq!(third.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_load_first_returns_last_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let loaders: Vec<Box<dyn VocabLoader>> = vec![
            Box::new(CountingLoader {
                calls: calls.clone(),
                result: || Err(DatasetError::Empty),
            }),
            Box::new(CountingLoader {
                calls: calls.clone(),
                result: || Err(DatasetError::HttpStatus(404)),
            }),
        ];

        let result = load_first(&loaders).await;
        assert!(matches!(result, Err(DatasetError::HttpStatus(404))));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_load_first_without_loaders() {
        assert!(matches!(load_first(&[]).await, Err(DatasetError::NoSource)));
    }

    #[test]
    fn test_loaders_from_config() {
        let mut config = Config::default();
        assert_eq!(loaders_from_config(&config).len(), 1);

        config.data_url = Some("http://localhost/data.json".to_string());
        let loaders = loaders_from_config(&config);
        assert_eq!(loaders.len(), 2);
        assert_eq!(loaders[1].describe(), "url http://localhost/data.json");
    }
}
