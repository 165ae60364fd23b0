use std::time::Duration;

use serde::Deserialize;
use wordbook_config::lookup::LookupConfig;
use wordbook_types::{DEFAULT_CATEGORY, Entry, FALLBACK_DEFINITION, RandomWord};

use crate::{LookupError, LookupService};

/// Client for a dictionaryapi.dev style definition endpoint and a
/// random-word endpoint
#[derive(Clone)]
pub struct DictionaryApiClient {
    client: reqwest::Client,
    definition_url: String,
    random_word_url: String,
}

impl DictionaryApiClient {
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            definition_url: config.definition_url.clone(),
            random_word_url: config.random_word_url.clone(),
        })
    }

    /// Definition endpoint with `word` appended as an encoded path segment
    pub fn definition_url_for(&self, word: &str) -> Result<reqwest::Url, LookupError> {
        let mut url = reqwest::Url::parse(&self.definition_url)
            .map_err(|e| LookupError::InvalidUrl(format!("{}: {e}", self.definition_url)))?;

        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl(self.definition_url.clone()))?
            .pop_if_empty()
            .push(word);

        Ok(url)
    }

    pub async fn try_fetch_definition(&self, word: &str) -> Result<Entry, LookupError> {
        let url = self.definition_url_for(word)?;
        tracing::debug!("Fetching definition from {url}");

        let body = self.client.get(url).send().await?.text().await?;
        parse_definition(&body)
    }

    pub async fn try_fetch_random_word(&self) -> Result<String, LookupError> {
        let body = self
            .client
            .get(&self.random_word_url)
            .send()
            .await?
            .text()
            .await?;
        parse_random_word(&body)
    }
}

#[async_trait::async_trait]
impl LookupService for DictionaryApiClient {
    async fn fetch_definition(&self, word: &str) -> Entry {
        match self.try_fetch_definition(word).await {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Error fetching definition for {word}: {e}");
                Entry::fallback()
            }
        }
    }

    async fn fetch_random_word(&self) -> RandomWord {
        match self.try_fetch_random_word().await {
            Ok(word) => {
                let entry = self.fetch_definition(&word).await;
                RandomWord {
                    word,
                    definition: entry.definition,
                    phonetics: entry.phonetics,
                }
            }
            Err(e) => {
                tracing::warn!("Error fetching random word: {e}");
                RandomWord::fallback()
            }
        }
    }
}

// Response shapes of the definition API, only the fields we read
#[derive(Debug, Deserialize)]
struct ApiEntry {
    #[serde(default)]
    phonetics: Vec<ApiPhonetic>,
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiPhonetic {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiMeaning {
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    #[serde(default)]
    definition: Option<String>,
}

/// First definition of the first meaning, first non-empty phonetic text
pub(crate) fn parse_definition(body: &str) -> Result<Entry, LookupError> {
    let entries: Vec<ApiEntry> = serde_json::from_str(body)?;

    let first = entries
        .into_iter()
        .next()
        .ok_or(LookupError::MissingField("entry"))?;

    let meaning = first
        .meanings
        .into_iter()
        .next()
        .ok_or(LookupError::MissingField("meanings"))?;

    let definition = meaning
        .definitions
        .into_iter()
        .next()
        .and_then(|d| d.definition)
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| FALLBACK_DEFINITION.to_string());

    let phonetics = first
        .phonetics
        .into_iter()
        .filter_map(|p| p.text)
        .find(|text| !text.is_empty())
        .unwrap_or_default();

    Ok(Entry::new(definition, phonetics, DEFAULT_CATEGORY))
}

pub(crate) fn parse_random_word(body: &str) -> Result<String, LookupError> {
    let words: Vec<String> = serde_json::from_str(body)?;

    words
        .into_iter()
        .next()
        .filter(|word| !word.is_empty())
        .ok_or(LookupError::MissingField("word"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &str = r#"[{
        "word": "hello",
        "phonetics": [{"audio": "hello.mp3"}, {"text": ""}, {"text": "/həˈləʊ/"}],
        "meanings": [
            {"partOfSpeech": "noun", "definitions": [{"definition": "\"Hello!\" or an equivalent greeting."}]},
            {"partOfSpeech": "verb", "definitions": [{"definition": "To greet with \"hello\"."}]}
        ]
    }]"#;

    fn unreachable_config() -> LookupConfig {
        LookupConfig {
            enabled: true,
            definition_url: "http://127.0.0.1:9/api/v2/entries/en".to_string(),
            random_word_url: "http://127.0.0.1:9/word?number=1".to_string(),
            timeout_seconds: 2,
        }
    }

    #[test]
    fn parses_first_meaning_and_phonetic() {
        let entry = parse_definition(HELLO).unwrap();
        assert_eq!(entry.definition, "\"Hello!\" or an equivalent greeting.");
        assert_eq!(entry.phonetics, "/həˈləʊ/");
        assert_eq!(entry.category, "Daily Use");
    }

    #[test]
    fn missing_definition_text_uses_placeholder() {
        let body = r#"[{"phonetics": [{"text": "/x/"}], "meanings": [{"definitions": []}]}]"#;
        let entry = parse_definition(body).unwrap();
        assert!(entry.is_placeholder());
        assert_eq!(entry.phonetics, "/x/");
    }

    #[test]
    fn not_found_object_is_malformed() {
        let body = r#"{"title": "No Definitions Found", "message": "Sorry pal"}"#;
        assert!(matches!(
            parse_definition(body),
            Err(LookupError::Malformed(_))
        ));
    }

    #[test]
    fn empty_results_are_rejected() {
        assert!(matches!(
            parse_definition("[]"),
            Err(LookupError::MissingField("entry"))
        ));
        assert!(matches!(
            parse_definition(r#"[{"meanings": []}]"#),
            Err(LookupError::MissingField("meanings"))
        ));
    }

    #[test]
    fn random_word_takes_first_element() {
        assert_eq!(parse_random_word(r#"["quixotic"]"#).unwrap(), "quixotic");
        assert!(parse_random_word("[]").is_err());
        assert!(parse_random_word("<html>").is_err());
    }

    #[test]
    fn word_is_encoded_as_one_segment() {
        let client = DictionaryApiClient::new(&LookupConfig::default()).unwrap();

        let url = client.definition_url_for("ice cream/x").unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/ice%20cream%2Fx"
        );
    }

    #[test]
    fn trailing_slash_in_base_is_ignored() {
        let config = LookupConfig {
            definition_url: "http://localhost:8080/entries/".to_string(),
            ..LookupConfig::default()
        };
        let client = DictionaryApiClient::new(&config).unwrap();

        let url = client.definition_url_for("cat").unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/entries/cat");
    }

    #[tokio::test]
    async fn unreachable_service_yields_fallbacks() {
        let client = DictionaryApiClient::new(&unreachable_config()).unwrap();

        assert_eq!(client.fetch_definition("zzzzz").await, Entry::fallback());
        assert_eq!(client.fetch_random_word().await, RandomWord::fallback());
    }

    #[tokio::test]
    async fn invalid_base_url_yields_fallback() {
        let config = LookupConfig {
            definition_url: "not a url".to_string(),
            ..unreachable_config()
        };
        let client = DictionaryApiClient::new(&config).unwrap();

        assert!(matches!(
            client.try_fetch_definition("cat").await,
            Err(LookupError::InvalidUrl(_))
        ));
        assert_eq!(client.fetch_definition("cat").await, Entry::fallback());
    }
}
