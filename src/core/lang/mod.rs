//! Language profiles and text-normalization pipelines.
//!
//! A [`TextPipeline`] is resolved once from the configured language
//! codes, before any page is processed: an unknown code fails the
//! build immediately rather than silently degrading relevance.
//!
//! Normalization per language is Snowball stemming (`rust-stemmers`)
//! behind an ISO stopword filter (`stop-words`). When several
//! languages are requested the pipeline composes them with union
//! semantics: a token survives if any requested language accepts it,
//! and every accepting language's stem form is indexed.

pub mod segment;

use crate::core::error::{DocIndexError, Result};
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A supported content language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "da")]
    Danish,
    #[serde(rename = "no")]
    Norwegian,
    #[serde(rename = "sv")]
    Swedish,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "fi")]
    Finnish,
    #[serde(rename = "hu")]
    Hungarian,
    #[serde(rename = "ro")]
    Romanian,
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "el")]
    Greek,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "zh")]
    Chinese,
    #[serde(rename = "th")]
    Thai,
}

impl Language {
    /// All supported languages, in a stable order
    pub const ALL: [Language; 20] = [
        Language::English,
        Language::French,
        Language::German,
        Language::Spanish,
        Language::Italian,
        Language::Portuguese,
        Language::Dutch,
        Language::Danish,
        Language::Norwegian,
        Language::Swedish,
        Language::Russian,
        Language::Finnish,
        Language::Hungarian,
        Language::Romanian,
        Language::Turkish,
        Language::Arabic,
        Language::Greek,
        Language::Japanese,
        Language::Chinese,
        Language::Thai,
    ];

    /// Parse an ISO 639-1 language code
    pub fn parse(code: &str) -> Result<Self> {
        let lang = match code.trim().to_ascii_lowercase().as_str() {
            "en" => Language::English,
            "fr" => Language::French,
            "de" => Language::German,
            "es" => Language::Spanish,
            "it" => Language::Italian,
            "pt" => Language::Portuguese,
            "nl" => Language::Dutch,
            "da" => Language::Danish,
            "no" => Language::Norwegian,
            "sv" => Language::Swedish,
            "ru" => Language::Russian,
            "fi" => Language::Finnish,
            "hu" => Language::Hungarian,
            "ro" => Language::Romanian,
            "tr" => Language::Turkish,
            "ar" => Language::Arabic,
            "el" => Language::Greek,
            "ja" => Language::Japanese,
            "zh" => Language::Chinese,
            "th" => Language::Thai,
            other => return Err(DocIndexError::UnsupportedLanguage(other.to_string())),
        };
        Ok(lang)
    }

    /// ISO 639-1 code for this language
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Dutch => "nl",
            Language::Danish => "da",
            Language::Norwegian => "no",
            Language::Swedish => "sv",
            Language::Russian => "ru",
            Language::Finnish => "fi",
            Language::Hungarian => "hu",
            Language::Romanian => "ro",
            Language::Turkish => "tr",
            Language::Arabic => "ar",
            Language::Greek => "el",
            Language::Japanese => "ja",
            Language::Chinese => "zh",
            Language::Thai => "th",
        }
    }

    /// Whether this language needs auxiliary word segmentation
    pub fn needs_segmentation(self) -> bool {
        matches!(self, Language::Japanese | Language::Chinese | Language::Thai)
    }

    /// Snowball stemming algorithm, when one exists for this language
    fn algorithm(self) -> Option<Algorithm> {
        match self {
            Language::English => Some(Algorithm::English),
            Language::French => Some(Algorithm::French),
            Language::German => Some(Algorithm::German),
            Language::Spanish => Some(Algorithm::Spanish),
            Language::Italian => Some(Algorithm::Italian),
            Language::Portuguese => Some(Algorithm::Portuguese),
            Language::Dutch => Some(Algorithm::Dutch),
            Language::Danish => Some(Algorithm::Danish),
            Language::Norwegian => Some(Algorithm::Norwegian),
            Language::Swedish => Some(Algorithm::Swedish),
            Language::Russian => Some(Algorithm::Russian),
            Language::Finnish => Some(Algorithm::Finnish),
            Language::Hungarian => Some(Algorithm::Hungarian),
            Language::Romanian => Some(Algorithm::Romanian),
            Language::Turkish => Some(Algorithm::Turkish),
            Language::Arabic => Some(Algorithm::Arabic),
            Language::Greek => Some(Algorithm::Greek),
            Language::Japanese | Language::Chinese | Language::Thai => None,
        }
    }

    /// Stopword list identifier for the `stop-words` crate
    fn stop_words_language(self) -> stop_words::LANGUAGE {
        match self {
            Language::English => stop_words::LANGUAGE::English,
            Language::French => stop_words::LANGUAGE::French,
            Language::German => stop_words::LANGUAGE::German,
            Language::Spanish => stop_words::LANGUAGE::Spanish,
            Language::Italian => stop_words::LANGUAGE::Italian,
            Language::Portuguese => stop_words::LANGUAGE::Portuguese,
            Language::Dutch => stop_words::LANGUAGE::Dutch,
            Language::Danish => stop_words::LANGUAGE::Danish,
            Language::Norwegian => stop_words::LANGUAGE::Norwegian,
            Language::Swedish => stop_words::LANGUAGE::Swedish,
            Language::Russian => stop_words::LANGUAGE::Russian,
            Language::Finnish => stop_words::LANGUAGE::Finnish,
            Language::Hungarian => stop_words::LANGUAGE::Hungarian,
            Language::Romanian => stop_words::LANGUAGE::Romanian,
            Language::Turkish => stop_words::LANGUAGE::Turkish,
            Language::Arabic => stop_words::LANGUAGE::Arabic,
            Language::Greek => stop_words::LANGUAGE::Greek,
            Language::Japanese => stop_words::LANGUAGE::Japanese,
            Language::Chinese => stop_words::LANGUAGE::Chinese,
            Language::Thai => stop_words::LANGUAGE::Thai,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolved text-normalization pipeline.
///
/// Serialized into the index so a reloaded artifact reconstructs the
/// identical analyzer for queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "languages", rename_all = "snake_case")]
pub enum TextPipeline {
    /// One language's tokenizer/stemmer/stopword rules
    Single(Language),
    /// Union composition over several languages' rules
    Multi(Vec<Language>),
}

impl TextPipeline {
    /// Resolve a pipeline from the ordered requested language codes.
    ///
    /// Fails fast on unknown codes. Registers auxiliary segmentation
    /// support (idempotently) when any resolved language requires it.
    pub fn resolve(codes: &[String]) -> Result<Self> {
        let mut languages: Vec<Language> = Vec::new();
        for code in codes {
            let lang = Language::parse(code)?;
            if !languages.contains(&lang) {
                languages.push(lang);
            }
        }

        let pipeline = match languages.as_slice() {
            [] => TextPipeline::Single(Language::English),
            [one] => TextPipeline::Single(*one),
            _ => TextPipeline::Multi(languages),
        };

        if pipeline.languages().iter().any(|l| l.needs_segmentation()) {
            segment::register();
        }

        tracing::debug!("Resolved text pipeline: {:?}", pipeline);
        Ok(pipeline)
    }

    /// Languages composed by this pipeline, in request order
    pub fn languages(&self) -> Vec<Language> {
        match self {
            TextPipeline::Single(lang) => vec![*lang],
            TextPipeline::Multi(langs) => langs.clone(),
        }
    }
}

/// One language's normalization stage
struct LanguageStage {
    stopwords: HashSet<String>,
    stemmer: Option<Stemmer>,
}

impl LanguageStage {
    fn new(language: Language) -> Self {
        let stopwords = stop_words::get(language.stop_words_language())
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        let stemmer = language.algorithm().map(Stemmer::create);
        Self { stopwords, stemmer }
    }

    /// Normalized form of a raw token, or `None` when the token is a
    /// stopword in this language
    fn accept(&self, raw: &str) -> Option<String> {
        if self.stopwords.contains(raw) {
            return None;
        }
        Some(match &self.stemmer {
            Some(stemmer) => stemmer.stem(raw).into_owned(),
            None => raw.to_string(),
        })
    }
}

/// Instantiated analyzer for a resolved pipeline.
///
/// Splits text into lowercase tokens, applies segmentation when any
/// composed language requires it, then produces the union of the
/// per-language normalized forms for each token.
pub struct Analyzer {
    stages: Vec<LanguageStage>,
    segmenter: Option<&'static segment::Segmenter>,
}

/// A normalized token with its ordinal position in the token stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Ordinal of the raw token within the field, counting tokens
    /// dropped as stopwords (positions keep reflecting adjacency)
    pub position: u32,

    /// Normalized index terms, one per accepting language, deduplicated
    pub terms: Vec<String>,
}

impl Analyzer {
    /// Build the analyzer for a resolved pipeline
    pub fn for_pipeline(pipeline: &TextPipeline) -> Self {
        let languages = pipeline.languages();
        let segmenter = languages
            .iter()
            .any(|l| l.needs_segmentation())
            .then(segment::register);
        let stages = languages.into_iter().map(LanguageStage::new).collect();
        Self { stages, segmenter }
    }

    /// Tokenize and normalize a field's text
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        self.split_raw(text)
            .into_iter()
            .enumerate()
            .filter_map(|(i, raw)| {
                let terms = self.normalize(&raw);
                if terms.is_empty() {
                    None
                } else {
                    Some(Token {
                        position: i as u32,
                        terms,
                    })
                }
            })
            .collect()
    }

    /// Union of per-language normalized forms for one raw token
    pub fn normalize(&self, raw: &str) -> Vec<String> {
        let mut forms = Vec::new();
        for stage in &self.stages {
            if let Some(form) = stage.accept(raw) {
                if !forms.contains(&form) {
                    forms.push(form);
                }
            }
        }
        forms
    }

    /// Split text into lowercase raw tokens
    fn split_raw(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let mut tokens = Vec::new();
        for run in lower.split(|c: char| !c.is_alphanumeric()) {
            if run.is_empty() {
                continue;
            }
            match self.segmenter {
                Some(segmenter) => tokens.extend(segmenter.segment(run)),
                None => tokens.push(run.to_string()),
            }
        }
        tokens
    }
}
