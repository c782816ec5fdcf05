//! Language analysis through the full pipeline

use crate::common::{catalog_of, page};
use docindex::core::config::GeneratorConfig;
use docindex::core::index::IndexBundle;
use docindex::core::pipeline::IndexGenerator;

fn generate(languages: &[&str], markup: &str) -> IndexBundle {
    let config = GeneratorConfig {
        languages: languages.iter().map(|l| l.to_string()).collect(),
        ..Default::default()
    };
    let catalog = catalog_of(vec![page(markup, "/page")]);
    let (bundle, _) = IndexGenerator::new(config)
        .unwrap()
        .generate(&catalog)
        .unwrap();
    bundle
}

#[test]
fn test_english_query_matches_across_inflection() {
    let bundle = generate(&["en"], "<article>testing the libraries</article>");
    assert_eq!(bundle.index.search("tested").len(), 1);
    assert_eq!(bundle.index.search("library").len(), 1);
}

#[test]
fn test_english_stopwords_not_searchable() {
    let bundle = generate(&["en"], "<article>the only word</article>");
    assert!(bundle.index.search("the").is_empty());
    assert_eq!(bundle.index.search("word").len(), 1);
}

#[test]
fn test_french_stemming() {
    let bundle = generate(&["fr"], "<article>les nouveautés impressionnantes</article>");
    // singular query matches the indexed plural through the stem
    assert_eq!(bundle.index.search("nouveauté").len(), 1);
    // "les" is a French stopword
    assert!(bundle.index.search("les").is_empty());
}

#[test]
fn test_multi_language_union() {
    let bundle = generate(
        &["fr", "de"],
        "<article>nouveautés und nachrichten</article>",
    );
    // each language's stem forms are indexed side by side
    assert_eq!(bundle.index.search("nouveauté").len(), 1);
    assert_eq!(bundle.index.search("nachricht").len(), 1);
}

#[test]
fn test_multi_language_differs_from_single() {
    let markup = "<article>nachrichten</article>";
    let multi = generate(&["fr", "de"], markup);
    let single = generate(&["fr"], markup);

    // the German stem only exists when German is composed in
    assert_eq!(multi.index.search("nachricht").len(), 1);
    assert!(single.index.search("nachricht").is_empty());
    // the surface form is reachable in both (French leaves it alone)
    assert_eq!(single.index.search("nachrichten").len(), 1);
}

#[test]
fn test_cjk_page_is_searchable() {
    let bundle = generate(&["ja"], "<article>日本語の文書</article>");
    assert_eq!(bundle.index.search("語").len(), 1);
}

#[test]
fn test_reloaded_index_keeps_language_behavior() {
    let bundle = generate(&["fr"], "<article>les nouveautés</article>");
    let reloaded = IndexBundle::from_bytes(&bundle.to_bytes().unwrap()).unwrap();

    assert_eq!(reloaded.index.pipeline(), bundle.index.pipeline());
    assert_eq!(
        reloaded.index.search("nouveauté"),
        bundle.index.search("nouveauté")
    );
    assert_eq!(reloaded.index.search("nouveauté").len(), 1);
}

#[test]
fn test_unknown_language_rejected_before_generation() {
    let config = GeneratorConfig {
        languages: vec!["tlh".to_string()],
        ..Default::default()
    };
    assert!(IndexGenerator::new(config).is_err());
}
