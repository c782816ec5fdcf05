//! Pipeline tests over in-memory catalogs

use crate::common::{catalog_of, doc_page_markup, page, page_in};
use docindex::core::catalog::MemoryCatalog;
use docindex::core::config::GeneratorConfig;
use docindex::core::error::DocIndexError;
use docindex::core::pipeline::IndexGenerator;

fn generate(
    catalog: &MemoryCatalog,
    config: GeneratorConfig,
) -> docindex::core::index::IndexBundle {
    let (bundle, _) = IndexGenerator::new(config)
        .unwrap()
        .generate(catalog)
        .unwrap();
    bundle
}

#[test]
fn test_indexes_article_text() {
    let catalog = catalog_of(vec![page(
        "<html><body><article>foo</article></body></html>",
        "/a/b",
    )]);
    let bundle = generate(&catalog, GeneratorConfig::default());

    let hits = bundle.index.search("foo");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].key, "/a/b");
    assert!(bundle.index.search("bar").is_empty());
    assert_eq!(bundle.store.get("/a/b").unwrap().text, "foo");
}

#[test]
fn test_headings_become_fragment_records() {
    let catalog = catalog_of(vec![page(doc_page_markup(), "/docs/antennas")]);
    let bundle = generate(&catalog, GeneratorConfig::default());

    // one document plus two anchored headings
    assert_eq!(bundle.index.len(), 3);
    assert!(bundle
        .index
        .keys()
        .contains(&"/docs/antennas#calibration".to_string()));
    assert!(bundle
        .index
        .keys()
        .contains(&"/docs/antennas#troubleshooting".to_string()));

    // the fragment's boosted title match outranks the body mention
    let hits = bundle.index.search("calibration");
    assert_eq!(hits[0].key, "/docs/antennas#calibration");
}

#[test]
fn test_scaffolding_text_not_searchable() {
    let catalog = catalog_of(vec![page(doc_page_markup(), "/docs/antennas")]);
    let bundle = generate(&catalog, GeneratorConfig::default());

    // pagination nav and text outside the article never reach the index
    assert!(bundle.index.search("amplifiers").is_empty());
    assert!(bundle.index.search("copyright").is_empty());
}

#[test]
fn test_title_extracted_and_stored() {
    let catalog = catalog_of(vec![page(doc_page_markup(), "/docs/antennas")]);
    let bundle = generate(&catalog, GeneratorConfig::default());

    let doc = bundle.store.get("/docs/antennas").unwrap();
    assert_eq!(doc.title, "Antenna Alignment");
    assert!(!doc.text.contains("Antenna Alignment"));
    assert!(doc.text.contains("Point the antenna"));
}

#[test]
fn test_noindex_attribute_excludes_page() {
    let mut hidden = page("<article>secret</article>", "/hidden");
    hidden
        .attributes
        .insert("noindex".to_string(), String::new());
    let catalog = catalog_of(vec![hidden, page("<article>public</article>", "/public")]);

    let bundle = generate(&catalog, GeneratorConfig::default());
    assert!(bundle.index.search("secret").is_empty());
    assert!(bundle.store.get("/hidden").is_none());
    assert_eq!(bundle.index.search("public").len(), 1);
}

#[test]
fn test_robots_noindex_meta_excludes_page() {
    let hidden = page(
        "<html><head><meta name=\"robots\" content=\"noindex\"></head>\
         <body><article>secret</article></body></html>",
        "/hidden",
    );
    let catalog = catalog_of(vec![hidden]);

    let bundle = generate(&catalog, GeneratorConfig::default());
    assert!(bundle.index.is_empty());
    assert!(bundle.store.is_empty());
}

#[test]
fn test_latest_only_drops_older_versions() {
    let mut catalog = catalog_of(vec![
        page_in("hello", "1.0", "<article>spinnakers</article>", "/hello/1.0/index"),
        page_in("hello", "1.5", "<article>mainsails</article>", "/hello/1.5/index"),
    ]);
    catalog.set_latest("hello", "1.5");

    let all = generate(&catalog, GeneratorConfig::default());
    assert_eq!(all.index.search("spinnakers").len(), 1);
    assert_eq!(all.index.search("mainsails").len(), 1);

    let latest = generate(
        &catalog,
        GeneratorConfig {
            index_latest_only: true,
            ..Default::default()
        },
    );
    assert!(latest.index.search("spinnakers").is_empty());
    assert_eq!(latest.index.search("mainsails").len(), 1);
}

#[test]
fn test_duplicate_published_url_is_fatal() {
    let catalog = catalog_of(vec![
        page("<article>one</article>", "/same"),
        page("<article>two</article>", "/same"),
    ]);
    let err = IndexGenerator::new(GeneratorConfig::default())
        .unwrap()
        .generate(&catalog)
        .unwrap_err();
    assert!(matches!(err, DocIndexError::DuplicateKey(_)));
}

#[test]
fn test_site_url_produces_absolute_keys() {
    let catalog = catalog_of(vec![page("<article>foo</article>", "/a/b")]);
    let config = GeneratorConfig {
        site_url: Some("https://docs.example.org".to_string()),
        ..Default::default()
    };
    let bundle = generate(&catalog, config);
    assert_eq!(
        bundle.index.search("foo")[0].key,
        "https://docs.example.org/a/b"
    );
}

#[test]
fn test_stats_reflect_selection_and_fragments() {
    let mut hidden = page("<article>x</article>", "/hidden");
    hidden
        .attributes
        .insert("noindex".to_string(), String::new());
    let catalog = catalog_of(vec![page(doc_page_markup(), "/docs/antennas"), hidden]);

    let (_, stats) = IndexGenerator::new(GeneratorConfig::default())
        .unwrap()
        .generate(&catalog)
        .unwrap();
    assert_eq!(stats.pages_total, 2);
    assert_eq!(stats.pages_selected, 1);
    assert_eq!(stats.documents, 1);
    assert_eq!(stats.fragments, 2);
}

#[test]
fn test_empty_catalog_yields_empty_artifact() {
    let catalog = MemoryCatalog::new();
    let (artifact, stats) = IndexGenerator::new(GeneratorConfig::default())
        .unwrap()
        .generate_artifact(&catalog)
        .unwrap();
    assert_eq!(stats.documents, 0);
    // still a loadable payload
    let bundle = docindex::core::index::IndexBundle::from_bytes(&artifact.bytes).unwrap();
    assert!(bundle.index.is_empty());
}
