//! Artifact packaging, determinism and directory-backed generation

use crate::common::{catalog_of, doc_page_markup, page};
use docindex::cli::site::SiteCatalog;
use docindex::core::config::GeneratorConfig;
use docindex::core::index::IndexBundle;
use docindex::core::pipeline::IndexGenerator;
use std::fs;
use std::path::Path;

fn write_page(root: &Path, rel: &str, markup: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, markup).unwrap();
}

#[test]
fn test_generation_is_byte_deterministic() {
    let run = || {
        let catalog = catalog_of(vec![
            page(doc_page_markup(), "/docs/antennas"),
            page("<article>second page</article>", "/docs/other"),
        ]);
        let (artifact, _) = IndexGenerator::new(GeneratorConfig::default())
            .unwrap()
            .generate_artifact(&catalog)
            .unwrap();
        artifact.bytes
    };
    assert_eq!(run(), run());
}

#[test]
fn test_artifact_metadata() {
    let catalog = catalog_of(vec![page("<article>x</article>", "/p")]);
    let (artifact, _) = IndexGenerator::new(GeneratorConfig::default())
        .unwrap()
        .generate_artifact(&catalog)
        .unwrap();
    assert_eq!(artifact.out_path, "search-index.json");
    assert_eq!(artifact.pub_url, "/search-index.json");
    assert_eq!(artifact.media_type, "application/json");
}

#[test]
fn test_reloaded_artifact_answers_identically() {
    let catalog = catalog_of(vec![
        page(doc_page_markup(), "/docs/antennas"),
        page("<article>installation guide</article>", "/docs/install"),
    ]);
    let (artifact, _) = IndexGenerator::new(GeneratorConfig::default())
        .unwrap()
        .generate_artifact(&catalog)
        .unwrap();

    let reloaded = IndexBundle::from_bytes(&artifact.bytes).unwrap();
    for query in ["antenna", "calibration", "install*", "missing"] {
        assert_eq!(
            reloaded.index.search(query),
            artifact.to_bundle().unwrap().index.search(query),
            "query {query}"
        );
    }
    assert_eq!(
        reloaded.store.get("/docs/antennas").unwrap().title,
        "Antenna Alignment"
    );
}

#[test]
fn test_site_directory_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    write_page(
        dir.path(),
        "hello/1.0/index.html",
        "<article><h1>Hello 1.0</h1>spinnakers</article>",
    );
    write_page(
        dir.path(),
        "hello/1.5/index.html",
        "<article><h1>Hello 1.5</h1>mainsails</article>",
    );

    let catalog = SiteCatalog::scan(dir.path()).unwrap();
    let config = GeneratorConfig {
        index_latest_only: true,
        ..Default::default()
    };
    let (artifact, stats) = IndexGenerator::new(config)
        .unwrap()
        .generate_artifact(&catalog)
        .unwrap();

    assert_eq!(stats.pages_total, 2);
    assert_eq!(stats.documents, 1);

    let bundle = IndexBundle::from_bytes(&artifact.bytes).unwrap();
    assert!(bundle.index.search("spinnakers").is_empty());
    let hits = bundle.index.search("mainsails");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].key, "/hello/1.5/index.html");
}

#[test]
fn test_written_artifact_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    write_page(
        dir.path(),
        "guides/setup.html",
        "<article><h1>Setup</h1>configure the widget</article>",
    );

    let catalog = SiteCatalog::scan(dir.path()).unwrap();
    let (artifact, _) = IndexGenerator::new(GeneratorConfig::default())
        .unwrap()
        .generate_artifact(&catalog)
        .unwrap();

    let out = dir.path().join(&artifact.out_path);
    fs::write(&out, &artifact.bytes).unwrap();

    let bundle = IndexBundle::from_bytes(&fs::read(&out).unwrap()).unwrap();
    assert_eq!(bundle.index.search("widget").len(), 1);
    assert_eq!(bundle.store.get("/guides/setup.html").unwrap().title, "Setup");
}
