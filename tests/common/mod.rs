// Common test utilities and fixtures

use docindex::core::catalog::MemoryCatalog;
use docindex::core::types::Page;
use std::collections::BTreeMap;

/// Build a page with the standard fixture component/version
#[allow(dead_code)] // Used across integration test modules
pub fn page(markup: &str, url: &str) -> Page {
    page_in("hello", "1.0", markup, url)
}

/// Build a page for a specific component and version
#[allow(dead_code)] // Used across integration test modules
pub fn page_in(component: &str, version: &str, markup: &str, url: &str) -> Page {
    Page {
        markup: markup.to_string(),
        component: component.to_string(),
        version: version.to_string(),
        stem: url.rsplit('/').next().unwrap_or("index").to_string(),
        published_url: Some(url.to_string()),
        attributes: BTreeMap::new(),
    }
}

/// Catalog over a fixed page list
#[allow(dead_code)] // Used across integration test modules
pub fn catalog_of(pages: Vec<Page>) -> MemoryCatalog {
    let mut catalog = MemoryCatalog::new();
    for p in pages {
        catalog.add_page(p);
    }
    catalog
}

/// A realistic documentation page with title, anchored sections and
/// site scaffolding around the article region
#[allow(dead_code)] // Used across integration test modules
pub fn doc_page_markup() -> &'static str {
    r#"<!DOCTYPE html>
<html>
<head><title>Antennas</title></head>
<body>
  <header><nav>Home / Docs</nav></header>
  <article>
    <h1>Antenna Alignment</h1>
    <p>Point the antenna toward the transmitter.</p>
    <h2 id="calibration">Calibration</h2>
    <p>Run the calibration wizard before first use.</p>
    <h2 id="troubleshooting">Troubleshooting</h2>
    <p>Check the cable if the signal drops.</p>
    <nav class="pagination"><a href="/next">Next: Amplifiers</a></nav>
  </article>
  <footer>Copyright notice</footer>
</body>
</html>"#
}
