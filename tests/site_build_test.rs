use httpmock::prelude::*;
use vpm_site::domain::ports::ConfigProvider;
use vpm_site::{build_site, TomlConfig};
use tempfile::TempDir;

const SITE_CONFIG: &str = r#"{
    "commissions": {"services": ["Avatar Rigging", "World Optimization"]},
    "social": {"discord": "https://discord.gg/valen", "vrchat": "https://vrchat.com/home/user/valen"}
}"#;

const PRODUCTS: &str = r#"{"products": [
    {"id": "mirror", "name": "Smart Mirror", "description": "A toggleable mirror", "thumbnail": "img/mirror.webp",
     "features": ["Quest compatible", "Udon synced"], "jinxxyLink": "https://jinxxy.com/valen/mirror"},
    {"id": "lights", "name": "Light Panel", "description": "Light controls", "thumbnail": "img/lights.webp",
     "gumroadLink": "https://valen.gumroad.com/l/lights"}
]}"#;

const LISTING: &str = r#"{
    "url": "https://valenvrc.com/index.json",
    "author": {"name": "Valen", "url": "https://valenvrc.com"},
    "packages": [
        {"name": "com.valen.WorldSetupTools", "releases": ["https://valenvrc.com/wst-1.2.0.zip", "https://valenvrc.com/wst-1.1.0.zip"]},
        {"name": "com.valen.MirrorToggle", "releases": []}
    ]
}"#;

const PORTFOLIO: &str = r#"{
    "workedFor": [{"id": "acme", "name": "Acme", "logo": "acme.png",
                   "projects": [{"url": "https://vrchat.com/w/1", "image": "w1.png", "name": "Night City"}]}],
    "personalProjects": [],
    "others": [],
    "reviews": [{"text": "Fast and clean work", "author": "Kai", "image": "kai.png"}]
}"#;

fn config_for(source: String, output: &TempDir) -> TomlConfig {
    let mut config = TomlConfig::default();
    config.source.base = source;
    config.output.path = output.path().to_str().unwrap().to_string();
    config
}

fn read(output: &TempDir, path: &str) -> String {
    std::fs::read_to_string(output.path().join(path)).unwrap()
}

fn serve<'a>(server: &'a MockServer, path: &str, body: &'static str) -> httpmock::Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(200)
            .header("Content-Type", "application/json")
            .body(body);
    })
}

#[tokio::test]
async fn test_end_to_end_build_over_http() {
    let output = TempDir::new().unwrap();
    let server = MockServer::start();

    let config_mock = server.mock(|when, then| {
        when.method(GET).path("/data/site-config.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(SITE_CONFIG);
    });
    let products_mock = serve(&server, "/data/products.json", PRODUCTS);
    let listing_mock = serve(&server, "/source.json", LISTING);
    let portfolio_mock = serve(&server, "/data/portfolio.json", PORTFOLIO);

    let config = config_for(server.base_url(), &output);
    let report = build_site(&config).await.unwrap();

    listing_mock.assert();
    products_mock.assert();
    portfolio_mock.assert();
    // both pages read the site config
    config_mock.assert_hits(2);

    let files = report.files();
    assert!(files.contains(&"index.html".to_string()));
    assert!(files.contains(&"data/packages.json".to_string()));
    assert!(files.contains(&"portfolio.html".to_string()));
    assert!(report.archive.is_none());

    let index = read(&output, "index.html");
    assert!(index.contains("Avatar Rigging"));
    assert!(index.contains("World Setup Tools"));
    assert!(index.contains("Mirror Toggle"));
    assert!(index.contains("Smart Mirror"));
    assert!(index.contains("Quest compatible"));
    assert_eq!(index.matches("class=\"product-thumbnail active\"").count(), 1);

    let packages: serde_json::Value = serde_json::from_str(&read(&output, "data/packages.json")).unwrap();
    assert_eq!(packages[0]["displayName"], "World Setup Tools");
    assert_eq!(packages[0]["version"], "Latest");
    assert_eq!(packages[0]["zipUrl"], "https://valenvrc.com/wst-1.2.0.zip");
    assert_eq!(packages[1]["version"], "N/A");
    assert!(packages[1]["zipUrl"].is_null());

    let portfolio = read(&output, "portfolio.html");
    assert!(portfolio.contains("Night City"));
    assert!(portfolio.contains("review-avatar"));
    assert!(portfolio.contains(">Discord</a>"));
    assert!(portfolio.contains(">VRChat</a>"));
}

#[tokio::test]
async fn test_site_config_failure_falls_back_to_default_services() {
    let output = TempDir::new().unwrap();
    let server = MockServer::start();

    let config_mock = server.mock(|when, then| {
        when.method(GET).path("/data/site-config.json");
        then.status(500);
    });
    serve(&server, "/data/products.json", PRODUCTS);
    serve(&server, "/source.json", LISTING);
    serve(&server, "/data/portfolio.json", PORTFOLIO);

    let config = config_for(server.base_url(), &output);
    build_site(&config).await.unwrap();
    config_mock.assert_hits(2);

    let index = read(&output, "index.html");
    for service in config.fallback_services() {
        assert!(index.contains(service.as_str()), "missing {}", service);
    }
    // products are discarded together with the config
    assert!(!index.contains("Smart Mirror"));
    // the gallery does not depend on the config pair
    assert!(index.contains("World Setup Tools"));

    // portfolio has no fallback: the shell is written untouched
    let portfolio = read(&output, "portfolio.html");
    assert!(!portfolio.contains("Night City"));
    assert!(!portfolio.contains("brand-section"));
}

#[tokio::test]
async fn test_listing_failure_builds_empty_gallery() {
    let output = TempDir::new().unwrap();
    let server = MockServer::start();

    serve(&server, "/data/site-config.json", SITE_CONFIG);
    serve(&server, "/data/products.json", PRODUCTS);
    serve(&server, "/data/portfolio.json", PORTFOLIO);
    let listing_mock = server.mock(|when, then| {
        when.method(GET).path("/source.json");
        then.status(404);
    });

    let config = config_for(server.base_url(), &output);
    build_site(&config).await.unwrap();

    // one attempt, no retry
    listing_mock.assert_hits(1);

    let index = read(&output, "index.html");
    assert!(!index.contains("vpm-package-card"));
    assert!(index.contains("Avatar Rigging"));
    assert_eq!(read(&output, "data/packages.json"), "[]");
}

#[tokio::test]
async fn test_build_from_local_directory_with_archive() {
    let source = TempDir::new().unwrap();
    std::fs::create_dir_all(source.path().join("data")).unwrap();
    std::fs::write(source.path().join("data/site-config.json"), SITE_CONFIG).unwrap();
    std::fs::write(source.path().join("data/products.json"), PRODUCTS).unwrap();
    std::fs::write(source.path().join("data/portfolio.json"), PORTFOLIO).unwrap();
    std::fs::write(source.path().join("source.json"), LISTING).unwrap();

    let output = TempDir::new().unwrap();
    let mut config = config_for(source.path().to_str().unwrap().to_string(), &output);
    config.output.archive = true;

    let report = build_site(&config).await.unwrap();
    assert_eq!(report.archive.as_deref(), Some("site.zip"));

    let zip_data = std::fs::read(output.path().join("site.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
    let file_names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();

    assert_eq!(archive.len(), 3);
    assert!(file_names.contains(&"index.html".to_string()));
    assert!(file_names.contains(&"data/packages.json".to_string()));
    assert!(file_names.contains(&"portfolio.html".to_string()));
}
