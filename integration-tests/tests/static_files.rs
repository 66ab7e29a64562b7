use integration_tests::harness::TestServer;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, IF_MODIFIED_SINCE, LAST_MODIFIED, LOCATION};
use std::fs;
use tempfile::tempdir;

/// Serves index.html for the site root
#[test]
fn serves_index_html_for_root() {
    let srv = TestServer::start();

    let res = srv.get("/").send().unwrap();

    let status = res.status();
    let body = res.text().unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Simulation</h1>"), "unexpected body: {body}");
}

#[test]
fn serves_files_verbatim_with_guessed_type() {
    let srv = TestServer::start();

    let res = srv.get("/js/simulation.js").send().unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(
        content_type.contains("javascript"),
        "unexpected content type: {content_type}"
    );

    let expected = fs::read(integration_tests::harness::fixtures_root().join("js/simulation.js"))
        .unwrap();
    assert_eq!(res.bytes().unwrap().to_vec(), expected);
}

#[test]
fn falls_back_to_index_htm() {
    let srv = TestServer::start();

    let res = srv.get("/docs/").send().unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().unwrap().trim(), "<p>docs</p>");
}

#[test]
fn missing_file_returns_404_page() {
    let srv = TestServer::start();

    let res = srv.get("/does-not-exist.js").send().unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.text().unwrap().contains("Error code: 404"));
}

#[test]
fn path_traversal_is_rejected() {
    let srv = TestServer::start();

    // Encoded slashes survive client-side URL normalization.
    let res = srv.get("/data/..%2f..%2f..%2fCargo.toml").send().unwrap();

    assert!(
        res.status().is_client_error(),
        "expected client error, got {}",
        res.status()
    );
}

#[test]
fn directory_without_slash_redirects() {
    let srv = TestServer::start();

    let res = srv.get("/data").send().unwrap();

    assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(res.headers()[LOCATION], "/data/");
}

#[test]
fn directory_listing_renders_entries() {
    let srv = TestServer::start();

    let res = srv.get("/data/").send().unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().unwrap();
    assert!(body.contains("Directory listing for /data/"), "{body}");
    assert!(body.contains("<a href=\"nested/\">nested/</a>"), "{body}");
    assert!(body.contains("<a href=\"params.json\">params.json</a>"), "{body}");
}

#[test]
fn directory_listing_can_be_disabled() {
    let srv = TestServer::start_with(&integration_tests::harness::fixtures_root(), |cfg| {
        cfg.static_files.directory_listing = false;
    });

    let res = srv.get("/data/").send().unwrap();

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[test]
fn head_request_returns_headers_without_body() {
    let srv = TestServer::start();

    let get_len = srv.get("/style.css").send().unwrap().headers()[CONTENT_LENGTH].clone();

    let res = srv.head("/style.css").send().unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[CONTENT_LENGTH], get_len);
    assert!(res.bytes().unwrap().is_empty());
}

#[test]
fn unsupported_method_returns_501() {
    let srv = TestServer::start();

    let res = srv
        .request(reqwest::Method::POST, "/index.html")
        .body("x=1")
        .send()
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_IMPLEMENTED);
}

#[test]
fn if_modified_since_returns_304() {
    let srv = TestServer::start();

    let initial = srv.get("/style.css").send().unwrap();
    let last_modified = initial.headers()[LAST_MODIFIED].to_str().unwrap().to_string();

    let res = srv
        .get("/style.css")
        .header(IF_MODIFIED_SINCE, last_modified)
        .send()
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_MODIFIED);
    assert!(res.text().unwrap().is_empty());
}

#[test]
fn large_files_are_streamed_in_full() {
    let dir = tempdir().unwrap();
    let payload: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(dir.path().join("frames.bin"), &payload).unwrap();

    let srv = TestServer::start_with(dir.path(), |cfg| {
        cfg.static_files.small_file_threshold = 1024;
    });

    let res = srv.get("/frames.bin").send().unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[CONTENT_LENGTH], "200000");
    assert_eq!(res.bytes().unwrap().to_vec(), payload);
}

#[test]
fn edits_are_visible_on_next_request() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("state.json");
    fs::write(&file, "{\"tick\":1}").unwrap();

    let srv = TestServer::start_with(dir.path(), |_| {});

    assert_eq!(srv.get("/state.json").send().unwrap().text().unwrap(), "{\"tick\":1}");

    fs::write(&file, "{\"tick\":2}").unwrap();

    assert_eq!(srv.get("/state.json").send().unwrap().text().unwrap(), "{\"tick\":2}");
}
