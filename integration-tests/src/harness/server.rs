use crate::harness::init_test_tracing;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::redirect::Policy;
use simhost_core::conf::{ConfigOverrides, SiteConfig, load_config};
use simhost_core::server::build_pingora_server;
use std::net::TcpStream;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

/// Handle to a running simhost test server.
pub struct TestServer {
    base_url: String,
    client: Client,
}

impl TestServer {
    /// Serve the checked-in fixture site with default settings.
    pub fn start() -> Self {
        Self::start_with(&fixtures_root(), |_| {})
    }

    /// Serve `root`, letting the caller adjust the config before the server is built.
    ///
    /// Ports are allocated dynamically, so this is safe to call from parallel tests.
    pub fn start_with(root: &Path, customize: impl FnOnce(&mut SiteConfig)) -> Self {
        // Initialize tracing (this must happen first).
        init_test_tracing();

        // Allocate a free port for the server.
        let listen_port = free_port();

        let overrides = ConfigOverrides {
            listen: Some(format!("127.0.0.1:{listen_port}")),
            root: Some(root.to_path_buf()),
            threads: Some(2),
            quiet: true,
            ..Default::default()
        };

        let mut cfg = load_config(None, &overrides).expect("failed to load test config");
        customize(&mut cfg);

        let server = build_pingora_server(&cfg).expect("failed to build simhost server");

        // Run server in background thread
        thread::spawn(move || {
            server.run_forever();
        });

        let base_url = format!("http://127.0.0.1:{listen_port}");

        // Wait for server to accept connections
        wait_for_server(&base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(2))
            .redirect(Policy::none())
            .build()
            .expect("failed to build client");

        Self { base_url, client }
    }

    /// Convenience helper for GET requests.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    pub fn head(&self, path: &str) -> RequestBuilder {
        self.client.head(self.url(path))
    }

    pub fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

pub fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("public")
}

/// Poll until the server accepts connections (or panic).
fn wait_for_server(listen_addr: &str) {
    let addr = listen_addr.strip_prefix("http://").unwrap_or(listen_addr);

    let deadline = Instant::now() + Duration::from_secs(2);

    loop {
        match TcpStream::connect(addr) {
            Ok(_) => return,
            Err(_) => {
                if Instant::now() > deadline {
                    panic!("server failed to start at {}", listen_addr);
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    }
}

/// Allocate a free port on localhost.
/// This is required to avoid port collisions when running tests in parallel.
fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
