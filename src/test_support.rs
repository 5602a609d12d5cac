//! Test doubles: an in-process FPFSS index, a scripted host and a log sink.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::Config;
use crate::curation::meta::META_FILE;
use crate::curation::{CurationPaths, LoadedCuration};
use crate::host::{Host, PickRequest};

/// A request received by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }
}

/// HTTP server answering every request with one canned response.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub async fn spawn(status: u16, body: impl Into<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let body = body.into();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let body = body.clone();
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    serve(stream, status, &body, &recorded).await;
                });
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn serve(
    mut stream: TcpStream,
    status: u16,
    body: &str,
    recorded: &Mutex<Vec<RecordedRequest>>,
) -> Option<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let headers: HashMap<String, String> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_lowercase(), v.trim().to_string()))
        .collect();

    let content_length: usize = headers
        .get("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    // Recorded before responding so callers see it once their request returns.
    recorded.lock().unwrap().push(RecordedRequest {
        method,
        path,
        headers,
        body: String::from_utf8_lossy(&buf[header_end..]).to_string(),
    });

    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await.ok()?;
    stream.shutdown().await.ok()
}

/// A message shown through [`MockHost`].
#[derive(Debug, Clone)]
pub struct ShownMessage {
    pub title: String,
    pub message: String,
    pub buttons: Vec<String>,
}

/// Host that answers pickers and buttons from a script.
pub struct MockHost {
    selection: Option<PathBuf>,
    token: Option<String>,
    button: usize,
    messages: Mutex<Vec<ShownMessage>>,
}

impl MockHost {
    pub fn new(selection: Option<PathBuf>, token: Option<&str>, button: usize) -> Self {
        Self {
            selection,
            token: token.map(str::to_string),
            button,
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<ShownMessage> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Host for MockHost {
    async fn pick(&self, _request: &PickRequest) -> Option<PathBuf> {
        self.selection.clone()
    }

    async fn show_message(&self, title: &str, message: &str, buttons: &[&str]) -> usize {
        self.messages.lock().unwrap().push(ShownMessage {
            title: title.to_string(),
            message: message.to_string(),
            buttons: buttons.iter().map(|b| b.to_string()).collect(),
        });
        self.button.min(buttons.len().saturating_sub(1))
    }

    async fn access_token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// A Flashpoint install in a temp dir with one working curation.
pub struct CurationFixture {
    dir: TempDir,
    pub config: Config,
    pub curation: LoadedCuration,
}

impl CurationFixture {
    pub const FOLDER: &'static str = "test-curation";

    pub fn new(base_url: &str) -> Self {
        Self::build(base_url, None)
    }

    pub fn with_meta(base_url: &str, meta: &str) -> Self {
        Self::build(base_url, Some(meta))
    }

    fn build(base_url: &str, meta: Option<&str>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let paths = CurationPaths::new(dir.path(), Self::FOLDER).unwrap();
        fs::create_dir_all(paths.content_dir()).unwrap();
        if let Some(meta) = meta {
            fs::write(paths.curation_dir().join(META_FILE), meta).unwrap();
        }

        let mut config = Config::default();
        config.flashpoint.path = dir.path().to_path_buf();
        config.fpfss.base_url = base_url.to_string();
        config.options.timeout_seconds = 5;

        let curation = LoadedCuration::load(paths, Self::FOLDER).unwrap();

        Self {
            dir,
            config,
            curation,
        }
    }

    /// Write a file below `content/`.
    pub fn write_content(&self, relative: &str, bytes: &[u8]) -> PathBuf {
        let path = self.curation.paths.content_dir().join(relative);
        write_file(&path, bytes);
        path
    }

    /// Create a directory below `content/`.
    pub fn make_content_dir(&self, relative: &str) -> PathBuf {
        let path = self.curation.paths.content_dir().join(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Write a file next to the install, outside every curation.
    pub fn write_outside(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        write_file(&path, bytes);
        path
    }
}

fn write_file(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, bytes).unwrap();
}

/// Collects formatted log lines written on the current thread.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Route this thread's `tracing` output into the capture until the guard drops.
    pub fn install(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).to_string()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
