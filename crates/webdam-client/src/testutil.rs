//! Scripted HTTP server for exercising client flows in tests.
//!
//! Serves a fixed sequence of canned responses, one connection per
//! request, and records the raw text of every request it accepts. The
//! literal `{{base}}` inside a canned body is replaced with the server's
//! own base URL, so a response can point the client back at the server
//! (presigned upload URLs do this).

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub struct CannedResponse {
    status: &'static str,
    content_type: &'static str,
    body: String,
}

impl CannedResponse {
    pub fn json(status: &'static str, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.into(),
        }
    }

    pub fn with_content_type(
        status: &'static str,
        content_type: &'static str,
        body: impl Into<String>,
    ) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }
}

pub struct ScriptedServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ScriptedServer {
    /// Bind a local server that answers `responses` in order, then stops
    /// accepting connections.
    pub async fn start(responses: Vec<CannedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind scripted server");
        let address = listener.local_addr().expect("scripted server address");
        let base_url = format!("http://{address}");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        let base = base_url.clone();
        tokio::spawn(async move {
            for response in responses {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let request = read_request(&mut socket).await;
                recorded.lock().expect("requests lock").push(request);

                let body = response.body.replace("{{base}}", &base);
                let payload = format!(
                    "HTTP/1.1 {}\r\ncontent-type: {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    response.status,
                    response.content_type,
                    body.len(),
                    body
                );
                let _ = socket.write_all(payload.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self { base_url, requests }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of requests accepted so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }

    /// Raw text of the `index`th request, headers and body included.
    /// Header names appear lowercased, the way the client sends them.
    pub fn request(&self, index: usize) -> String {
        self.requests.lock().expect("requests lock")[index].clone()
    }
}

/// Read one HTTP/1.1 request: headers, then as many body bytes as the
/// `content-length` header promises.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 4096];

    loop {
        let Ok(read) = socket.read(&mut chunk).await else {
            break;
        };
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);

        if let Some(headers_end) = headers_end(&buffer) {
            let head = String::from_utf8_lossy(&buffer[..headers_end]).to_lowercase();
            if buffer.len() >= headers_end + 4 + content_length(&head) {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buffer).into_owned()
}

fn headers_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|window| window == b"\r\n\r\n")
}

fn content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}
