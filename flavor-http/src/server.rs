use futures::future::BoxFuture;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::select;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, info, trace, warn};

pub const READ_BUFFER_SIZE: usize = 8192;
pub const READ_TIMEOUT: Duration = Duration::from_secs(10);

pub type AssetsRes = HashMap<String, Response>;

#[derive(Clone, PartialEq, Debug)]
pub struct Response {
    pub head: Vec<u8>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn ok(content_type: &str, body: Vec<u8>) -> Self {
        let content_length = body.len();
        let head = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: {content_type}\r\ncontent-length: {content_length}\r\n\r\n"
        );
        Self {
            head: head.into_bytes(),
            body,
        }
    }

    pub fn empty(status: &str) -> Self {
        Self {
            head: format!("HTTP/1.1 {status}\r\ncontent-length: 0\r\n\r\n").into_bytes(),
            body: Vec::new(),
        }
    }
}

pub fn content_type(extension: &str) -> Option<&'static str> {
    let content_type = match extension {
        "html" => "text/html;charset=UTF-8",
        "css" => "text/css",
        "js" => "text/javascript",
        "wasm" => "application/wasm",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "webp" => "image/webp",
        "ico" => "image/x-icon",
        "jpg" | "jpeg" => "image/jpeg",
        "json" => "application/json",
        "txt" => "text/plain;charset=UTF-8",
        _ => return None,
    };
    Some(content_type)
}

/// Prebuilt responses for the whole site.
#[derive(Clone, Debug)]
pub struct Responses {
    pub assets: AssetsRes,
    pub index: Response,
    pub not_found: Response,
    pub method_not_allowed: Response,
}

impl Responses {
    pub async fn load(assets_root_dir: &Path, index_path: &Path) -> Result<Self, ServerErr> {
        let index_bytes = tokio::fs::read(index_path)
            .await
            .map_err(|err| ServerErr::ReadIndex(index_path.to_path_buf(), err))?;
        let assets = get_assets_res(assets_root_dir).await?;
        debug!("loaded {} assets from {}", assets.len(), assets_root_dir.display());

        Ok(Self::new(assets, index_bytes))
    }

    pub fn new(assets: AssetsRes, index_bytes: Vec<u8>) -> Self {
        Self {
            assets,
            index: Response::ok("text/html;charset=UTF-8", index_bytes),
            not_found: Response::empty("404 Not Found"),
            method_not_allowed: Response::empty("405 Method Not Allowed"),
        }
    }

    /// Assets by path; a missing file with a known asset extension is a 404, every
    /// other path gets the client side app shell.
    pub fn route(&self, method: &str, path: &str) -> &Response {
        if method != "GET" && method != "HEAD" {
            return &self.method_not_allowed;
        }

        let path = path.split(['?', '#']).next().unwrap_or_default();
        if let Some(res) = self.assets.get(path) {
            return res;
        }

        let is_asset = Path::new(path)
            .extension()
            .and_then(|extension| extension.to_str())
            .and_then(content_type)
            .is_some();
        if is_asset {
            &self.not_found
        } else {
            &self.index
        }
    }
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerErr> {
    TcpListener::bind(addr)
        .await
        .map_err(|err| ServerErr::Bind(addr, err))
}

pub async fn create_server(
    cancelation_token: CancellationToken,
    listener: TcpListener,
    responses: Responses,
) -> Result<(), ServerErr> {
    let responses = Arc::new(responses);
    let tracker = TaskTracker::new();

    match listener.local_addr() {
        Ok(addr) => info!("listening on http://{}", addr),
        Err(err) => warn!("listening on unknown address: {}", err),
    }

    loop {
        select! {
            result = listener.accept() => {
                let (stream, addr) = match result {
                    Ok(v) => v,
                    Err(err) => {
                        debug!("tcp accept err: {err}");
                        continue;
                    }
                };
                trace!("connected: {}", addr);

                let responses = responses.clone();
                let cancelation_token = cancelation_token.clone();
                tracker.spawn(async move {
                    handle_res(stream, &responses, cancelation_token).await;
                });
            }
            _ = cancelation_token.cancelled() => {
                break;
            }
        }
    }

    tracker.close();
    tracker.wait().await;
    info!("server stopped");

    Ok(())
}

pub fn get_assets_res(assets_dir: &Path) -> BoxFuture<'static, Result<AssetsRes, ServerErr>> {
    let assets_dir = assets_dir.to_path_buf();
    Box::pin(async move {
        let mut responses: AssetsRes = HashMap::new();
        debug!("reading {}", assets_dir.display());

        let mut dir = tokio::fs::read_dir(&assets_dir)
            .await
            .map_err(|err| ServerErr::ReadDir(assets_dir.clone(), err))?;

        while let Some(entry) = dir.next_entry().await? {
            let kind = entry.file_type().await?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                warn!("skipping non utf-8 asset name {:?}", name);
                continue;
            };

            if kind.is_dir() {
                let sub_responses = get_assets_res(&entry.path()).await?;
                for (sub_key, sub_res) in sub_responses {
                    responses.insert(format!("/{}{}", name, sub_key), sub_res);
                }
            } else if kind.is_file() {
                let Some(content_type) = Path::new(name)
                    .extension()
                    .and_then(|extension| extension.to_str())
                    .and_then(content_type)
                else {
                    trace!("skipping asset {}", name);
                    continue;
                };

                let bytes = tokio::fs::read(entry.path()).await?;
                responses.insert(format!("/{}", name), Response::ok(content_type, bytes));
            }
        }

        Ok(responses)
    })
}

async fn handle_res(
    mut stream: TcpStream,
    responses: &Responses,
    cancelation_token: CancellationToken,
) {
    let mut buff: [u8; READ_BUFFER_SIZE] = [0; READ_BUFFER_SIZE];
    let read = select! {
        read = tokio::time::timeout(READ_TIMEOUT, stream.read(&mut buff)) => read,
        _ = cancelation_token.cancelled() => {
            trace!("dropping idle connection on shutdown");
            return;
        }
    };
    let size = match read {
        Ok(Ok(0)) => return,
        Ok(Ok(size)) => size,
        Ok(Err(err)) => {
            debug!("tcp read err: {err}");
            return;
        }
        Err(_) => {
            debug!("tcp read timed out after {:?}", READ_TIMEOUT);
            return;
        }
    };

    let mut headers = [httparse::EMPTY_HEADER; 64];
    let mut req = httparse::Request::new(&mut headers);
    if let Err(err) = req.parse(&buff[..size]) {
        debug!("request parse err: {}", err);
        return;
    }

    let (Some(method), Some(path)) = (req.method, req.path) else {
        debug!("method or path not included");
        return;
    };
    trace!("{} {}", method, path);

    let res = responses.route(method, path);
    let mut result = stream.write_all(&res.head).await;
    if result.is_ok() && method != "HEAD" {
        result = stream.write_all(&res.body).await;
    }

    if let Err(err) = result {
        debug!("writing to stream err: {}", err);
    }
}

#[derive(Error, Debug)]
pub enum ServerErr {
    #[error("failed to read assets dir {0}: {1}")]
    ReadDir(PathBuf, std::io::Error),

    #[error("failed to read index {0}: {1}")]
    ReadIndex(PathBuf, std::io::Error),

    #[error("failed to bind {0}: {1}")]
    Bind(SocketAddr, std::io::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod server_tests {
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::str::FromStr;
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio_util::sync::CancellationToken;

    use super::{bind, content_type, create_server, get_assets_res, Response, Responses};

    fn init_logger() {
        let _ = tracing_subscriber::fmt()
            .event_format(
                tracing_subscriber::fmt::format()
                    .with_file(true)
                    .with_line_number(true),
            )
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or(tracing_subscriber::EnvFilter::from_str("flavor_http=trace").unwrap()),
            )
            .try_init();
    }

    async fn site_dir() -> PathBuf {
        let root = std::env::temp_dir().join(format!("flavor-http-{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(root.join("pkg")).await.unwrap();
        tokio::fs::create_dir_all(root.join("assets/icons")).await.unwrap();
        tokio::fs::write(root.join("pkg/flavor.js"), b"export default 1;").await.unwrap();
        tokio::fs::write(root.join("pkg/flavor.wasm"), [0u8, 97, 115, 109]).await.unwrap();
        tokio::fs::write(root.join("assets/icons/discord.svg"), b"<svg/>").await.unwrap();
        tokio::fs::write(root.join("favicon.ico"), [1u8, 2, 3]).await.unwrap();
        tokio::fs::write(root.join("NOTES.md"), b"# notes").await.unwrap();
        tokio::fs::write(root.join("index.html"), b"<html>shell</html>").await.unwrap();
        root
    }

    fn responses() -> Responses {
        let mut assets = HashMap::new();
        assets.insert(
            String::from("/pkg/flavor.js"),
            Response::ok("text/javascript", b"js".to_vec()),
        );
        Responses::new(assets, b"<html>shell</html>".to_vec())
    }

    #[test]
    fn content_types() {
        assert_eq!(content_type("wasm"), Some("application/wasm"));
        assert_eq!(content_type("svg"), Some("image/svg+xml"));
        assert_eq!(content_type("jpeg"), content_type("jpg"));
        assert_eq!(content_type("md"), None);
    }

    #[test]
    fn response_head() {
        let res = Response::ok("text/css", b"body{}".to_vec());
        assert_eq!(
            String::from_utf8(res.head).unwrap(),
            "HTTP/1.1 200 OK\r\ncontent-type: text/css\r\ncontent-length: 6\r\n\r\n"
        );
    }

    #[test]
    fn route() {
        let responses = responses();

        assert_eq!(responses.route("GET", "/pkg/flavor.js").body, b"js");
        assert_eq!(responses.route("HEAD", "/pkg/flavor.js?v=2").body, b"js");
        assert_eq!(responses.route("GET", "/").body, b"<html>shell</html>");
        assert_eq!(responses.route("GET", "/guild/flavor#about").body, b"<html>shell</html>");
        assert_eq!(responses.route("GET", "/pkg/missing.js"), &responses.not_found);
        assert_eq!(responses.route("POST", "/"), &responses.method_not_allowed);
    }

    #[tokio::test]
    async fn assets_from_dir() {
        init_logger();

        let root = site_dir().await;
        let assets = get_assets_res(&root).await.unwrap();

        let mut keys = assets.keys().cloned().collect::<Vec<String>>();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "/assets/icons/discord.svg",
                "/favicon.ico",
                "/index.html",
                "/pkg/flavor.js",
                "/pkg/flavor.wasm",
            ]
        );

        let wasm = &assets["/pkg/flavor.wasm"];
        assert_eq!(wasm.body, vec![0u8, 97, 115, 109]);
        assert!(String::from_utf8_lossy(&wasm.head).contains("content-type: application/wasm"));

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn missing_dirs() {
        init_logger();

        let missing = Path::new("/definitely/not/a/flavor/site");
        assert!(get_assets_res(missing).await.is_err());
        assert!(Responses::load(missing, &missing.join("index.html")).await.is_err());
    }

    #[tokio::test]
    async fn serve_and_shutdown() {
        init_logger();

        let root = site_dir().await;
        let responses = Responses::load(&root, &root.join("index.html")).await.unwrap();
        let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let cancelation_token = CancellationToken::new();
        let server = tokio::spawn(create_server(cancelation_token.clone(), listener, responses));

        let get = |path: &'static str| async move {
            let mut stream = TcpStream::connect(addr).await.unwrap();
            stream
                .write_all(format!("GET {path} HTTP/1.1\r\nHost: localhost\r\n\r\n").as_bytes())
                .await
                .unwrap();
            let mut res = String::new();
            stream.read_to_string(&mut res).await.unwrap();
            res
        };

        let js = get("/pkg/flavor.js").await;
        assert!(js.starts_with("HTTP/1.1 200 OK\r\ncontent-type: text/javascript"));
        assert!(js.ends_with("export default 1;"));

        let shell = get("/some/page").await;
        assert!(shell.contains("text/html"));
        assert!(shell.ends_with("<html>shell</html>"));

        let missing = get("/pkg/gone.wasm").await;
        assert!(missing.starts_with("HTTP/1.1 404 Not Found"));

        cancelation_token.cancel();
        server.await.unwrap().unwrap();

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    async fn send_raw(addr: std::net::SocketAddr, req: &[u8]) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(req).await.unwrap();
        let mut res = String::new();
        stream.read_to_string(&mut res).await.unwrap();
        res
    }

    #[tokio::test]
    async fn head_garbage_and_post_on_the_wire() {
        init_logger();

        let root = site_dir().await;
        let responses = Responses::load(&root, &root.join("index.html")).await.unwrap();
        let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let cancelation_token = CancellationToken::new();
        let server = tokio::spawn(create_server(cancelation_token.clone(), listener, responses));

        let head = send_raw(addr, b"HEAD /pkg/flavor.js HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
        assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(head.contains("content-length: 17\r\n"));
        assert!(head.ends_with("\r\n\r\n"));
        assert!(!head.contains("export default"));

        let garbage = send_raw(addr, b"\x00\x01 not http at all\r\n\r\n").await;
        assert!(garbage.is_empty());

        let post = send_raw(addr, b"POST / HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
        assert!(post.starts_with("HTTP/1.1 405 Method Not Allowed\r\n"));

        cancelation_token.cancel();
        server.await.unwrap().unwrap();

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn idle_client_does_not_block_shutdown() {
        init_logger();

        let responses = responses();
        let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let cancelation_token = CancellationToken::new();
        let server = tokio::spawn(create_server(cancelation_token.clone(), listener, responses));

        let mut idle = TcpStream::connect(addr).await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        cancelation_token.cancel();
        let result = tokio::time::timeout(Duration::from_secs(3), server).await;
        assert!(result.is_ok(), "server did not stop with an idle client connected");
        result.unwrap().unwrap().unwrap();

        let mut res = Vec::new();
        idle.read_to_end(&mut res).await.unwrap();
        assert!(res.is_empty());
    }
}
