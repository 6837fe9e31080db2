//! In-process HTTP server that impersonates the device for tests.
use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub(crate) fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Route {
    method: &'static str,
    path: &'static str,
    status: u16,
    content_type: &'static str,
    body: String,
    stall: bool,
}

impl Route {
    pub(crate) fn json(method: &'static str, path: &'static str, body: &str) -> Self {
        Self::new(method, path, 200, "application/json", body)
    }

    pub(crate) fn text(method: &'static str, path: &'static str, body: &str) -> Self {
        Self::new(method, path, 200, "text/plain", body)
    }

    pub(crate) fn new(
        method: &'static str,
        path: &'static str,
        status: u16,
        content_type: &'static str,
        body: &str,
    ) -> Self {
        Self {
            method,
            path,
            status,
            content_type,
            body: body.to_owned(),
            stall: false,
        }
    }

    /// Accepts the request and never answers, holding the connection for
    /// [`STALL_FOR`].
    pub(crate) fn stalled(method: &'static str, path: &'static str) -> Self {
        Self {
            stall: true,
            ..Self::new(method, path, 200, "text/plain", "")
        }
    }
}

pub(crate) const STALL_FOR: Duration = Duration::from_secs(3);

pub(crate) fn healthy_routes() -> Vec<Route> {
    vec![
        Route::json(
            "GET",
            "/status",
            r#"{"wifi_connected":true,"ip":"192.168.10.42","uptime_ms":1200}"#,
        ),
        Route::json(
            "GET",
            "/read",
            r#"{"ok":true,"location":"lab","temperature_c":21.5,"humidity_pct":40.25}"#,
        ),
        Route::json("GET", "/config", r#"{"device_location":"lab"}"#),
        Route::text("GET", "/metrics", "uptime_ms 1200\nposts_ok 3\n"),
        Route::json("POST", "/config", r#"{"device_location":"bench"}"#),
        Route::json("POST", "/task", r#"{"ok":true}"#),
        Route::json("POST", "/config/save", r#"{"ok":true,"persisted":true}"#),
        Route::json("POST", "/config/discard", r#"{"ok":true,"source":"nvs"}"#),
    ]
}

pub(crate) struct DeviceServer {
    url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for DeviceServer {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

impl DeviceServer {
    /// Serves every endpoint with a 2xx response.
    pub(crate) fn healthy() -> Result<Self, String> {
        Self::spawn(Vec::new())
    }

    /// Serves `overrides` first, then the healthy defaults; anything else
    /// gets a 404.
    pub(crate) fn spawn(overrides: Vec<Route>) -> Result<Self, String> {
        let mut routes = overrides;
        routes.extend(healthy_routes());
        let routes = Arc::new(routes);

        let listener = TcpListener::bind("127.0.0.1:0")
            .map_err(|err| format!("bind test server failed: {}", err))?;
        let addr = listener
            .local_addr()
            .map_err(|err| format!("server addr failed: {}", err))?;
        listener
            .set_nonblocking(true)
            .map_err(|err| format!("set_nonblocking failed: {}", err))?;

        let requests = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, shutdown_rx) = mpsc::channel();
        let recorded = Arc::clone(&requests);

        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                match listener.accept() {
                    Ok((stream, _)) => {
                        let routes = Arc::clone(&routes);
                        let recorded = Arc::clone(&recorded);
                        thread::spawn(move || handle_client(stream, &routes, &recorded));
                    }
                    Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(Duration::from_millis(5));
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            url: format!("http://{}", addr),
            requests,
            shutdown: shutdown_tx,
            thread: Some(handle),
        })
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn requests(&self) -> Result<Vec<RecordedRequest>, String> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .map_err(|err| format!("request log poisoned: {}", err))
    }
}

fn handle_client(mut stream: TcpStream, routes: &[Route], recorded: &Mutex<Vec<RecordedRequest>>) {
    if stream.set_nonblocking(false).is_err()
        || stream
            .set_read_timeout(Some(Duration::from_secs(2)))
            .is_err()
    {
        return;
    }
    let Some(request) = read_request(&mut stream) else {
        return;
    };

    let route = routes
        .iter()
        .find(|route| route.method == request.method && route.path == request.path);
    if let Ok(mut guard) = recorded.lock() {
        guard.push(request);
    }
    if route.is_some_and(|route| route.stall) {
        thread::sleep(STALL_FOR);
        drop(stream.shutdown(Shutdown::Both));
        return;
    }

    let (status, content_type, body) = route.map_or((404, "text/plain", "not found"), |route| {
        (route.status, route.content_type, route.body.as_str())
    });
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        content_type,
        body.len(),
        body
    );
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut raw = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        let read = stream.read(&mut chunk).ok()?;
        if read == 0 {
            return None;
        }
        raw.extend_from_slice(chunk.get(..read)?);
        if let Some(pos) = raw.windows(4).position(|window| window == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(raw.get(..header_end)?).into_owned();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_owned();
    let path = request_line.next()?.to_owned();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_owned(), value.trim().to_owned()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);
    let body_start = header_end.checked_add(4)?;
    let mut body = raw.get(body_start..)?.to_vec();
    while body.len() < content_length {
        let read = stream.read(&mut chunk).ok()?;
        if read == 0 {
            break;
        }
        body.extend_from_slice(chunk.get(..read)?);
    }

    Some(RecordedRequest {
        method,
        path,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

const fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

pub(crate) fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: std::future::Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}
