//! HTTP boundary for the Larder cookbook service.
//!
//! Exposes the engine's four operations as JSON routes: `POST /parse` for
//! name normalization, `POST /entry` for registration, `GET /summary` for
//! recipe expansion, and `POST /clear` for a full reset. Every rejected
//! operation answers 400 with a `{"error": ...}` body.
//!
//! The [`TestServer`] helper starts a server on a random port for
//! integration testing.

use larder_core::Engine;
use larder_schema::EntryDraft;
use serde::Deserialize;
use std::sync::Arc;
use tiny_http::{Header, Method, Response, Server, StatusCode};
use tracing::{debug, info};

/// Body of a `POST /parse` request.
#[derive(Debug, Deserialize)]
struct ParseRequest {
    input: String,
}

/// Split a request URL into its path and optional raw query string.
fn split_query(url: &str) -> (&str, Option<&str>) {
    match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    }
}

/// Extract the decoded `name` parameter from a raw query string.
fn query_name(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.into_owned())
}

fn error_body(msg: &str) -> String {
    serde_json::json!({ "error": msg }).to_string()
}

fn respond_error(req: tiny_http::Request, code: u16, msg: &str) {
    let header = Header::from_bytes("Content-Type", "application/json").expect("valid header");
    let _ = req.respond(
        Response::from_string(error_body(msg))
            .with_header(header)
            .with_status_code(StatusCode(code)),
    );
}

fn respond_json(req: tiny_http::Request, json: impl Into<Vec<u8>>) {
    let header = Header::from_bytes("Content-Type", "application/json").expect("valid header");
    let _ = req.respond(Response::from_data(json.into()).with_header(header));
}

fn read_body(req: &mut tiny_http::Request) -> Option<Vec<u8>> {
    let mut body = Vec::new();
    if req.as_reader().read_to_end(&mut body).is_ok() {
        Some(body)
    } else {
        None
    }
}

fn handle_parse(engine: &Engine, mut req: tiny_http::Request, method: &Method) {
    if *method != Method::Post {
        respond_error(req, 405, "method not allowed");
        return;
    }
    let Some(body) = read_body(&mut req) else {
        respond_error(req, 500, "read error");
        return;
    };
    let parsed: ParseRequest = match serde_json::from_slice(&body) {
        Ok(parsed) => parsed,
        Err(e) => {
            respond_error(req, 400, &format!("malformed request body: {e}"));
            return;
        }
    };
    match engine.normalize_name(&parsed.input) {
        Ok(msg) => respond_json(req, serde_json::json!({ "msg": msg }).to_string()),
        Err(e) => respond_error(req, 400, &e.to_string()),
    }
}

fn handle_entry(engine: &Engine, mut req: tiny_http::Request, method: &Method) {
    if *method != Method::Post {
        respond_error(req, 405, "method not allowed");
        return;
    }
    let Some(body) = read_body(&mut req) else {
        respond_error(req, 500, "read error");
        return;
    };
    let draft: EntryDraft = match serde_json::from_slice(&body) {
        Ok(draft) => draft,
        Err(e) => {
            respond_error(req, 400, &format!("malformed request body: {e}"));
            return;
        }
    };
    match engine.create_entry(draft) {
        Ok(()) => respond_json(req, "{}"),
        Err(e) => respond_error(req, 400, &e.to_string()),
    }
}

fn handle_summary(engine: &Engine, req: tiny_http::Request, method: &Method, query: Option<&str>) {
    if *method != Method::Get {
        respond_error(req, 405, "method not allowed");
        return;
    }
    let Some(name) = query.and_then(query_name) else {
        respond_error(req, 400, "missing 'name' query parameter");
        return;
    };
    match engine.summary(&name) {
        Ok(summary) => match serde_json::to_string(&summary) {
            Ok(json) => respond_json(req, json),
            Err(e) => respond_error(req, 500, &format!("serialization error: {e}")),
        },
        Err(e) => respond_error(req, 400, &e.to_string()),
    }
}

fn handle_clear(engine: &Engine, req: tiny_http::Request, method: &Method) {
    if *method != Method::Post {
        respond_error(req, 405, "method not allowed");
        return;
    }
    engine.reset();
    respond_json(req, "{}");
}

/// Handle a single HTTP request, dispatching to the appropriate route handler.
pub fn handle_request(engine: &Engine, req: tiny_http::Request) {
    let method = req.method().clone();
    let url = req.url().to_owned();
    debug!("{method} {url}");

    let (path, query) = split_query(&url);

    if path == "/entry" {
        handle_entry(engine, req, &method);
    } else if path == "/summary" {
        handle_summary(engine, req, &method, query);
    } else if path == "/parse" {
        handle_parse(engine, req, &method);
    } else if path == "/clear" {
        handle_clear(engine, req, &method);
    } else if path == "/health" && method == Method::Get {
        let _ = req.respond(Response::from_string(r#"{"status":"ok"}"#));
    } else {
        respond_error(req, 404, "not found");
    }
}

/// Start the server loop, blocking the current thread.
pub fn run_server(engine: &Arc<Engine>, addr: &str) {
    let server = Server::http(addr).expect("failed to bind HTTP server");
    info!("listening on {addr}");
    for request in server.incoming_requests() {
        handle_request(engine, request);
    }
}

/// A test helper that starts a larder server on a random port in a
/// background thread.
///
/// The server listens on `127.0.0.1:{port}` over a fresh empty engine, which
/// stays reachable through the `engine` field for direct state assertions.
pub struct TestServer {
    pub url: String,
    pub port: u16,
    pub engine: Arc<Engine>,
    _server: Arc<Server>,
    _handle: std::thread::JoinHandle<()>,
}

impl TestServer {
    /// Start a test server on `127.0.0.1:0` (random port).
    pub fn start() -> Self {
        let server =
            Arc::new(Server::http("127.0.0.1:0").expect("failed to bind test HTTP server"));
        let port = server.server_addr().to_ip().expect("not an IP addr").port();
        let url = format!("http://127.0.0.1:{port}");

        let engine = Arc::new(Engine::new());
        let srv = Arc::clone(&server);
        let eng = Arc::clone(&engine);
        let handle = std::thread::spawn(move || {
            for request in srv.incoming_requests() {
                handle_request(&eng, request);
            }
        });

        Self {
            url,
            port,
            engine,
            _server: server,
            _handle: handle,
        }
    }
}
