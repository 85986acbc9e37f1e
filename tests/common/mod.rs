//! In-process stand-in for a NameNode.
//!
//! The mock only records what it receives and replies with a canned status and
//! body; tests assert on the recorded requests afterwards.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::Router;
use webhdfs::{Configuration, FileSystem};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    /// Percent-encoded request path
    pub path: String,
    /// Decoded query pairs in wire order
    pub query: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> Vec<&str> {
        self.query.iter().map(|(k, _)| k.as_str()).collect()
    }
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: &'static str,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockNameNode {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockNameNode {
    pub async fn start(status: u16, body: &'static str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status).unwrap(),
            body,
            requests: requests.clone(),
        };
        let app = Router::new().fallback(record).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, requests }
    }

    /// Reply `200 OK` with `body`.
    pub async fn ok(body: &'static str) -> Self {
        Self::start(200, body).await
    }

    pub fn address(&self) -> String {
        self.addr.to_string()
    }

    pub fn filesystem(&self) -> FileSystem {
        FileSystem::new(Configuration::new(self.address())).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The one request received; fails the test if there were more or fewer.
    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {:?}", requests);
        requests.into_iter().next().unwrap()
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
) -> (StatusCode, &'static str) {
    let url = reqwest::Url::parse(&format!("http://mock{}", uri)).unwrap();
    let request = RecordedRequest {
        method,
        path: url.path().to_string(),
        query: url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect(),
    };
    state.requests.lock().unwrap().push(request);
    (state.status, state.body)
}

/// An address nothing listens on.
pub async fn closed_address() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr.to_string()
}
