// Stub of the answer backend: records every form it receives and replies
// according to the configured behavior.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::Mutex;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RecordedRequest {
    pub msg: String,
    pub session_id: Option<String>,
}

#[derive(Clone, Debug)]
pub enum Behavior {
    /// `{"answer": "echo: <msg>"}`; messages starting with "slow" wait first.
    Echo,
    Answer(&'static str),
    Status(StatusCode),
    /// 200 with this body verbatim.
    Raw(&'static str),
    /// Never answers in any reasonable time.
    Hang,
}

#[derive(Clone)]
struct StubState {
    behavior: Behavior,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct StubBackend {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubBackend {
    pub async fn start(behavior: Behavior) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            behavior,
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/get_answer", post(get_answer))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}", addr),
            requests,
        }
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }
}

async fn get_answer(State(state): State<StubState>, Form(req): Form<RecordedRequest>) -> Response {
    state.requests.lock().await.push(req.clone());

    match state.behavior {
        Behavior::Echo => {
            if req.msg.starts_with("slow") {
                tokio::time::sleep(Duration::from_millis(300)).await;
            }
            Json(json!({ "answer": format!("echo: {}", req.msg) })).into_response()
        }
        Behavior::Answer(answer) => Json(json!({ "answer": answer })).into_response(),
        Behavior::Status(status) => (status, "backend exploded").into_response(),
        Behavior::Raw(body) => (StatusCode::OK, body).into_response(),
        Behavior::Hang => {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Json(json!({ "answer": "too late" })).into_response()
        }
    }
}

/// Address where nothing is listening.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
