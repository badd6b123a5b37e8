use crate::types::{AniListContext, AppContext, Context};
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::Value;
use std::sync::Arc;
use tokio::{net::TcpListener, sync::Mutex};

pub struct FakeUpstream {
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl FakeUpstream {
    pub async fn last_request(&self) -> Option<Value> {
        self.requests.lock().await.last().cloned()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[derive(Clone)]
struct FakeUpstreamState {
    status: StatusCode,
    body: Value,
    requests: Arc<Mutex<Vec<Value>>>,
}

async fn answer(
    State(state): State<FakeUpstreamState>,
    Json(request): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.requests.lock().await.push(request);
    (state.status, Json(state.body))
}

pub async fn spawn_upstream(status: StatusCode, body: Value) -> FakeUpstream {
    let requests = Arc::new(Mutex::new(vec![]));
    let router = Router::new().route("/", post(answer)).with_state(FakeUpstreamState {
        status,
        body,
        requests: requests.clone(),
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

    FakeUpstream {
        url: format!("http://{}/", address),
        requests,
    }
}

pub fn test_context(api_url: &str) -> Arc<Context> {
    Arc::new(Context {
        app: AppContext {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        anilist: AniListContext {
            api_url: api_url.to_string(),
            site_url: "https://anilist.co".to_string(),
        },
    })
}
