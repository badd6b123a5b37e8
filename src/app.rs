use crate::{modules, types::Context};
use axum::{
    http::{header, Method},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors, trace};

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

pub fn get_router(ctx: Arc<Context>) -> Router {
    Router::new()
        .nest("/api", modules::get_router())
        .with_state(ctx)
        .layer(trace::TraceLayer::new_for_http())
        .layer(
            cors::CorsLayer::new()
                .allow_methods([Method::OPTIONS, Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
                .allow_origin(cors::Any),
        )
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = get_router(ctx.clone());

        Self { ctx, router }
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(&address).await?;

        tracing::info!("App is running on {}", address);

        axum::serve(listener, self.router).await
    }
}
