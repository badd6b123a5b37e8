use async_trait::async_trait;
use std::env;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u32,
}

#[derive(Clone)]
pub struct AniListContext {
    pub api_url: String,
    pub site_url: String,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub anilist: AniListContext,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u32,
}

#[derive(Clone)]
pub struct AniListConfig {
    pub api_url: String,
    pub site_url: String,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub anilist: AniListConfig,
}

const DEFAULT_PORT: u32 = 8000;
const DEFAULT_ANILIST_API_URL: &str = "https://graphql.anilist.co/";
const DEFAULT_ANILIST_SITE_URL: &str = "https://anilist.co";

impl Default for Config {
    fn default() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(raw_port) => raw_port.parse::<u32>().unwrap_or_else(|_| {
                tracing::warn!(
                    "Invalid PORT number '{}', falling back to {}",
                    raw_port,
                    DEFAULT_PORT
                );
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };
        let anilist_api_url =
            env::var("ANILIST_API_URL").unwrap_or_else(|_| DEFAULT_ANILIST_API_URL.to_string());
        let anilist_site_url =
            env::var("ANILIST_SITE_URL").unwrap_or_else(|_| DEFAULT_ANILIST_SITE_URL.to_string());

        Self {
            app: AppConfig { host, port },
            anilist: AniListConfig {
                api_url: anilist_api_url,
                site_url: anilist_site_url,
            },
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            anilist: AniListContext {
                api_url: self.anilist.api_url,
                site_url: self.anilist.site_url.trim_end_matches('/').to_string(),
            },
        }
    }
}
