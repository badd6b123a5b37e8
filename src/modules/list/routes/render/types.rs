pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Params {
        #[serde(default = "default_username")]
        pub username: String,
        #[serde(default = "default_list")]
        pub list: String,
        #[serde(default = "default_format")]
        pub format: String,
    }

    fn default_username() -> String {
        String::from("KiranHart")
    }

    fn default_list() -> String {
        String::from("Completed")
    }

    fn default_format() -> String {
        String::from("ANIME")
    }

    pub struct Payload {
        pub params: Params,
    }
}

pub mod response {
    use axum::{
        extract::Json,
        http::StatusCode,
        response::{Html, IntoResponse},
    };
    use serde_json::json;

    pub enum Success {
        Table(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Table(document) => (StatusCode::OK, Html(document)).into_response(),
            }
        }
    }

    pub enum Error {
        InvalidFormat(String),
        UserListsNotFound,
        ListNotFound(String),
        ServerError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidFormat(format) => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": "Invalid Format",
                        "message": format!("Format '{}' is not supported.", format)
                    })),
                )
                    .into_response(),
                Self::UserListsNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Could not fetch lists for that user" })),
                )
                    .into_response(),
                Self::ListNotFound(list) => (
                    StatusCode::NOT_FOUND,
                    Json(json!({
                        "error": format!("No entries for the following list '{}' were found", list)
                    })),
                )
                    .into_response(),
                Self::ServerError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sorry, an unexpected error occurred" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
