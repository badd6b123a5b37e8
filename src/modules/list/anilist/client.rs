use super::types::{GraphQLResponse, MediaListCollection};
use crate::{modules::list::format::MediaFormat, types::Context};
use axum::http::{header, HeaderMap, HeaderValue};
use std::sync::Arc;

#[derive(Debug)]
pub enum Error {
    RequestNotSent,
    FailedToReadResponse,
    FailedToDecodeResponse,
    MissingData,
}

const MEDIA_LIST_COLLECTION_QUERY: &str = r#"
query ($userName: String, $type: MediaType) {
    MediaListCollection(userName: $userName, type: $type) {
        lists {
            name
            entries {
                media {
                    id
                    title { english romaji }
                    description
                    coverImage { extraLarge }
                    bannerImage
                    startDate { year month day }
                    endDate { year month day }
                }
            }
        }
    }
}
"#;

pub struct FetchMediaListCollectionPayload {
    pub username: String,
    pub format: MediaFormat,
}

pub async fn fetch_media_list_collection(
    ctx: Arc<Context>,
    payload: FetchMediaListCollectionPayload,
) -> Result<Option<MediaListCollection>, Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    tracing::debug!(
        "Fetching {} lists of '{}' from {}",
        payload.format.as_str(),
        payload.username,
        ctx.anilist.api_url
    );

    let res = reqwest::Client::new()
        .post(&ctx.anilist.api_url)
        .headers(headers)
        .json(&serde_json::json!({
            "query": MEDIA_LIST_COLLECTION_QUERY,
            "variables": {
                "userName": payload.username,
                "type": payload.format.as_str(),
            },
        }))
        .send()
        .await
        .map_err(|err| {
            tracing::error!("Failed to send AniList request: {}", err);
            Error::RequestNotSent
        })?;

    // Unknown users come back as a 404 with a null collection, so the body is
    // decoded whatever the status.
    let http_response_status_code = res.status();

    if !http_response_status_code.is_success() {
        tracing::warn!(
            "Got unexpected http response status from AniList: {}",
            http_response_status_code
        );
    }

    let data = res.text().await.map_err(|err| {
        tracing::error!("Failed to read AniList response: {}", err);
        Error::FailedToReadResponse
    })?;

    tracing::trace!("Response received from AniList server: {}", data);

    let response = serde_json::de::from_str::<GraphQLResponse>(&data).map_err(|err| {
        tracing::error!("Failed to decode AniList response: {}", err);
        Error::FailedToDecodeResponse
    })?;

    for error in response.errors.iter().flatten() {
        tracing::warn!(
            "AniList reported an error (status {:?}): {}",
            error.status,
            error.message
        );
    }

    response
        .data
        .map(|data| data.media_list_collection)
        .ok_or_else(|| {
            tracing::error!("AniList response has no data object");
            Error::MissingData
        })
}
