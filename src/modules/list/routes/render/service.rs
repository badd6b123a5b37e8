use super::types::{request, response};
use crate::{
    modules::list::{
        anilist::{self, types::MediaList},
        format::MediaFormat,
        html,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let request::Params {
        username,
        list,
        format,
    } = payload.params;

    let format = format.parse::<MediaFormat>().map_err(|_| {
        tracing::debug!("Rejected unsupported format '{}'", format);
        response::Error::InvalidFormat(format.clone())
    })?;

    let collection = anilist::fetch_media_list_collection(
        ctx.clone(),
        anilist::FetchMediaListCollectionPayload {
            username: username.clone(),
            format,
        },
    )
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch lists of '{}': {:?}", username, err);
        response::Error::ServerError
    })?
    .ok_or_else(|| {
        tracing::debug!("AniList has no {} lists for '{}'", format.as_str(), username);
        response::Error::UserListsNotFound
    })?;

    let selected: Vec<&MediaList> = collection
        .lists
        .iter()
        .filter(|media_list| media_list.name == list)
        .collect();

    // An existing but empty list is reported the same way as an unknown one.
    if selected.iter().all(|media_list| media_list.entries.is_empty()) {
        tracing::debug!("'{}' has no entries in a list named '{}'", username, list);
        return Err(response::Error::ListNotFound(list));
    }

    let rows = html::render_rows(
        selected,
        &html::RowOptions {
            format,
            site_url: &ctx.anilist.site_url,
        },
    )
    .map_err(|err| {
        tracing::error!("Failed to render list '{}' of '{}': {:?}", list, username, err);
        response::Error::ServerError
    })?;

    Ok(response::Success::Table(html::render_document(&list, &rows)))
}
