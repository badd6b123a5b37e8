pub mod client;
pub mod types;

pub use client::{fetch_media_list_collection, FetchMediaListCollectionPayload};
