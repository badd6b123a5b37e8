use serde::Deserialize;

pub const ABSENT: &str = "null";

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse {
    pub data: Option<MediaListCollectionData>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    pub status: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct MediaListCollectionData {
    #[serde(rename = "MediaListCollection")]
    pub media_list_collection: Option<MediaListCollection>,
}

#[derive(Debug, Deserialize)]
pub struct MediaListCollection {
    pub lists: Vec<MediaList>,
}

#[derive(Debug, Deserialize)]
pub struct MediaList {
    pub name: String,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
pub struct Entry {
    pub media: Media,
}

#[derive(Debug, Deserialize)]
pub struct Media {
    pub id: u64,
    pub title: MediaTitle,
    #[allow(dead_code)]
    pub description: Option<String>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<CoverImage>,
    #[serde(rename = "bannerImage")]
    pub banner_image: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<FuzzyDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<FuzzyDate>,
}

#[derive(Debug, Deserialize)]
pub struct MediaTitle {
    pub english: Option<String>,
    pub romaji: Option<String>,
}

impl MediaTitle {
    pub fn display(&self) -> &str {
        self.english
            .as_deref()
            .or(self.romaji.as_deref())
            .unwrap_or(ABSENT)
    }
}

#[derive(Debug, Deserialize)]
pub struct CoverImage {
    #[serde(rename = "extraLarge")]
    pub extra_large: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FuzzyDate {
    pub year: Option<u32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl std::fmt::Display for FuzzyDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let part = |value: Option<u32>| value.map_or_else(|| ABSENT.to_string(), |v| v.to_string());

        write!(
            f,
            "{}-{}-{}",
            part(self.year),
            part(self.month),
            part(self.day)
        )
    }
}
