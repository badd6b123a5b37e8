use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    Anime,
    Manga,
}

impl MediaFormat {
    pub const ALL: [MediaFormat; 2] = [MediaFormat::Anime, MediaFormat::Manga];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anime => "ANIME",
            Self::Manga => "MANGA",
        }
    }

    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Anime => "anime",
            Self::Manga => "manga",
        }
    }
}

pub struct UnsupportedFormat;

impl FromStr for MediaFormat {
    type Err = UnsupportedFormat;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.to_uppercase();

        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or(UnsupportedFormat)
    }
}
