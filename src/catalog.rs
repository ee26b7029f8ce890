// Catalog search client - alternate track source
//
// Queries the public Deezer search API with the mood's search term.
// Unlike the generative path there is nothing to parse out of free text,
// but metadata can still be missing; absent fields degrade to the same
// defaults the extractor uses.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::listing::{TrackRecord, PLACEHOLDER_COVER_URL, PLACEHOLDER_SOURCE_URL, UNKNOWN_ALBUM};
use crate::mood;

const DEEZER_SEARCH_URL: &str = "https://api.deezer.com/search";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<CatalogTrack>,
}

#[derive(Debug, Deserialize)]
struct CatalogTrack {
    id: i64,
    title: Option<String>,
    artist: Option<ArtistInfo>,
    album: Option<AlbumInfo>,
    link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArtistInfo {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AlbumInfo {
    title: Option<String>,
    cover_medium: Option<String>,
}

impl CatalogTrack {
    fn into_record(self) -> TrackRecord {
        TrackRecord {
            id: self.id.to_string(),
            title: self.title.unwrap_or_else(|| "Unknown Title".to_string()),
            artist: self
                .artist
                .and_then(|a| a.name)
                .unwrap_or_else(|| "Unknown Artist".to_string()),
            album: self
                .album
                .as_ref()
                .and_then(|a| a.title.clone())
                .unwrap_or_else(|| UNKNOWN_ALBUM.to_string()),
            album_cover_url: self
                .album
                .and_then(|a| a.cover_medium)
                .unwrap_or_else(|| PLACEHOLDER_COVER_URL.to_string()),
            source_url: self
                .link
                .unwrap_or_else(|| PLACEHOLDER_SOURCE_URL.to_string()),
        }
    }
}

pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    pub fn new() -> Result<Self, String> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client })
    }

    /// Search tracks matching a mood, via the mood's search-term mapping.
    pub async fn search_mood_tracks(
        &self,
        mood: &str,
        limit: u32,
    ) -> Result<Vec<TrackRecord>, String> {
        self.search(mood::search_term(mood), limit).await
    }

    /// Raw catalog search by query string.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<TrackRecord>, String> {
        let response = self
            .client
            .get(DEEZER_SEARCH_URL)
            .query(&[("q", query), ("limit", &limit.to_string())])
            .send()
            .await
            .map_err(|e| format!("Catalog request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("Catalog error {}", response.status()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse catalog response: {}", e))?;

        Ok(body.data.into_iter().map(CatalogTrack::into_record).collect())
    }
}
