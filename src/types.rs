use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One row of the want list: ordinal CSV columns title, artist, year.
/// The year is carried for reporting only and never sent to Lidarr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumRequest {
    pub title: String,
    pub artist: String,
    pub year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    // present when the artist is already tracked by Lidarr
    pub id: Option<u64>,
    pub artist_name: String,
    pub foreign_artist_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    // present when the album row comes from the library, absent on
    // metadata-provider lookup results
    pub id: Option<u64>,
    pub title: String,
    pub album_type: String,
    #[serde(default)]
    pub monitored: bool,
    pub foreign_album_id: String,
    pub artist: Artist,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddArtistRequest {
    pub artist_name: String,
    pub foreign_artist_id: String,
    pub quality_profile_id: u64,
    pub metadata_profile_id: u64,
    pub root_folder_path: String,
    pub monitored: bool,
    pub monitor_new_items: String,
    pub album_folder: bool,
    pub add_options: AddArtistOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddArtistOptions {
    // the API expects this one field in PascalCase
    #[serde(rename = "AlbumsToMonitor")]
    pub albums_to_monitor: Vec<String>,
    pub monitor: String,
    pub monitored: bool,
    pub search_for_missing_albums: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorAlbumsRequest {
    pub album_ids: Vec<u64>,
    pub monitored: bool,
}

#[derive(Tabled)]
pub struct ImportTableRow {
    pub title: String,
    pub artist: String,
    pub year: String,
    pub outcome: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub tracked: String,
    pub foreign_id: String,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub title: String,
    pub artist: String,
    pub kind: String,
    pub monitored: String,
}
