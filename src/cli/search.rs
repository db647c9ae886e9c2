use tabled::Table;

use crate::{
    config, error,
    lidarr::LidarrClient,
    types::{AlbumTableRow, ArtistTableRow},
    warning,
};

pub async fn search(artist: Option<String>, album: Option<String>) {
    if artist.is_none() && album.is_none() {
        warning!("Nothing to search for. Pass --artist and/or --album.");
        return;
    }

    let client = LidarrClient::new(config::lidarr_apiurl(), config::lidarr_api_key());

    if let Some(term) = artist {
        match client.lookup_artist(&term).await {
            Ok(artists) => {
                if artists.is_empty() {
                    warning!("No artists found for '{}'.", term);
                } else {
                    let rows: Vec<ArtistTableRow> = artists
                        .into_iter()
                        .map(|a| ArtistTableRow {
                            name: a.artist_name,
                            tracked: yes_no(a.id.is_some()),
                            foreign_id: a.foreign_artist_id,
                        })
                        .collect();

                    let table = Table::new(rows);
                    println!("{}", table);
                }
            }
            Err(e) => error!("Artist lookup failed for '{}'. Err: {}", term, e),
        }
    }

    if let Some(term) = album {
        match client.lookup_albums(&term).await {
            Ok(albums) => {
                if albums.is_empty() {
                    warning!("No albums found for '{}'.", term);
                } else {
                    let rows: Vec<AlbumTableRow> = albums
                        .into_iter()
                        .map(|a| AlbumTableRow {
                            title: a.title,
                            artist: a.artist.artist_name,
                            kind: a.album_type,
                            monitored: yes_no(a.monitored),
                        })
                        .collect();

                    let table = Table::new(rows);
                    println!("{}", table);
                }
            }
            Err(e) => error!("Album lookup failed for '{}'. Err: {}", term, e),
        }
    }
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}
