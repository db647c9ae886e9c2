use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;
use tokio::time::sleep;

use crate::{
    config, error, info,
    lidarr::LidarrClient,
    matching, success,
    types::{AddArtistOptions, AddArtistRequest, Album, AlbumRequest, ImportTableRow},
    utils, warning,
};

pub async fn import(file: String, delay: u64) {
    let requests = match utils::read_album_list(&file).await {
        Ok(requests) => requests,
        Err(e) => {
            error!("Cannot read album list from {}. Err: {}", file, e);
        }
    };

    info!("Loaded {} albums from {}.", requests.len(), file);

    let client = LidarrClient::new(config::lidarr_apiurl(), config::lidarr_api_key());
    let total = requests.len();
    let mut rows: Vec<ImportTableRow> = Vec::new();

    for (position, request) in requests.iter().enumerate() {
        let pb = spinner(format!(
            "Looking up {artist} - {title} ({position}/{total})...",
            artist = request.artist,
            title = request.title,
            position = position + 1,
            total = total
        ));

        let artists = match client.lookup_artist(&request.artist).await {
            Ok(artists) => artists,
            Err(e) => {
                pb.finish_and_clear();
                error!("Artist lookup failed for {}. Err: {}", request.artist, e);
            }
        };

        let outcome = match artists.first() {
            None => {
                pb.finish_and_clear();
                warning!("No artist match: {}", request.artist);
                "no artist match"
            }
            Some(artist) => match artist.id {
                Some(artist_id) => reconcile_tracked(&client, request, artist_id, &pb).await,
                None => reconcile_untracked(&client, request, &pb).await,
            },
        };

        rows.push(ImportTableRow {
            title: request.title.clone(),
            artist: request.artist.clone(),
            year: request.year.clone(),
            outcome: outcome.to_string(),
        });

        sleep(Duration::from_secs(delay)).await;
    }

    let table = Table::new(rows);
    println!("{}", table);
    success!("Processed {} list entries.", total);
}

/// Artist is already in the library: match against its known albums
/// and flip monitoring when the match is unmonitored.
async fn reconcile_tracked(
    client: &LidarrClient,
    request: &AlbumRequest,
    artist_id: u64,
    pb: &ProgressBar,
) -> &'static str {
    let albums = match client.albums_for_artist(artist_id).await {
        Ok(albums) => albums,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot list albums for {}. Err: {}", request.artist, e);
        }
    };
    pb.finish_and_clear();

    match matching::find_album_match(request, &albums) {
        Some(album) if !album.monitored => match album.id {
            Some(album_id) => match client.monitor_albums(vec![album_id], true).await {
                Ok(()) => {
                    success!("Monitoring: {}", album.title);
                    "monitored"
                }
                Err(e) => {
                    error!("Cannot monitor {}. Err: {}", album.title, e);
                }
            },
            None => {
                warning!("Matched {} but it carries no library id.", album.title);
                "no library id"
            }
        },
        Some(album) => {
            info!("Already monitored: {}", album.title);
            "already monitored"
        }
        None => {
            warning!("No album match: {} - {}", request.artist, request.title);
            "no album match"
        }
    }
}

/// Artist is unknown to the library: match against a metadata-provider
/// album search and add the artist with the matched album
/// pre-monitored and searched for immediately.
async fn reconcile_untracked(
    client: &LidarrClient,
    request: &AlbumRequest,
    pb: &ProgressBar,
) -> &'static str {
    let candidates = match client.lookup_albums(&request.title).await {
        Ok(candidates) => candidates,
        Err(e) => {
            pb.finish_and_clear();
            error!("Album lookup failed for {}. Err: {}", request.title, e);
        }
    };
    pb.finish_and_clear();

    match matching::find_album_match(request, &candidates) {
        Some(album) => {
            info!("Adding artist: {}", album.artist.artist_name);
            match client.add_artist(&add_artist_request(album)).await {
                Ok(added) => {
                    success!("Added {} with {} monitored.", added.artist_name, album.title);
                    "artist added"
                }
                Err(e) => {
                    error!("Cannot add artist {}. Err: {}", album.artist.artist_name, e);
                }
            }
        }
        None => {
            warning!(
                "No foreign album match: {} - {}",
                request.artist,
                request.title
            );
            "no album match"
        }
    }
}

fn add_artist_request(album: &Album) -> AddArtistRequest {
    AddArtistRequest {
        artist_name: album.artist.artist_name.clone(),
        foreign_artist_id: album.artist.foreign_artist_id.clone(),
        quality_profile_id: config::quality_profile_id(),
        metadata_profile_id: config::metadata_profile_id(),
        root_folder_path: config::root_folder_path(),
        monitored: true,
        monitor_new_items: "none".to_string(),
        album_folder: true,
        add_options: AddArtistOptions {
            albums_to_monitor: vec![album.foreign_album_id.clone()],
            monitor: "Existing".to_string(),
            monitored: true,
            search_for_missing_albums: true,
        },
    }
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
