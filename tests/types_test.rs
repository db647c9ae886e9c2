use lidlist::types::{AddArtistOptions, AddArtistRequest, Album, Artist, MonitorAlbumsRequest};
use serde_json::json;

#[test]
fn test_artist_lookup_result_with_and_without_id() {
    // Tracked artists carry a library id, untracked ones don't
    let payload = json!([
        {
            "id": 7,
            "artistName": "The Beatles",
            "foreignArtistId": "b10bbbfc-cf9e-42e0-be17-e2c3e1d2600d"
        },
        {
            "artistName": "The Beatles Revival Band",
            "foreignArtistId": "8d9f1f3b-0000-4000-8000-000000000000"
        }
    ]);

    let artists: Vec<Artist> = serde_json::from_value(payload).unwrap();

    assert_eq!(artists[0].id, Some(7));
    assert_eq!(artists[0].artist_name, "The Beatles");
    assert_eq!(artists[1].id, None);
}

#[test]
fn test_album_deserializes_from_lookup_shape() {
    // Lookup results have no library id and embed the artist record
    let payload = json!({
        "title": "Abbey Road",
        "albumType": "Album",
        "monitored": false,
        "foreignAlbumId": "9162580e-5df4-32de-80cc-f45a8d8a9b1d",
        "artist": {
            "artistName": "The Beatles",
            "foreignArtistId": "b10bbbfc-cf9e-42e0-be17-e2c3e1d2600d"
        }
    });

    let album: Album = serde_json::from_value(payload).unwrap();

    assert_eq!(album.id, None);
    assert_eq!(album.album_type, "Album");
    assert!(!album.monitored);
    assert_eq!(album.artist.artist_name, "The Beatles");
}

#[test]
fn test_add_artist_request_wire_shape() {
    let request = AddArtistRequest {
        artist_name: "The Beatles".to_string(),
        foreign_artist_id: "b10bbbfc-cf9e-42e0-be17-e2c3e1d2600d".to_string(),
        quality_profile_id: 1,
        metadata_profile_id: 1,
        root_folder_path: "/data/media/music".to_string(),
        monitored: true,
        monitor_new_items: "none".to_string(),
        album_folder: true,
        add_options: AddArtistOptions {
            albums_to_monitor: vec!["9162580e-5df4-32de-80cc-f45a8d8a9b1d".to_string()],
            monitor: "Existing".to_string(),
            monitored: true,
            search_for_missing_albums: true,
        },
    };

    let value = serde_json::to_value(&request).unwrap();

    // Top level is camelCase
    assert_eq!(value["artistName"], "The Beatles");
    assert_eq!(value["foreignArtistId"], "b10bbbfc-cf9e-42e0-be17-e2c3e1d2600d");
    assert_eq!(value["qualityProfileId"], 1);
    assert_eq!(value["rootFolderPath"], "/data/media/music");
    assert_eq!(value["monitorNewItems"], "none");
    assert_eq!(value["albumFolder"], true);

    // addOptions keeps the API's PascalCase quirk for the album list
    assert_eq!(
        value["addOptions"]["AlbumsToMonitor"][0],
        "9162580e-5df4-32de-80cc-f45a8d8a9b1d"
    );
    assert_eq!(value["addOptions"]["monitor"], "Existing");
    assert_eq!(value["addOptions"]["searchForMissingAlbums"], true);
}

#[test]
fn test_monitor_albums_request_wire_shape() {
    let request = MonitorAlbumsRequest {
        album_ids: vec![5],
        monitored: true,
    };

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["albumIds"][0], 5);
    assert_eq!(value["monitored"], true);
}
