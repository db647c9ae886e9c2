use crate::types::{Album, AlbumRequest};

/// Normalizes a title or artist name for comparison: lower-cases and
/// strips everything that is not alphanumeric, so `"The Wall"` and
/// `"thewall!!"` compare equal.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Picks the candidate album matching a want-list entry, if any.
///
/// Candidates are restricted to `albumType == "Album"`; singles, EPs
/// and live records returned by the same search never match. Two
/// passes over the candidates:
///
/// 1. Exact: normalized title and normalized artist both equal.
/// 2. Substring (only when pass 1 found nothing): one normalized title
///    contains the other, in either direction, with the normalized
///    artist still required to be equal. This catches remaster and
///    deluxe-edition suffixes in either the list or the catalog.
///
/// The first candidate satisfying the active pass wins.
pub fn find_album_match<'a>(request: &AlbumRequest, candidates: &'a [Album]) -> Option<&'a Album> {
    let wanted_title = normalize(&request.title);
    let wanted_artist = normalize(&request.artist);

    for candidate in albums_only(candidates) {
        if normalize(&candidate.title) == wanted_title
            && normalize(&candidate.artist.artist_name) == wanted_artist
        {
            return Some(candidate);
        }
    }

    for candidate in albums_only(candidates) {
        if normalize(&candidate.artist.artist_name) != wanted_artist {
            continue;
        }
        let candidate_title = normalize(&candidate.title);
        if candidate_title.contains(&wanted_title) || wanted_title.contains(&candidate_title) {
            return Some(candidate);
        }
    }

    None
}

fn albums_only(candidates: &[Album]) -> impl Iterator<Item = &Album> {
    candidates.iter().filter(|a| a.album_type == "Album")
}
