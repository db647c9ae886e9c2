use std::io::Read;

use crate::types::AlbumRequest;

/// Parses a want list from CSV data: one album per row, ordinal
/// columns title, artist, year. The first row is treated as a header
/// and skipped. Quoting and embedded commas are handled by the CSV
/// reader; no further format validation happens here.
pub fn parse_album_list<R: Read>(input: R) -> Result<Vec<AlbumRequest>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut albums = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| e.to_string())?;
        let title = record
            .get(0)
            .ok_or_else(|| format!("row {}: missing title column", index + 2))?;
        let artist = record
            .get(1)
            .ok_or_else(|| format!("row {}: missing artist column", index + 2))?;
        let year = record.get(2).unwrap_or_default();

        albums.push(AlbumRequest {
            title: title.to_string(),
            artist: artist.to_string(),
            year: year.to_string(),
        });
    }

    Ok(albums)
}

/// Reads a want list from a CSV file on disk.
pub async fn read_album_list(path: &str) -> Result<Vec<AlbumRequest>, String> {
    let content = async_fs::read_to_string(path)
        .await
        .map_err(|e| e.to_string())?;
    parse_album_list(content.as_bytes())
}
