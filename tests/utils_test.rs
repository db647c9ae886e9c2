use lidlist::types::AlbumRequest;
use lidlist::utils::parse_album_list;

fn parse(input: &str) -> Result<Vec<AlbumRequest>, String> {
    parse_album_list(input.as_bytes())
}

#[test]
fn test_header_row_is_skipped() {
    let list = "Album,Artist,Year\nAbbey Road,The Beatles,1969\n";
    let albums = parse(list).unwrap();

    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0].title, "Abbey Road");
    assert_eq!(albums[0].artist, "The Beatles");
    assert_eq!(albums[0].year, "1969");
}

#[test]
fn test_columns_are_ordinal() {
    // Header names don't matter, only the column positions do
    let list = "a,b,c\nThe Wall,Pink Floyd,1979\nKid A,Radiohead,2000\n";
    let albums = parse(list).unwrap();

    assert_eq!(albums.len(), 2);
    assert_eq!(albums[1].title, "Kid A");
    assert_eq!(albums[1].artist, "Radiohead");
    assert_eq!(albums[1].year, "2000");
}

#[test]
fn test_quoted_fields_with_commas() {
    let list = "Album,Artist,Year\n\"Everything, Everything\",Underworld,2000\n";
    let albums = parse(list).unwrap();

    assert_eq!(albums[0].title, "Everything, Everything");
    assert_eq!(albums[0].artist, "Underworld");
}

#[test]
fn test_header_only_yields_empty_list() {
    let albums = parse("Album,Artist,Year\n").unwrap();
    assert!(albums.is_empty());
}

#[test]
fn test_empty_input_yields_empty_list() {
    let albums = parse("").unwrap();
    assert!(albums.is_empty());
}

#[test]
fn test_missing_year_column_defaults_to_empty() {
    let list = "Album,Artist,Year\nAbbey Road,The Beatles\n";
    let albums = parse(list).unwrap();

    assert_eq!(albums[0].title, "Abbey Road");
    assert_eq!(albums[0].year, "");
}

#[test]
fn test_missing_artist_column_is_an_error() {
    let list = "Album,Artist,Year\nAbbey Road\n";
    let result = parse(list);

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("missing artist column"));
}
