use crate::{
    lidarr::LidarrClient,
    types::{AddArtistRequest, Artist},
};

impl LidarrClient {
    /// Searches artists by free-text term.
    ///
    /// Results mix tracked and untracked artists: a record carries an
    /// `id` only when Lidarr already tracks it, which is how the
    /// import loop distinguishes the two paths. The term is URL-encoded
    /// by the query builder.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<Artist>)` - Candidate artists, best match first
    /// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
    pub async fn lookup_artist(&self, term: &str) -> Result<Vec<Artist>, reqwest::Error> {
        let response = self
            .get("/artist/lookup")
            .query(&[("term", term)])
            .send()
            .await?
            .error_for_status()?;

        response.json::<Vec<Artist>>().await
    }

    /// Adds an artist to Lidarr.
    ///
    /// The request body controls monitoring: with `AlbumsToMonitor`
    /// set and `searchForMissingAlbums` enabled, Lidarr starts
    /// searching for the listed albums right after the add. Identified
    /// by the foreign (MusicBrainz) artist id, not a library id.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Artist)` - The created artist as echoed back by Lidarr
    /// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
    pub async fn add_artist(&self, request: &AddArtistRequest) -> Result<Artist, reqwest::Error> {
        let response = self
            .post("/artist")
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        response.json::<Artist>().await
    }
}
