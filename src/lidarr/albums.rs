use crate::{
    lidarr::LidarrClient,
    types::{Album, MonitorAlbumsRequest},
};

impl LidarrClient {
    /// Searches albums by free-text term against the metadata
    /// provider.
    ///
    /// Used on the untracked-artist path: the results embed the
    /// foreign artist and album ids needed to add the artist with the
    /// matched album pre-monitored.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<Album>)` - Candidate albums of all types (album, EP, single, ...)
    /// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
    pub async fn lookup_albums(&self, term: &str) -> Result<Vec<Album>, reqwest::Error> {
        let response = self
            .get("/album/lookup")
            .query(&[("term", term)])
            .send()
            .await?
            .error_for_status()?;

        response.json::<Vec<Album>>().await
    }

    /// Lists the albums of a tracked artist.
    ///
    /// Used on the tracked-artist path; rows come from the library, so
    /// they carry library ids and a meaningful `monitored` flag.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Vec<Album>)` - The artist's albums as known to Lidarr
    /// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
    pub async fn albums_for_artist(&self, artist_id: u64) -> Result<Vec<Album>, reqwest::Error> {
        let response = self
            .get("/album")
            .query(&[("artistId", artist_id)])
            .send()
            .await?
            .error_for_status()?;

        response.json::<Vec<Album>>().await
    }

    /// Flips the monitored flag on a set of library albums.
    ///
    /// Monitoring is what makes Lidarr actively search for and acquire
    /// an album. The response body (the updated albums) is not needed
    /// by any caller and is discarded.
    pub async fn monitor_albums(
        &self,
        album_ids: Vec<u64>,
        monitored: bool,
    ) -> Result<(), reqwest::Error> {
        let request = MonitorAlbumsRequest {
            album_ids,
            monitored,
        };

        self.put("/album/monitor")
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
