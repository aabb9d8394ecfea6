//! Apple Marketing Tools RSS feed Data Transfer Objects
//!
//! These types match EXACTLY what the feed generator returns.
//! DO NOT use these types outside the feed module - convert to domain types.
//!
//! Example response (trimmed):
//! ```json
//! {
//!   "feed": {
//!     "title": "Top Albums",
//!     "country": "us",
//!     "results": [{
//!       "id": "1440857781",
//!       "name": "Abbey Road",
//!       "artistName": "The Beatles",
//!       "releaseDate": "1969-09-26",
//!       "artworkUrl100": "https://is1-ssl.mzstatic.com/.../100x100bb.jpg",
//!       "genres": [{"genreId": "21", "name": "Rock"}],
//!       "url": "https://music.apple.com/us/album/abbey-road/1440857781"
//!     }]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedResponse {
    pub feed: Feed,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Feed {
    pub title: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub results: Vec<FeedEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    /// Album ID (a string in this feed, unlike the search API)
    pub id: String,
    pub name: Option<String>,
    pub artist_name: Option<String>,
    pub release_date: Option<String>,
    pub artwork_url100: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    pub genre_id: Option<String>,
    pub name: String,
}
