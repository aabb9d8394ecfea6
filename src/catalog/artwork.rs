//! Artwork URL rewriting.
//!
//! The commerce API and the feed both return artwork at 100x100, encoded in
//! the file name (`.../source/100x100bb.jpg`). The image server renders any
//! size asked for, so a larger variant is just the same URL with another
//! `WxH` marker.

/// Dimension marker used in provider artwork URLs
pub const DEFAULT_TOKEN: &str = "100x100";

/// Target artwork size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArtworkSize {
    /// 600px, used for lists and the top-releases feed
    #[default]
    Medium,
    /// 1200px, used for album detail backgrounds
    Large,
    /// Any square size
    Square(u32),
}

impl ArtworkSize {
    /// Edge length in pixels
    pub fn pixels(self) -> u32 {
        match self {
            Self::Medium => 600,
            Self::Large => 1200,
            Self::Square(px) => px,
        }
    }

    /// The `WxH` marker for this size
    pub fn token(self) -> String {
        let px = self.pixels();
        format!("{}x{}", px, px)
    }
}

/// Rewrite an artwork URL to the requested size.
///
/// Only the last occurrence of the default marker is replaced. An absent URL
/// yields an empty string; a URL without the marker is returned unchanged.
pub fn rewrite_artwork(url: Option<&str>, size: ArtworkSize) -> String {
    let Some(url) = url else {
        return String::new();
    };

    match url.rfind(DEFAULT_TOKEN) {
        Some(pos) => {
            let mut rewritten = String::with_capacity(url.len() + 4);
            rewritten.push_str(&url[..pos]);
            rewritten.push_str(&size.token());
            rewritten.push_str(&url[pos + DEFAULT_TOKEN.len()..]);
            rewritten
        }
        None => url.to_string(),
    }
}
