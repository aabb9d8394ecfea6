//! Discography cleanup.
//!
//! The commerce catalog lists every edition of an album separately ("25",
//! "25 (Deluxe Edition)", "Hello - Single", ...). For an artist page we want
//! one entry per album, newest first.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::domain::CatalogSearchResult;

/// Words that mark a bracketed title suffix as an edition label
const EDITION_MARKERS: &[&str] = &[
    "deluxe",
    "edition",
    "remaster",
    "expanded",
    "anniversary",
    "bonus",
    "version",
];

/// Dash suffixes the catalog appends to non-album releases
const FORMAT_SUFFIXES: &[&str] = &[" - single", " - ep"];

/// Remove duplicate editions and sort newest first.
///
/// Albums whose normalized titles match collapse into the entry with the
/// most tracks. Entries without a parsable release date sort last.
pub fn dedupe(albums: Vec<CatalogSearchResult>) -> Vec<CatalogSearchResult> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<CatalogSearchResult> = Vec::with_capacity(albums.len());

    for album in albums {
        let key = normalize_title(&album.title);
        match index.get(&key) {
            Some(&pos) => {
                if album.track_count > unique[pos].track_count {
                    unique[pos] = album;
                }
            }
            None => {
                index.insert(key, unique.len());
                unique.push(album);
            }
        }
    }

    // Newest first; None sorts below any date
    unique.sort_by(|a, b| release_day(&b.release_date).cmp(&release_day(&a.release_date)));
    unique
}

/// Lower-case a title and strip edition/format suffixes
pub fn normalize_title(title: &str) -> String {
    let mut title = title.trim().to_lowercase();

    for suffix in FORMAT_SUFFIXES {
        if let Some(stripped) = title.strip_suffix(suffix) {
            title = stripped.trim_end().to_string();
        }
    }

    while let Some(stripped) = strip_edition_group(&title) {
        title = stripped;
    }

    title
}

/// Strip one trailing "(...)" or "[...]" group if it names an edition
fn strip_edition_group(title: &str) -> Option<String> {
    let close = title.chars().last()?;
    let open = match close {
        ')' => '(',
        ']' => '[',
        _ => return None,
    };

    let start = title.rfind(open)?;
    let label = &title[start + 1..title.len() - 1];
    if !EDITION_MARKERS.iter().any(|marker| label.contains(marker)) {
        return None;
    }

    let stripped = title[..start].trim_end();
    if stripped.is_empty() {
        return None;
    }
    Some(stripped.to_string())
}

/// Parse a provider release date (RFC 3339 or YYYY-MM-DD) to a day
fn release_day(date: &str) -> Option<NaiveDate> {
    chrono::DateTime::parse_from_rfc3339(date)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(date, "%Y-%m-%d"))
        .ok()
}
