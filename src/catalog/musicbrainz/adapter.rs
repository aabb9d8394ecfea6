//! Adapter layer: Convert MusicBrainz DTOs to domain models

use super::dto;
use crate::catalog::domain::ReleaseMetadata;

/// Convert a release search response, keeping the provider's relevance order
pub fn to_release_metadata(response: dto::ReleaseSearchResponse) -> Vec<ReleaseMetadata> {
    response.releases.into_iter().map(to_release).collect()
}

fn to_release(release: dto::Release) -> ReleaseMetadata {
    ReleaseMetadata {
        artist: build_artist_string(&release.artist_credit),
        primary_type: release.release_group.and_then(|rg| rg.primary_type),
        id: release.id,
        title: release.title,
        date: release.date.filter(|d| !d.is_empty()),
        country: release.country,
        barcode: release.barcode.filter(|b| !b.is_empty()),
        score: release.score,
    }
}

/// Build a combined artist string from artist credits
fn build_artist_string(credits: &[dto::ArtistCredit]) -> Option<String> {
    if credits.is_empty() {
        return None;
    }

    let mut result = String::new();
    for credit in credits {
        // Use credited name if available, otherwise official name
        let name = credit.name.as_ref().unwrap_or(&credit.artist.name);
        result.push_str(name);

        if let Some(ref join) = credit.joinphrase {
            result.push_str(join);
        }
    }

    Some(result)
}
