// Track-listing extractor
//
// Turns the free-text body returned by the generative service into
// structured track records. The upstream text is untrusted: lines that
// don't match the expected `N. "Title" Artist: ... Album: ...` shape are
// dropped one at a time, never failing the whole batch.

use serde::{Deserialize, Serialize};

/// Shown when the source provides no cover art.
pub const PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/200";

/// Used when the source provides no deep link.
pub const PLACEHOLDER_SOURCE_URL: &str = "#";

/// Album sentinel for sources that omit the album entirely.
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// One recommended track, parsed out of a listing line.
///
/// `id` is positional within a single extraction batch and is not stable
/// across calls; persistence layers assign their own keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub album_cover_url: String,
    pub source_url: String,
}

/// Extract track records from a raw listing.
///
/// Single pass over trimmed, non-empty lines. Each line must yield, in
/// order: a numbered quoted title, an `Artist:` label, then an `Album:`
/// label. A line failing any step is skipped; its index is still consumed,
/// so ids map back to source order. Zero matches give an empty vector, not
/// an error - the caller decides what "nothing usable" means.
pub fn extract_tracks(raw: &str) -> Vec<TrackRecord> {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut tracks = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        let Some((title, remainder)) = split_numbered_title(line) else {
            continue;
        };

        // First-occurrence splits, purely textual. An artist or album value
        // containing the literal label text corrupts that one line; this
        // matches the documented extraction contract.
        let Some((_, after_artist)) = remainder.split_once("Artist:") else {
            continue;
        };
        let Some((artist, album)) = after_artist.split_once("Album:") else {
            continue;
        };

        tracks.push(TrackRecord {
            id: format!("track-{}", index),
            title: title.to_string(),
            artist: artist.trim().to_string(),
            album: album.trim().to_string(),
            album_cover_url: PLACEHOLDER_COVER_URL.to_string(),
            source_url: PLACEHOLDER_SOURCE_URL.to_string(),
        });
    }

    tracks
}

/// Match the `N. "Title"` prefix of a listing line.
///
/// Returns the title and the unparsed rest of the line, or `None` if the
/// prefix doesn't match. Ordinals are not validated for order or
/// uniqueness; any digit run followed by a period is accepted.
fn split_numbered_title(line: &str) -> Option<(&str, &str)> {
    let digits_end = line.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }

    let rest = line[digits_end..].strip_prefix('.')?;
    let rest = rest.trim_start().strip_prefix('"')?;
    let title_end = rest.find('"')?;
    let title = &rest[..title_end];
    if title.is_empty() {
        return None;
    }

    Some((title, &rest[title_end + 1..]))
}
