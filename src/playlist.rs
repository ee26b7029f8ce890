// In-memory playlist curation
//
// Holds the generated track list while the user edits it. Curation only
// removes entries by id; emitted records are never mutated.

use crate::listing::TrackRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub name: String,
    pub mood: String,
    pub tracks: Vec<TrackRecord>,
}

impl Playlist {
    pub fn new(name: String, mood: String, tracks: Vec<TrackRecord>) -> Self {
        Playlist { name, mood, tracks }
    }

    /// Default display name, e.g. "Ana's Happy Vibes". Names already ending
    /// in `s` get a bare apostrophe; an empty user name becomes "User".
    pub fn default_name(user_name: &str, mood: &str) -> String {
        let user_name = user_name.trim();
        let user_name = if user_name.is_empty() { "User" } else { user_name };
        let possessive = if user_name.ends_with('s') {
            format!("{}'", user_name)
        } else {
            format!("{}'s", user_name)
        };

        let mut chars = mood.trim().chars();
        let mood_title = match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        };

        format!("{} {} Vibes", possessive, mood_title.trim())
    }

    /// Remove one track by id. Returns whether anything was removed.
    pub fn remove_track(&mut self, track_id: &str) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|track| track.id != track_id);
        self.tracks.len() != before
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::extract_tracks;

    fn sample_tracks() -> Vec<TrackRecord> {
        extract_tracks(
            "1. \"A\" Artist: X Album: P\n\
             2. \"B\" Artist: Y Album: Q\n\
             3. \"C\" Artist: Z Album: R",
        )
    }

    #[test]
    fn test_default_name_possessive() {
        assert_eq!(Playlist::default_name("Ana", "happy"), "Ana's Happy Vibes");
        assert_eq!(Playlist::default_name("James", "chill"), "James' Chill Vibes");
        assert_eq!(Playlist::default_name("", "sad"), "User's Sad Vibes");
    }

    #[test]
    fn test_remove_track_by_id() {
        let mut playlist = Playlist::new("Test".into(), "happy".into(), sample_tracks());
        assert_eq!(playlist.len(), 3);

        assert!(playlist.remove_track("track-1"));
        assert_eq!(playlist.len(), 2);
        assert!(playlist.tracks.iter().all(|t| t.title != "B"));

        // Removing an unknown id is a no-op.
        assert!(!playlist.remove_track("track-99"));
        assert_eq!(playlist.len(), 2);
    }

    #[test]
    fn test_emptied_playlist() {
        let mut playlist = Playlist::new("Test".into(), "happy".into(), sample_tracks());
        for id in ["track-0", "track-1", "track-2"] {
            playlist.remove_track(id);
        }
        assert!(playlist.is_empty());
    }
}
