// Prompts for the playlist generator
//
// The listing prompt pins the exact numbered/quoted/labeled line format
// that the extractor in `listing.rs` understands.

use crate::mood::GenreQuery;

pub const SYSTEM_PROMPT: &str = "You are a music recommender bot.";

/// How many tracks a single generation request asks for. The extractor
/// itself enforces no count; this only shapes the prompt.
pub const DEFAULT_TRACK_COUNT: usize = 16;

/// Build the user prompt for one mood.
pub fn build_listing_prompt(mood: &str, genres: &GenreQuery, count: usize) -> String {
    format!(
        "Generate a list of {count} songs for the mood \"{mood}\" using genres like {genres}. \
         Use the following format exactly:\n\n\
         1. \"Song Title\" Artist: Artist Name Album: Album Name\n\
         2. \"Song Title\" Artist: Artist Name Album: Album Name\n\
         ... and so on, up to {count} songs.",
        count = count,
        mood = mood,
        genres = genres.to_prompt_list(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::resolve;

    #[test]
    fn test_prompt_contains_mood_and_genres() {
        let prompt = build_listing_prompt("happy", &resolve("happy"), DEFAULT_TRACK_COUNT);
        assert!(prompt.contains("\"happy\""));
        assert!(prompt.contains("pop, indie_pop, feel_good"));
        assert!(prompt.contains("16 songs"));
    }

    #[test]
    fn test_prompt_pins_listing_format() {
        let prompt = build_listing_prompt("sad", &resolve("sad"), 8);
        assert!(prompt.contains("1. \"Song Title\" Artist: Artist Name Album: Album Name"));
        assert!(prompt.contains("8 songs"));
    }
}
