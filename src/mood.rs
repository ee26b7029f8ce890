// Mood taxonomy - maps user-selected moods to genre vocabularies
//
// The vocabulary lives in static tables rather than branching logic:
// adding a mood means adding a row, nothing else changes.

/// Mood -> genre tags used to bias the generation prompt.
const MOOD_GENRES: &[(&str, &[&str])] = &[
    ("happy", &["pop", "indie_pop", "feel_good"]),
    ("sad", &["acoustic", "piano", "singer_songwriter"]),
    ("energetic", &["rock", "hard_rock", "power_metal", "workout"]),
    ("relaxed", &["jazz", "chill", "ambient", "lounge"]),
    ("romantic", &["rnb", "soul", "romance", "love_songs"]),
    ("party", &["dance", "edm", "party", "electropop"]),
    ("chill", &["chill", "lofi", "downtempo", "electronica"]),
    ("focused", &["classical", "study", "focus", "ambient"]),
    ("adventurous", &["world", "folk", "bluegrass", "latin"]),
    ("nostalgic", &["80s", "90s", "retro", "synthwave"]),
    ("aggressive", &["metal", "hardcore", "punk", "thrash"]),
    ("uplifting", &["upbeat", "feel_good", "anthem", "indie_pop"]),
    ("moody", &["trip_hop", "dark_ambient", "dream_pop", "gothic"]),
    ("fun", &["disco", "funk", "party", "electropop"]),
    ("soulful", &["soul", "gospel", "rnb", "jazz"]),
    ("experimental", &["experimental", "avant_garde", "psychedelic"]),
];

/// Fallback when the mood is not in the table.
const DEFAULT_GENRES: &[&str] = &["pop"];

/// Mood -> catalog search term, for the catalog fallback source.
const MOOD_SEARCH_TERMS: &[(&str, &str)] = &[
    ("happy", "happy"),
    ("sad", "sad"),
    ("energetic", "energetic"),
    ("relaxed", "relax"),
    ("romantic", "romantic"),
    ("party", "party"),
    ("chill", "chill"),
];

const DEFAULT_SEARCH_TERM: &str = "pop";

/// The genre tags resolved for one mood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreQuery {
    pub genres: Vec<&'static str>,
}

impl GenreQuery {
    /// Comma-separated genre list for prompt construction.
    pub fn to_prompt_list(&self) -> String {
        self.genres.join(", ")
    }
}

/// Resolve a mood label to its genre tags.
///
/// Lookup is case-insensitive and total: an unknown mood resolves to the
/// default query instead of failing.
pub fn resolve(mood: &str) -> GenreQuery {
    let key = mood.trim().to_lowercase();
    let genres = MOOD_GENRES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, genres)| *genres)
        .unwrap_or(DEFAULT_GENRES);

    GenreQuery {
        genres: genres.to_vec(),
    }
}

/// Resolve a mood label to a catalog search term. Same lookup rules as
/// [`resolve`]: case-insensitive, unknown moods fall back to "pop".
pub fn search_term(mood: &str) -> &'static str {
    let key = mood.trim().to_lowercase();
    MOOD_SEARCH_TERMS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, term)| *term)
        .unwrap_or(DEFAULT_SEARCH_TERM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_mood() {
        let query = resolve("happy");
        assert_eq!(query.genres, vec!["pop", "indie_pop", "feel_good"]);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve("Happy"), resolve("happy"));
        assert_eq!(resolve("HAPPY"), resolve("happy"));
        assert_eq!(resolve("  energetic  "), resolve("energetic"));
    }

    #[test]
    fn test_resolve_unknown_mood_falls_back() {
        assert_eq!(resolve("xyzzy").genres, vec!["pop"]);
        assert_eq!(resolve("").genres, vec!["pop"]);
    }

    #[test]
    fn test_resolve_is_total_and_non_empty() {
        for input in ["", "happy", "melancholic", "🎵", "HAPPY\n"] {
            assert!(!resolve(input).genres.is_empty());
        }
    }

    #[test]
    fn test_search_term_lookup() {
        assert_eq!(search_term("Relaxed"), "relax");
        assert_eq!(search_term("unknown-mood"), "pop");
    }

    #[test]
    fn test_genre_table_rows_are_clean() {
        for (mood, genres) in MOOD_GENRES {
            assert!(!genres.is_empty(), "mood {} has no genres", mood);
            for (i, genre) in genres.iter().enumerate() {
                assert!(
                    !genres[..i].contains(genre),
                    "mood {} repeats genre {}",
                    mood,
                    genre
                );
            }
        }
    }

    #[test]
    fn test_prompt_list_rendering() {
        assert_eq!(resolve("sad").to_prompt_list(), "acoustic, piano, singer_songwriter");
    }
}
