// src/moods.rs

//! The fixed mood taxonomy and its per-provider query descriptors.
//!
//! The catalog is static process-wide data: every mood key maps to a display
//! label, a TMDB genre-id list, and a Google Books search string. Lookup is
//! total over the enumerated keys and absent for everything else.

use std::fmt;

/// Query descriptors for one mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodEntry {
    /// User-facing label
    pub label: &'static str,

    /// TMDB genre ids, combined as an OR-set in discovery requests
    pub movie_genres: &'static [u32],

    /// Free-text Google Books query
    pub book_query: &'static str,
}

/// The closed set of selectable moods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sad,
    Tense,
    Calm,
    Anxious,
    Inspired,
    Romantic,
    Energetic,
    Scary,
}

impl Mood {
    /// Every mood, in menu order.
    pub const ALL: [Mood; 9] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Tense,
        Mood::Calm,
        Mood::Anxious,
        Mood::Inspired,
        Mood::Romantic,
        Mood::Energetic,
        Mood::Scary,
    ];

    /// The short stable key identifying this mood.
    pub fn key(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Tense => "tense",
            Mood::Calm => "calm",
            Mood::Anxious => "anxious",
            Mood::Inspired => "inspired",
            Mood::Romantic => "romantic",
            Mood::Energetic => "energetic",
            Mood::Scary => "scary",
        }
    }

    /// Resolve a key to its mood. Exact match only; unknown keys are `None`.
    pub fn from_key(key: &str) -> Option<Mood> {
        Mood::ALL.into_iter().find(|mood| mood.key() == key)
    }

    /// The mood's query descriptors.
    pub fn entry(self) -> &'static MoodEntry {
        match self {
            Mood::Happy => &MoodEntry {
                label: "😊 Joy",
                movie_genres: &[35, 10751], // Comedy, Family
                book_query: "feel good happiness",
            },
            Mood::Sad => &MoodEntry {
                label: "😢 Sadness",
                movie_genres: &[18], // Drama
                book_query: "life drama",
            },
            Mood::Tense => &MoodEntry {
                label: "😤 Tense",
                movie_genres: &[28, 53], // Action, Thriller
                book_query: "thriller action",
            },
            Mood::Calm => &MoodEntry {
                label: "😌 Calm",
                movie_genres: &[99, 10749], // Documentary, Romance
                book_query: "philosophy calm",
            },
            Mood::Anxious => &MoodEntry {
                label: "😰 Anxious",
                movie_genres: &[27, 53, 9648], // Horror, Thriller, Mystery
                book_query: "psychological thriller mystery",
            },
            Mood::Inspired => &MoodEntry {
                label: "🌟 Inspired",
                movie_genres: &[18, 36, 99], // Drama, History, Documentary
                book_query: "biography motivational documentary",
            },
            Mood::Romantic => &MoodEntry {
                label: "💖 Romantic",
                movie_genres: &[10749, 35], // Romance, Comedy
                book_query: "romantic comedy love",
            },
            Mood::Energetic => &MoodEntry {
                label: "⚡ Energetic",
                movie_genres: &[28, 12, 53], // Action, Adventure, Thriller
                book_query: "action adventure energy",
            },
            Mood::Scary => &MoodEntry {
                label: "👻 Scary",
                movie_genres: &[27, 53], // Horror, Thriller
                book_query: "horror thriller scary",
            },
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Look up the query descriptors for a mood key.
///
/// Returns `None` for any key outside the enumerated set; callers present a
/// mood-selection affordance in that case instead of failing.
pub fn lookup(key: &str) -> Option<&'static MoodEntry> {
    Mood::from_key(key).map(Mood::entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mood_is_fully_populated() {
        for mood in Mood::ALL {
            let entry = mood.entry();
            assert!(!entry.label.is_empty(), "{mood} has an empty label");
            assert!(
                !entry.movie_genres.is_empty(),
                "{mood} has no movie genres"
            );
            assert!(!entry.book_query.is_empty(), "{mood} has no book query");
        }
    }

    #[test]
    fn lookup_round_trips_every_key() {
        for mood in Mood::ALL {
            assert_eq!(Mood::from_key(mood.key()), Some(mood));
            assert_eq!(lookup(mood.key()), Some(mood.entry()));
        }
    }

    #[test]
    fn lookup_unknown_key_is_absent() {
        assert_eq!(lookup("angry"), None);
        assert_eq!(lookup(""), None);
        // matching is exact; the CLI lowercases before lookup
        assert_eq!(lookup("Happy"), None);
    }

    #[test]
    fn happy_matches_curated_queries() {
        let entry = lookup("happy").unwrap();
        assert_eq!(entry.movie_genres, &[35, 10751]);
        assert_eq!(entry.book_query, "feel good happiness");
    }

    #[test]
    fn sad_matches_curated_queries() {
        let entry = lookup("sad").unwrap();
        assert_eq!(entry.movie_genres, &[18]);
        assert_eq!(entry.book_query, "life drama");
    }
}
