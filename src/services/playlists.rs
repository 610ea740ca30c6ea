use crate::error::{AppError, Result};
use crate::models::{Genre, Language, Mood, PlaylistEntry, PlaylistRequest, PlaylistSuggestion};
use std::collections::HashMap;

pub const INVALID_COMBINATION: &str = "Invalid mood/language/ptype";

const fn entry(
    youtube_url: &'static str,
    spotify_url: &'static str,
    spotify_embed_url: &'static str,
) -> PlaylistEntry {
    PlaylistEntry {
        youtube_url,
        spotify_url,
        spotify_embed_url,
    }
}

const ENGLISH_PLAYLISTS: &[(Mood, Genre, PlaylistEntry)] = &[
    (Mood::Focused, Genre::Lofi, entry(
        "https://www.youtube.com/embed/jfKfPfyJRdk?autoplay=1",
        "https://open.spotify.com/playlist/37i9dQZF1DX8Uebhn9wzrS",
        "https://open.spotify.com/embed/playlist/37i9dQZF1DX8Uebhn9wzrS",
    )),
    (Mood::Focused, Genre::Pop, entry(
        "https://www.youtube.com/embed/y6120QOlsfU?autoplay=1",
        "https://open.spotify.com/playlist/37i9dQZF1DX4UtSsGT1Sbe",
        "https://open.spotify.com/embed/playlist/37i9dQZF1DX4UtSsGT1Sbe",
    )),
    (Mood::Focused, Genre::Melody, entry(
        "https://www.youtube.com/embed/5yx6BWlEVcY?autoplay=1",
        "https://open.spotify.com/playlist/37i9dQZF1DWZd79rJ6a7lp",
        "https://open.spotify.com/embed/playlist/37i9dQZF1DWZd79rJ6a7lp",
    )),
    (Mood::Focused, Genre::Beats, entry(
        "https://www.youtube.com/embed/36YnV9STBqc?autoplay=1",
        "https://open.spotify.com/playlist/37i9dQZF1DX4o1oenSJRJd",
        "https://open.spotify.com/embed/playlist/37i9dQZF1DX4o1oenSJRJd",
    )),
    (Mood::Calm, Genre::Lofi, entry(
        "https://www.youtube.com/embed/5yx6BWlEVcY?autoplay=1",
        "https://open.spotify.com/playlist/1DWuFSxuyo6xjLsanCwGTC",
        "https://open.spotify.com/embed/playlist/1DWuFSxuyo6xjLsanCwGTC",
    )),
    (Mood::Calm, Genre::Pop, entry(
        "https://www.youtube.com/embed/EkHTsc9PU2A?autoplay=1",
        "https://open.spotify.com/playlist/37i9dQZF1DX3rxVfibe1L0",
        "https://open.spotify.com/embed/playlist/37i9dQZF1DX3rxVfibe1L0",
    )),
    (Mood::Calm, Genre::Melody, entry(
        "https://www.youtube.com/embed/1ZYbU82GVz4?autoplay=1",
        "https://open.spotify.com/playlist/37i9dQZF1DWXmlLSKkfdAk",
        "https://open.spotify.com/embed/playlist/37i9dQZF1DWXmlLSKkfdAk",
    )),
    (Mood::Calm, Genre::Beats, entry(
        "https://www.youtube.com/embed/2OEL4P1Rz04?autoplay=1",
        "https://open.spotify.com/playlist/37i9dQZF1DX6VdMW310YC7",
        "https://open.spotify.com/embed/playlist/37i9dQZF1DX6VdMW310YC7",
    )),
    (Mood::Energetic, Genre::Lofi, entry(
        "https://www.youtube.com/embed/hi4pzKvuEQM?autoplay=1",
        "https://open.spotify.com/playlist/37i9dQZF1DX76Wlfdnj7AP",
        "https://open.spotify.com/embed/playlist/37i9dQZF1DX76Wlfdnj7AP",
    )),
    (Mood::Energetic, Genre::Pop, entry(
        "https://www.youtube.com/embed/kXYiU_JCYtU?autoplay=1",
        "https://open.spotify.com/playlist/37i9dQZF1DXcWBRiUaG3o5",
        "https://open.spotify.com/embed/playlist/37i9dQZF1DXcWBRiUaG3o5",
    )),
    (Mood::Energetic, Genre::Melody, entry(
        "https://www.youtube.com/embed/NgcBaJhGHbE?autoplay=1",
        "https://open.spotify.com/playlist/37i9dQZF1DX70RN3TfWWJh",
        "https://open.spotify.com/embed/playlist/37i9dQZF1DX70RN3TfWWJh",
    )),
    (Mood::Energetic, Genre::Beats, entry(
        "https://www.youtube.com/embed/9E6b3swbnWg?autoplay=1",
        "https://open.spotify.com/playlist/37i9dQZF1DX2pSTOxoPbx9",
        "https://open.spotify.com/embed/playlist/37i9dQZF1DX2pSTOxoPbx9",
    )),
    (Mood::Melancholy, Genre::Lofi, entry(
        "https://www.youtube.com/embed/1ZYbU82GVz4?autoplay=1",
        "https://open.spotify.com/playlist/37i9dQZF1DX7gIoKXt0gmx",
        "https://open.spotify.com/embed/playlist/37i9dQZF1DX7gIoKXt0gmx",
    )),
    (Mood::Melancholy, Genre::Pop, entry(
        "https://www.youtube.com/embed/hLQl3WQQoQ0?autoplay=1",
        "https://open.spotify.com/playlist/37i9dQZF1DX7qK8ma5wgG1",
        "https://open.spotify.com/embed/playlist/37i9dQZF1DX7qK8ma5wgG1",
    )),
    (Mood::Melancholy, Genre::Melody, entry(
        "https://www.youtube.com/embed/d-diB65scQU?autoplay=1",
        "https://open.spotify.com/playlist/37i9dQZF1DWSqBruwoIXkA",
        "https://open.spotify.com/embed/playlist/37i9dQZF1DWSqBruwoIXkA",
    )),
    (Mood::Melancholy, Genre::Beats, entry(
        "https://www.youtube.com/embed/oHBx7y8kRPY?autoplay=1",
        "https://open.spotify.com/playlist/37i9dQZF1DX2pNb5XG6XQH",
        "https://open.spotify.com/embed/playlist/37i9dQZF1DX2pNb5XG6XQH",
    )),
];

// Tamil has one playlist per genre, shared by every mood.
const TAMIL_PLAYLISTS: &[(Genre, PlaylistEntry)] = &[
    (Genre::Lofi, entry(
        "https://www.youtube.com/embed/MGQ5m0QdCjE?autoplay=1",
        "https://open.spotify.com/playlist/1E1j2PbaSW1byDCxtaiGlg",
        "https://open.spotify.com/embed/playlist/1E1j2PbaSW1byDCxtaiGlg",
    )),
    (Genre::Pop, entry(
        "https://www.youtube.com/embed/r00ikilDxW4?autoplay=1",
        "https://open.spotify.com/playlist/37i9dQZF1DXaVmfUr97Uve",
        "https://open.spotify.com/embed/playlist/37i9dQZF1DXaVmfUr97Uve",
    )),
    (Genre::Melody, entry(
        "https://www.youtube.com/embed/HpEi0lrpLDo?autoplay=1",
        "https://open.spotify.com/playlist/4zzmGEbnAkLZRiVO9b9eGO",
        "https://open.spotify.com/embed/playlist/4zzmGEbnAkLZRiVO9b9eGO",
    )),
    (Genre::Beats, entry(
        "https://www.youtube.com/embed/1q8gp2AB6VY?autoplay=1",
        "https://open.spotify.com/playlist/43a73ssTnlw00K8ljXDEfO",
        "https://open.spotify.com/embed/playlist/43a73ssTnlw00K8ljXDEfO",
    )),
];

type PlaylistKey = (Mood, Language, Genre);

/// Static (mood, language, genre) -> playlist table
#[derive(Debug, Clone)]
pub struct PlaylistCatalog {
    entries: HashMap<PlaylistKey, PlaylistEntry>,
}

impl Default for PlaylistCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaylistCatalog {
    pub fn new() -> Self {
        let mut entries = HashMap::with_capacity(Mood::ALL.len() * Language::ALL.len() * Genre::ALL.len());

        for (mood, genre, playlist) in ENGLISH_PLAYLISTS {
            entries.insert((*mood, Language::English, *genre), *playlist);
        }

        for mood in Mood::ALL {
            for (genre, playlist) in TAMIL_PLAYLISTS {
                entries.insert((*mood, Language::Tamil, *genre), *playlist);
            }
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, mood: Mood, language: Language, genre: Genre) -> Option<&PlaylistEntry> {
        self.entries.get(&(mood, language, genre))
    }

    /// Resolve raw, case-insensitive request fields into a suggestion.
    ///
    /// Any unknown component, or a combination missing from the table,
    /// fails the whole lookup.
    pub fn resolve(&self, request: &PlaylistRequest) -> Result<PlaylistSuggestion> {
        let invalid = || AppError::Validation(INVALID_COMBINATION.to_string());

        let mood: Mood = request.mood().parse().map_err(|_| invalid())?;
        let language: Language = request.language().parse().map_err(|_| invalid())?;
        let genre: Genre = request.ptype().parse().map_err(|_| invalid())?;

        let playlist = self.get(mood, language, genre).ok_or_else(invalid)?;

        tracing::debug!("Resolved playlist {} / {} / {}", mood, language, genre);

        Ok(PlaylistSuggestion::new(mood, language, genre, playlist))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(mood: &str, language: &str, ptype: &str) -> PlaylistRequest {
        PlaylistRequest {
            mood: Some(mood.to_string()),
            language: Some(language.to_string()),
            ptype: Some(ptype.to_string()),
        }
    }

    #[test]
    fn test_catalog_is_complete() {
        let catalog = PlaylistCatalog::new();
        assert_eq!(catalog.len(), 32);

        for mood in Mood::ALL {
            for language in Language::ALL {
                for genre in Genre::ALL {
                    assert!(
                        catalog.get(*mood, *language, *genre).is_some(),
                        "missing {} / {} / {}",
                        mood,
                        language,
                        genre
                    );
                }
            }
        }
    }

    #[test]
    fn test_resolve_known_triple() {
        let catalog = PlaylistCatalog::new();
        let suggestion = catalog.resolve(&request("focused", "english", "beats")).unwrap();

        assert_eq!(suggestion.playlist_name, "English • Beats • Focused");
        assert_eq!(
            suggestion.youtube_url,
            "https://www.youtube.com/embed/36YnV9STBqc?autoplay=1"
        );
        assert_eq!(
            suggestion.spotify_url,
            "https://open.spotify.com/playlist/37i9dQZF1DX4o1oenSJRJd"
        );
        assert_eq!(
            suggestion.spotify_embed,
            "https://open.spotify.com/embed/playlist/37i9dQZF1DX4o1oenSJRJd"
        );
        assert_eq!(suggestion.description, "Focused mood • English beats playlist");
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let catalog = PlaylistCatalog::new();
        let first = catalog.resolve(&request("melancholy", "english", "pop")).unwrap();
        let second = catalog.resolve(&request("melancholy", "english", "pop")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_uses_defaults() {
        let catalog = PlaylistCatalog::new();
        let suggestion = catalog.resolve(&PlaylistRequest::default()).unwrap();
        assert_eq!(suggestion.playlist_name, "English • Lofi • Calm");
        assert_eq!(
            suggestion.spotify_url,
            "https://open.spotify.com/playlist/1DWuFSxuyo6xjLsanCwGTC"
        );
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let catalog = PlaylistCatalog::new();
        let suggestion = catalog.resolve(&request("Energetic", "ENGLISH", "Melody")).unwrap();
        assert_eq!(suggestion.playlist_name, "English • Melody • Energetic");
        assert_eq!(suggestion.description, "Energetic mood • English melody playlist");
    }

    #[test]
    fn test_resolve_rejects_any_unknown_component() {
        let catalog = PlaylistCatalog::new();

        for (mood, language, ptype) in [
            ("sleepy", "english", "lofi"),
            ("calm", "hindi", "lofi"),
            ("calm", "english", "jazz"),
            ("", "", ""),
        ] {
            match catalog.resolve(&request(mood, language, ptype)) {
                Err(AppError::Validation(msg)) => assert_eq!(msg, INVALID_COMBINATION),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_every_entry_matches_published_links() {
        use Genre::*;
        use Mood::*;

        let english = [
            (Focused, Lofi, "jfKfPfyJRdk", "37i9dQZF1DX8Uebhn9wzrS"),
            (Focused, Pop, "y6120QOlsfU", "37i9dQZF1DX4UtSsGT1Sbe"),
            (Focused, Melody, "5yx6BWlEVcY", "37i9dQZF1DWZd79rJ6a7lp"),
            (Focused, Beats, "36YnV9STBqc", "37i9dQZF1DX4o1oenSJRJd"),
            (Calm, Lofi, "5yx6BWlEVcY", "1DWuFSxuyo6xjLsanCwGTC"),
            (Calm, Pop, "EkHTsc9PU2A", "37i9dQZF1DX3rxVfibe1L0"),
            (Calm, Melody, "1ZYbU82GVz4", "37i9dQZF1DWXmlLSKkfdAk"),
            (Calm, Beats, "2OEL4P1Rz04", "37i9dQZF1DX6VdMW310YC7"),
            (Energetic, Lofi, "hi4pzKvuEQM", "37i9dQZF1DX76Wlfdnj7AP"),
            (Energetic, Pop, "kXYiU_JCYtU", "37i9dQZF1DXcWBRiUaG3o5"),
            (Energetic, Melody, "NgcBaJhGHbE", "37i9dQZF1DX70RN3TfWWJh"),
            (Energetic, Beats, "9E6b3swbnWg", "37i9dQZF1DX2pSTOxoPbx9"),
            (Melancholy, Lofi, "1ZYbU82GVz4", "37i9dQZF1DX7gIoKXt0gmx"),
            (Melancholy, Pop, "hLQl3WQQoQ0", "37i9dQZF1DX7qK8ma5wgG1"),
            (Melancholy, Melody, "d-diB65scQU", "37i9dQZF1DWSqBruwoIXkA"),
            (Melancholy, Beats, "oHBx7y8kRPY", "37i9dQZF1DX2pNb5XG6XQH"),
        ];
        let tamil = [
            (Lofi, "MGQ5m0QdCjE", "1E1j2PbaSW1byDCxtaiGlg"),
            (Pop, "r00ikilDxW4", "37i9dQZF1DXaVmfUr97Uve"),
            (Melody, "HpEi0lrpLDo", "4zzmGEbnAkLZRiVO9b9eGO"),
            (Beats, "1q8gp2AB6VY", "43a73ssTnlw00K8ljXDEfO"),
        ];

        let mut expected = Vec::new();
        for (mood, genre, video, playlist) in english {
            expected.push((mood, Language::English, genre, video, playlist));
        }
        for mood in Mood::ALL {
            for (genre, video, playlist) in tamil {
                expected.push((*mood, Language::Tamil, genre, video, playlist));
            }
        }

        let catalog = PlaylistCatalog::new();
        assert_eq!(expected.len(), catalog.len());

        for (mood, language, genre, video, playlist) in expected {
            let entry = catalog.get(mood, language, genre).unwrap();
            let context = format!("{} / {} / {}", mood, language, genre);

            assert_eq!(
                entry.youtube_url,
                format!("https://www.youtube.com/embed/{}?autoplay=1", video),
                "{}",
                context
            );
            assert_eq!(
                entry.spotify_url,
                format!("https://open.spotify.com/playlist/{}", playlist),
                "{}",
                context
            );
            assert_eq!(
                entry.spotify_embed_url,
                format!("https://open.spotify.com/embed/playlist/{}", playlist),
                "{}",
                context
            );
        }
    }

    #[test]
    fn test_tamil_entries_shared_across_moods() {
        let catalog = PlaylistCatalog::new();

        for genre in Genre::ALL {
            let reference = catalog.get(Mood::Focused, Language::Tamil, *genre).unwrap();
            for mood in Mood::ALL {
                assert_eq!(catalog.get(*mood, Language::Tamil, *genre).unwrap(), reference);
            }
        }
    }
}
