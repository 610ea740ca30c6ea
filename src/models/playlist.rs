use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MOOD: &str = "calm";
pub const DEFAULT_LANGUAGE: &str = "english";
pub const DEFAULT_GENRE: &str = "lofi";

/// Marker error for a name that isn't one of the known categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

macro_rules! category {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($key:literal, $title:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Lowercase wire name
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            /// Capitalized display name
            pub fn title(&self) -> &'static str {
                match self {
                    $($name::$variant => $title),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownCategory;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($key => Ok($name::$variant),)+
                    _ => Err(UnknownCategory(s.to_string())),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

category!(
    Mood {
        Focused => ("focused", "Focused"),
        Calm => ("calm", "Calm"),
        Energetic => ("energetic", "Energetic"),
        Melancholy => ("melancholy", "Melancholy"),
    }
);

category!(
    Language {
        English => ("english", "English"),
        Tamil => ("tamil", "Tamil"),
    }
);

category!(
    /// Music style, called `ptype` on the wire
    Genre {
        Lofi => ("lofi", "Lofi"),
        Pop => ("pop", "Pop"),
        Melody => ("melody", "Melody"),
        Beats => ("beats", "Beats"),
    }
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub youtube_url: &'static str,
    pub spotify_url: &'static str,
    pub spotify_embed_url: &'static str,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaylistRequest {
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub ptype: Option<String>,
}

impl PlaylistRequest {
    pub fn mood(&self) -> &str {
        self.mood.as_deref().unwrap_or(DEFAULT_MOOD)
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn ptype(&self) -> &str {
        self.ptype.as_deref().unwrap_or(DEFAULT_GENRE)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlaylistSuggestion {
    pub playlist_name: String,
    pub youtube_url: String,
    pub spotify_url: String,
    pub spotify_embed: String,
    pub description: String,
}

impl PlaylistSuggestion {
    pub fn new(mood: Mood, language: Language, genre: Genre, entry: &PlaylistEntry) -> Self {
        Self {
            playlist_name: format!("{} • {} • {}", language.title(), genre.title(), mood.title()),
            youtube_url: entry.youtube_url.to_string(),
            spotify_url: entry.spotify_url.to_string(),
            spotify_embed: entry.spotify_embed_url.to_string(),
            description: format!("{} mood • {} {} playlist", mood.title(), language.title(), genre),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("FOCUSED".parse::<Mood>(), Ok(Mood::Focused));
        assert_eq!("Tamil".parse::<Language>(), Ok(Language::Tamil));
        assert_eq!("LoFi".parse::<Genre>(), Ok(Genre::Lofi));
        assert!("jazz".parse::<Genre>().is_err());
        assert!("".parse::<Mood>().is_err());
    }

    #[test]
    fn test_request_defaults() {
        let req: PlaylistRequest = serde_json::from_str(r#"{"mood": null}"#).unwrap();
        assert_eq!(req.mood(), "calm");
        assert_eq!(req.language(), "english");
        assert_eq!(req.ptype(), "lofi");
    }

    #[test]
    fn test_suggestion_strings() {
        let entry = PlaylistEntry {
            youtube_url: "yt",
            spotify_url: "sp",
            spotify_embed_url: "embed",
        };
        let suggestion = PlaylistSuggestion::new(Mood::Calm, Language::English, Genre::Lofi, &entry);
        assert_eq!(suggestion.playlist_name, "English • Lofi • Calm");
        assert_eq!(suggestion.description, "Calm mood • English lofi playlist");
        assert_eq!(suggestion.spotify_embed, "embed");
    }
}
