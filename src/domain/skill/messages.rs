//! Localized user-facing text.
//!
//! Every sentence the skill speaks is a [`Message`] variant. Handlers never
//! branch on locale themselves; they pick a message and render it in the
//! request's [`Language`].

/// Number of playlist titles suggested when a name does not match.
pub const PLAYLIST_SUGGESTION_LIMIT: usize = 3;

/// The languages the skill speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    /// Spanish for any tag starting with `es`, English for everything else.
    pub fn from_locale(locale: &str) -> Self {
        if locale.starts_with("es") {
            Language::Spanish
        } else {
            Language::English
        }
    }
}

/// A user-facing message and the values it interpolates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message<'a> {
    Welcome,
    Help,
    Fallback,
    Goodbye,
    GenericError,
    AskForMusic,
    AskForPlaylist,
    NoMusicFound { query: &'a str },
    NoSearchResults,
    NowPlaying { title: &'a str, artist: &'a str },
    NoPlaylists,
    PlaylistNotFound { name: &'a str, suggestions: &'a [String] },
    PlaylistEmpty { title: &'a str },
    NowPlayingPlaylist { playlist: &'a str, title: &'a str, artist: &'a str },
}

impl Message<'_> {
    /// Renders the message in `language`.
    pub fn render(&self, language: Language) -> String {
        use Language::{English, Spanish};

        match (self, language) {
            (Message::Welcome, English) => "Welcome to YouTube Music. You can ask me to play any song, for example: play Wonderwall by Oasis.".to_string(),
            (Message::Welcome, Spanish) => "Bienvenido a YouTube Music. Puedes pedirme que reproduzca cualquier canción, por ejemplo: reproduce Wonderwall de Oasis.".to_string(),

            (Message::Help, English) => "You can ask me to play music by saying: play followed by the song name or artist. You can also use commands like pause, resume, next, or previous.".to_string(),
            (Message::Help, Spanish) => "Puedes pedirme que reproduzca música diciendo: reproduce seguido del nombre de la canción o artista. También puedes usar comandos como pausa, continúa, siguiente o anterior.".to_string(),

            (Message::Fallback, English) => "Sorry, I don't know about that. You can ask me to play music by saying: play followed by the song name.".to_string(),
            (Message::Fallback, Spanish) => "Lo siento, no entendí eso. Puedes pedirme que reproduzca música diciendo: reproduce seguido del nombre de la canción.".to_string(),

            (Message::Goodbye, English) => "Goodbye!".to_string(),
            (Message::Goodbye, Spanish) => "¡Adiós!".to_string(),

            (Message::GenericError, English) => "Sorry, I had trouble doing what you asked. Please try again.".to_string(),
            (Message::GenericError, Spanish) => "Lo siento, hubo un problema. Por favor intenta de nuevo.".to_string(),

            (Message::AskForMusic, English) => "What music would you like to listen to?".to_string(),
            (Message::AskForMusic, Spanish) => "¿Qué música te gustaría escuchar?".to_string(),

            (Message::AskForPlaylist, English) => "Which playlist would you like to play?".to_string(),
            (Message::AskForPlaylist, Spanish) => "¿Qué playlist te gustaría reproducir?".to_string(),

            (Message::NoMusicFound { query }, English) => {
                format!("I couldn't find music for {query}. Try a different search.")
            }
            (Message::NoMusicFound { query }, Spanish) => {
                format!("No pude encontrar música para {query}. Intenta con otra búsqueda.")
            }

            (Message::NoSearchResults, English) => "I found no results for that search.".to_string(),
            (Message::NoSearchResults, Spanish) => "No encontré resultados para esa búsqueda.".to_string(),

            (Message::NowPlaying { title, artist }, English) => format!("Playing {title} by {artist}"),
            (Message::NowPlaying { title, artist }, Spanish) => format!("Reproduciendo {title} de {artist}"),

            (Message::NoPlaylists, English) => "I couldn't find any playlists in your account. Make sure you have playlists created in YouTube Music.".to_string(),
            (Message::NoPlaylists, Spanish) => "No encontré playlists en tu cuenta. Asegurate de tener playlists creadas en YouTube Music.".to_string(),

            (Message::PlaylistNotFound { name, suggestions }, English) => format!(
                "I couldn't find a playlist called {name}. Here are your available playlists: {}",
                suggestion_list(suggestions)
            ),
            (Message::PlaylistNotFound { name, suggestions }, Spanish) => format!(
                "No encontré una playlist llamada {name}. Estas son tus playlists disponibles: {}",
                suggestion_list(suggestions)
            ),

            (Message::PlaylistEmpty { title }, English) => format!("The playlist {title} is empty."),
            (Message::PlaylistEmpty { title }, Spanish) => format!("La playlist {title} está vacía."),

            (Message::NowPlayingPlaylist { playlist, title, artist }, English) => {
                format!("Playing playlist {playlist}. First song: {title} by {artist}")
            }
            (Message::NowPlayingPlaylist { playlist, title, artist }, Spanish) => {
                format!("Reproduciendo la playlist {playlist}. Primera canción: {title} de {artist}")
            }
        }
    }
}

fn suggestion_list(titles: &[String]) -> String {
    titles
        .iter()
        .take(PLAYLIST_SUGGESTION_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn spanish_prefix_selects_spanish() {
        assert_eq!(Language::from_locale("es-ES"), Language::Spanish);
        assert_eq!(Language::from_locale("es-US"), Language::Spanish);
        assert_eq!(Language::from_locale("en-US"), Language::English);
        assert_eq!(Language::from_locale("fr-FR"), Language::English);
        assert_eq!(Language::from_locale(""), Language::English);
    }

    #[test]
    fn prefix_check_is_case_sensitive() {
        assert_eq!(Language::from_locale("ES-es"), Language::English);
    }

    #[test]
    fn now_playing_interpolates_both_languages() {
        let message = Message::NowPlaying {
            title: "Wonderwall",
            artist: "Oasis",
        };
        assert_eq!(message.render(Language::English), "Playing Wonderwall by Oasis");
        assert_eq!(
            message.render(Language::Spanish),
            "Reproduciendo Wonderwall de Oasis"
        );
    }

    #[test]
    fn playlist_not_found_lists_at_most_three_titles() {
        let titles: Vec<String> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        let message = Message::PlaylistNotFound {
            name: "jazz",
            suggestions: &titles,
        };
        let text = message.render(Language::English);
        assert!(text.ends_with("Here are your available playlists: A, B, C"));
        assert!(!text.contains("D"));
    }

    #[test]
    fn no_music_found_echoes_query() {
        let text = Message::NoMusicFound { query: "lofi beats" }.render(Language::Spanish);
        assert!(text.contains("lofi beats"));
        assert!(text.starts_with("No pude encontrar"));
    }

    proptest! {
        #[test]
        fn any_es_locale_is_spanish(suffix in "[-_A-Za-z0-9]{0,8}") {
            let locale = format!("es{suffix}");
            prop_assert_eq!(Language::from_locale(&locale), Language::Spanish);
            prop_assert_eq!(
                Message::Goodbye.render(Language::from_locale(&locale)),
                "¡Adiós!"
            );
        }

        #[test]
        fn non_es_locale_is_english(locale in "[a-df-z][-_A-Za-z0-9]{0,8}") {
            prop_assert_eq!(Language::from_locale(&locale), Language::English);
            prop_assert_eq!(
                Message::Goodbye.render(Language::from_locale(&locale)),
                "Goodbye!"
            );
        }
    }
}
