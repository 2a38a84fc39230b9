use serde::{Deserialize, Serialize};
use sound_persona_errors::AppError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
}

impl Song {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }
}

/// One form submission: the "life's three songs" plus three answers about music.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub songs: [Song; 3],
    /// What matters most in music (lyrics, melody, rhythm...).
    pub element: String,
    /// When the user wants to listen.
    pub situation: String,
    /// What music is to the user. Required.
    pub value: String,
}

impl UserInput {
    pub fn new(songs: [Song; 3]) -> Self {
        Self {
            songs,
            ..Self::default()
        }
    }

    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = element.into();
        self
    }

    pub fn with_situation(mut self, situation: impl Into<String>) -> Self {
        self.situation = situation.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.songs[0].title.trim().is_empty() || self.value.trim().is_empty() {
            return Err(AppError::Validation(
                "少なくとも「1曲目」と「音楽とは」は入力してください。".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn songs() -> [Song; 3] {
        [
            Song::new("Creep", "Radiohead"),
            Song::default(),
            Song::default(),
        ]
    }

    #[test]
    fn test_first_song_and_value_are_enough() {
        let input = UserInput::new(songs()).with_value("逃避場所");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_missing_value_is_rejected() {
        let input = UserInput::new(songs()).with_element("歌詞");
        assert!(matches!(input.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_missing_first_song_is_rejected() {
        let input = UserInput::new([
            Song::default(),
            Song::new("Karma Police", "Radiohead"),
            Song::default(),
        ])
        .with_value("救い");
        assert!(matches!(input.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let input = UserInput::new([Song::new("  ", ""), Song::default(), Song::default()])
            .with_value("\t");
        assert!(input.validate().is_err());
    }
}
