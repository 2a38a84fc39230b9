mod axes_guide;
mod question_field;
mod song_fields;

pub use axes_guide::AxesGuide;
pub use question_field::QuestionField;
pub use song_fields::SongFields;
