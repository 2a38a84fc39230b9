use serde::{Deserialize, Serialize};

/// One binary axis of the type code; axis `i` decides letter `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    pub left: char,
    pub left_label: &'static str,
    pub right: char,
    pub right_label: &'static str,
    pub description: &'static str,
}

pub static AXES: [Axis; 4] = [
    Axis {
        left: 'L',
        left_label: "Lyric",
        right: 'S',
        right_label: "Sound",
        description: "歌詞重視 ↔ サウンド重視",
    },
    Axis {
        left: 'E',
        left_label: "Emotional",
        right: 'T',
        right_label: "Technical",
        description: "感情的 ↔ 技術的",
    },
    Axis {
        left: 'M',
        left_label: "Mainstream",
        right: 'U',
        right_label: "Underground",
        description: "メインストリーム ↔ アンダーグラウンド",
    },
    Axis {
        left: 'D',
        left_label: "Dark",
        right: 'B',
        right_label: "Bright",
        description: "ダーク（内省的） ↔ ブライト（表現的）",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonaType {
    pub code: &'static str,
    pub name: &'static str,
}

pub static PERSONA_TYPES: [PersonaType; 16] = [
    PersonaType { code: "LEMD", name: "夜明けを待つ詩人" },
    PersonaType { code: "LEMB", name: "陽だまりの語り部" },
    PersonaType { code: "LEUD", name: "路地裏の吟遊詩人" },
    PersonaType { code: "LEUB", name: "秘密基地の夢想家" },
    PersonaType { code: "LTMD", name: "硝子細工の作詞家" },
    PersonaType { code: "LTMB", name: "言葉遊びの魔術師" },
    PersonaType { code: "LTUD", name: "深淵の文学者" },
    PersonaType { code: "LTUB", name: "異端の言語学者" },
    PersonaType { code: "SEMD", name: "雨音の旅人" },
    PersonaType { code: "SEMB", name: "祝祭のダンサー" },
    PersonaType { code: "SEUD", name: "地下室の共鳴者" },
    PersonaType { code: "SEUB", name: "真夜中の冒険者" },
    PersonaType { code: "STMD", name: "鋼鉄の建築家" },
    PersonaType { code: "STMB", name: "光速のエンジニア" },
    PersonaType { code: "STUD", name: "孤高の音響職人" },
    PersonaType { code: "STUB", name: "実験室の錬金術師" },
];

impl PersonaType {
    pub fn from_code(code: &str) -> Option<&'static PersonaType> {
        PERSONA_TYPES.iter().find(|t| t.code == code)
    }

    /// The type with every axis flipped, used as the "soulmate" match.
    pub fn opposite(&self) -> &'static PersonaType {
        let flipped: String = self
            .code
            .chars()
            .zip(AXES.iter())
            .map(|(c, axis)| if c == axis.left { axis.right } else { axis.left })
            .collect();

        // Every flip of a taxonomy code is itself in the taxonomy.
        PersonaType::from_code(&flipped).unwrap_or(&PERSONA_TYPES[0])
    }
}

// Deserialize through the code so `&'static` entries survive a JSON round trip.
impl<'de> Deserialize<'de> for PersonaType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            code: String,
        }

        let raw = Raw::deserialize(deserializer)?;
        PersonaType::from_code(&raw.code)
            .copied()
            .ok_or_else(|| serde::de::Error::custom(format!("unknown type code: {}", raw.code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_taxonomy_covers_every_axis_combination() {
        let codes: HashSet<&str> = PERSONA_TYPES.iter().map(|t| t.code).collect();
        assert_eq!(codes.len(), 16);

        for t in PERSONA_TYPES.iter() {
            for (c, axis) in t.code.chars().zip(AXES.iter()) {
                assert!(c == axis.left || c == axis.right, "{} has bad letter {}", t.code, c);
            }
        }
    }

    #[test]
    fn test_names_are_distinct() {
        let names: HashSet<&str> = PERSONA_TYPES.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), PERSONA_TYPES.len());
    }

    #[test]
    fn test_opposite_flips_every_letter() {
        let lemd = PersonaType::from_code("LEMD").unwrap();
        assert_eq!(lemd.opposite().code, "STUB");
        assert_eq!(lemd.opposite().opposite().code, "LEMD");

        for t in PERSONA_TYPES.iter() {
            assert_ne!(t.opposite().code, t.code);
        }
    }

    #[test]
    fn test_unknown_code() {
        assert!(PersonaType::from_code("ABCD").is_none());
        assert!(PersonaType::from_code("lemd").is_none());
    }

    #[test]
    fn test_json_round_trip_uses_code() {
        let t = PersonaType::from_code("SEUB").unwrap();
        let json = serde_json::to_string(t).unwrap();
        let back: PersonaType = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, t);
    }
}
