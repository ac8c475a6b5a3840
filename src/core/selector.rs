use crate::core::{PokemonRecord, Tone};

const CAVE_HABITAT: &str = "cave";

/// 傳說寶可夢或洞窟棲息地使用 Yoda 風格，其餘使用 Shakespeare 風格
pub fn select_tone(record: &PokemonRecord) -> Tone {
    if record.is_legendary || record.habitat.as_deref() == Some(CAVE_HABITAT) {
        Tone::Reverent
    } else {
        Tone::Archaic
    }
}
