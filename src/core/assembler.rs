use crate::core::{PokemonRecord, RawSpeciesData};

/// 將 PokeAPI 物種資料整理成 PokemonRecord
pub fn assemble(name: &str, species: &RawSpeciesData) -> PokemonRecord {
    let description = species
        .flavor_text_entries
        .first()
        .map(|entry| clean_flavor_text(&entry.flavor_text));

    PokemonRecord {
        name: name.to_string(),
        description,
        habitat: species.habitat.as_ref().map(|h| h.name.clone()),
        is_legendary: species.is_legendary,
    }
}

/// Replace every control character (newline, form feed, ...) with a single space.
pub fn clean_flavor_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
