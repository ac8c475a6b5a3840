use serde::{Deserialize, Serialize};
use std::fmt;

/// Simplified Pokémon representation returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonRecord {
    pub name: String,
    pub description: Option<String>,
    pub habitat: Option<String>,
    pub is_legendary: bool,
}

impl PokemonRecord {
    /// 以新的描述建立新的紀錄，其餘欄位不變
    pub fn with_description(&self, description: String) -> Self {
        Self {
            description: Some(description),
            ..self.clone()
        }
    }
}

/// PokeAPI `{ name, url }` reference. Only the name is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// Subset of PokeAPI's `/pokemon/{name}` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonResource {
    #[serde(default)]
    pub name: Option<String>,
    pub species: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
}

/// Subset of PokeAPI's `/pokemon-species/{name}` payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSpeciesData {
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub habitat: Option<NamedResource>,
    #[serde(default)]
    pub is_legendary: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Pokemon,
    PokemonSpecies,
}

impl ResourceKind {
    /// URL path segment used by PokeAPI
    pub fn path_segment(&self) -> &'static str {
        match self {
            ResourceKind::Pokemon => "pokemon",
            ResourceKind::PokemonSpecies => "pokemon-species",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Style of rewriting requested from the translation provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Yoda-style
    Reverent,
    /// Shakespeare-style
    Archaic,
}

impl Tone {
    /// FunTranslations endpoint name
    pub fn translation_type(&self) -> &'static str {
        match self {
            Tone::Reverent => "yoda",
            Tone::Archaic => "shakespeare",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.translation_type())
    }
}
