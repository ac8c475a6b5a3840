use crate::domain::model::Tone;

/// Structured diagnostics emitted by the information service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceEvent {
    PokemonNotFound {
        name: String,
        reason: String,
    },
    SpeciesUnavailable {
        name: String,
        species: String,
        reason: String,
    },
    TranslationSkipped {
        name: String,
    },
    TranslationFailed {
        name: String,
        tone: Tone,
        reason: String,
    },
    UnexpectedFailure {
        name: String,
        reason: String,
    },
    DescriptionTranslated {
        name: String,
        tone: Tone,
    },
}

impl ServiceEvent {
    pub fn pokemon_name(&self) -> &str {
        match self {
            ServiceEvent::PokemonNotFound { name, .. }
            | ServiceEvent::SpeciesUnavailable { name, .. }
            | ServiceEvent::TranslationSkipped { name }
            | ServiceEvent::TranslationFailed { name, .. }
            | ServiceEvent::UnexpectedFailure { name, .. }
            | ServiceEvent::DescriptionTranslated { name, .. } => name,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ServiceEvent::SpeciesUnavailable { .. }
                | ServiceEvent::TranslationFailed { .. }
                | ServiceEvent::UnexpectedFailure { .. }
        )
    }
}
