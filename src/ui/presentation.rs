//! Display tokens for model attributes
//!
//! Maps model status, backend and specialization to badge classes and icons.

use crate::types::model::{ModelKind, ModelStatus, Specialization};

pub const STATUS_READY: &str = "bg-[var(--accent-primary)] text-white";
pub const STATUS_AVAILABLE: &str = "bg-[var(--accent-secondary)] text-white";
pub const STATUS_LOADING: &str = "bg-[var(--accent-tertiary)] text-white";
pub const STATUS_ERROR: &str = "bg-[var(--destructive)] text-white";
pub const STATUS_UNKNOWN: &str = "bg-white/[0.06] text-[var(--text-tertiary)]";

pub const ICON_OLLAMA: &str = "🦙";
pub const ICON_LLAMACPP: &str = "🚀";
pub const ICON_TRANSFORMERS: &str = "🤖";
pub const ICON_DEFAULT: &str = "⚡";

pub const SPECIALIZATION_REASONING: &str =
    "bg-blue-100 text-blue-800 dark:bg-blue-900/40 dark:text-blue-300";
pub const SPECIALIZATION_CREATIVE: &str =
    "bg-purple-100 text-purple-800 dark:bg-purple-900/40 dark:text-purple-300";
pub const SPECIALIZATION_ANALYSIS: &str =
    "bg-green-100 text-green-800 dark:bg-green-900/40 dark:text-green-300";
pub const SPECIALIZATION_VERIFICATION: &str =
    "bg-orange-100 text-orange-800 dark:bg-orange-900/40 dark:text-orange-300";
pub const SPECIALIZATION_DEFAULT: &str =
    "bg-gray-100 text-gray-800 dark:bg-gray-800/60 dark:text-gray-300";

/// Badge class for a model status
pub fn status_color(status: &ModelStatus) -> &'static str {
    match status {
        ModelStatus::Ready => STATUS_READY,
        ModelStatus::Available => STATUS_AVAILABLE,
        ModelStatus::Loading => STATUS_LOADING,
        ModelStatus::Error => STATUS_ERROR,
        ModelStatus::Other(_) => STATUS_UNKNOWN,
    }
}

/// Icon shown next to the model name
pub fn type_icon(kind: &ModelKind) -> &'static str {
    match kind {
        ModelKind::Ollama => ICON_OLLAMA,
        ModelKind::LlamaCpp => ICON_LLAMACPP,
        ModelKind::Transformers => ICON_TRANSFORMERS,
        ModelKind::Other(_) => ICON_DEFAULT,
    }
}

/// Badge class (light and dark variants) for a specialization
pub fn specialization_color(specialization: &Specialization) -> &'static str {
    match specialization {
        Specialization::Reasoning => SPECIALIZATION_REASONING,
        Specialization::Creative => SPECIALIZATION_CREATIVE,
        Specialization::Analysis => SPECIALIZATION_ANALYSIS,
        Specialization::Verification => SPECIALIZATION_VERIFICATION,
        Specialization::Other(_) => SPECIALIZATION_DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ODD_INPUTS: [&str; 5] = ["", "READY", "unknown", " ready", "🦙"];

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(&"ready".into()), STATUS_READY);
        assert_eq!(status_color(&"available".into()), STATUS_AVAILABLE);
        assert_eq!(status_color(&"loading".into()), STATUS_LOADING);
        assert_eq!(status_color(&"error".into()), STATUS_ERROR);
        for input in ODD_INPUTS {
            assert_eq!(status_color(&input.into()), STATUS_UNKNOWN, "{:?}", input);
        }
    }

    #[test]
    fn test_type_icons() {
        assert_eq!(type_icon(&"ollama".into()), ICON_OLLAMA);
        assert_eq!(type_icon(&"llamacpp".into()), ICON_LLAMACPP);
        assert_eq!(type_icon(&"transformers".into()), ICON_TRANSFORMERS);
        for input in ODD_INPUTS {
            assert_eq!(type_icon(&input.into()), ICON_DEFAULT, "{:?}", input);
        }
    }

    #[test]
    fn test_specialization_colors() {
        assert_eq!(specialization_color(&"reasoning".into()), SPECIALIZATION_REASONING);
        assert_eq!(specialization_color(&"creative".into()), SPECIALIZATION_CREATIVE);
        assert_eq!(specialization_color(&"analysis".into()), SPECIALIZATION_ANALYSIS);
        assert_eq!(
            specialization_color(&"verification".into()),
            SPECIALIZATION_VERIFICATION
        );
        for input in ODD_INPUTS {
            assert_eq!(
                specialization_color(&input.into()),
                SPECIALIZATION_DEFAULT,
                "{:?}",
                input
            );
        }
    }

    #[test]
    fn test_specialization_has_dark_variant() {
        for class in [
            SPECIALIZATION_REASONING,
            SPECIALIZATION_CREATIVE,
            SPECIALIZATION_ANALYSIS,
            SPECIALIZATION_VERIFICATION,
            SPECIALIZATION_DEFAULT,
        ] {
            assert!(class.contains("dark:"), "{}", class);
        }
    }
}
