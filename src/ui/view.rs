//! Model list view model
//!
//! Everything the model list shows, derived from the query state alone. The
//! Dioxus components only turn this into markup.

use crate::types::model::ModelDescriptor;
use crate::ui::presentation::{specialization_color, status_color, type_icon};

pub const LOADING_MESSAGE: &str = "Scanning for local models...";
pub const EMPTY_TITLE: &str = "No local models found";
pub const EMPTY_MESSAGE: &str =
    "Start Ollama, llama.cpp or a transformers backend and the models it serves will show up here.";

/// A colored label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub class: &'static str,
}

/// A capability tag on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityBadge {
    /// Render key, unique within the card even for repeated capabilities
    pub key: String,
    pub label: String,
}

/// One card per model
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCard {
    pub key: String,
    pub icon: &'static str,
    pub name: String,
    pub type_label: String,
    pub specialization: Badge,
    pub status: Badge,
    pub memory: String,
    pub capability_count: String,
    pub capabilities: Vec<CapabilityBadge>,
}

impl ModelCard {
    pub fn from_descriptor(model: &ModelDescriptor) -> Self {
        Self {
            key: model.id.clone(),
            icon: type_icon(&model.kind),
            name: model.name.clone(),
            type_label: model.kind.as_str().to_uppercase(),
            specialization: Badge {
                label: model.specialized.as_str().to_string(),
                class: specialization_color(&model.specialized),
            },
            status: Badge {
                label: model.status.as_str().to_string(),
                class: status_color(&model.status),
            },
            memory: format_memory_gb(model.memory_mb),
            capability_count: format!("{} capabilities", model.capabilities.len()),
            capabilities: model
                .capabilities
                .iter()
                .enumerate()
                .map(|(index, capability)| CapabilityBadge {
                    key: format!("{}:{}", index, capability),
                    label: capability.clone(),
                })
                .collect(),
        }
    }
}

/// What the model list currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum ModelsView {
    Loading,
    Empty,
    Populated(Vec<ModelCard>),
}

impl ModelsView {
    /// Header line next to the title
    pub fn header(&self) -> String {
        match self {
            ModelsView::Loading => LOADING_MESSAGE.to_string(),
            ModelsView::Empty => format!("{} detected", model_count_label(0)),
            ModelsView::Populated(cards) => {
                format!("{} detected", model_count_label(cards.len()))
            }
        }
    }
}

/// Build the view for a query state. Loading wins over any stale data.
pub fn build_view(data: &[ModelDescriptor], is_loading: bool) -> ModelsView {
    if is_loading {
        return ModelsView::Loading;
    }
    if data.is_empty() {
        return ModelsView::Empty;
    }
    ModelsView::Populated(data.iter().map(ModelCard::from_descriptor).collect())
}

/// Megabytes shown as gigabytes with one decimal, halves rounded up
pub fn format_memory_gb(memory_mb: f64) -> String {
    let tenths = (memory_mb / 1024.0 * 10.0).round();
    format!("{:.1}GB", tenths / 10.0)
}

/// "1 model", "3 models"
pub fn model_count_label(count: usize) -> String {
    if count == 1 {
        "1 model".to_string()
    } else {
        format!("{} models", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::presentation::{
        ICON_OLLAMA, SPECIALIZATION_REASONING, STATUS_READY, STATUS_UNKNOWN,
    };

    fn model(id: &str, capabilities: &[&str]) -> ModelDescriptor {
        ModelDescriptor {
            id: id.to_string(),
            name: format!("Model {}", id),
            kind: "transformers".into(),
            status: "available".into(),
            capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
            memory_mb: 2048.0,
            specialized: "analysis".into(),
        }
    }

    fn cards(view: ModelsView) -> Vec<ModelCard> {
        match view {
            ModelsView::Populated(cards) => cards,
            other => panic!("expected populated view, got {:?}", other),
        }
    }

    #[test]
    fn test_memory_format() {
        assert_eq!(format_memory_gb(2048.0), "2.0GB");
        assert_eq!(format_memory_gb(1536.0), "1.5GB");
        assert_eq!(format_memory_gb(0.0), "0.0GB");
        assert_eq!(format_memory_gb(4096.0), "4.0GB");
        assert_eq!(format_memory_gb(1000.0), "1.0GB");
    }

    #[test]
    fn test_memory_format_rounds_halves_up() {
        assert_eq!(format_memory_gb(256.0), "0.3GB");
        assert_eq!(format_memory_gb(768.0), "0.8GB");
        assert_eq!(format_memory_gb(1280.0), "1.3GB");
        assert_eq!(format_memory_gb(2304.0), "2.3GB");
    }

    #[test]
    fn test_headers_pluralize() {
        assert_eq!(build_view(&[], false), ModelsView::Empty);
        assert_eq!(build_view(&[], false).header(), "0 models detected");
        assert_eq!(
            build_view(&[model("a", &[])], false).header(),
            "1 model detected"
        );
        assert_eq!(
            build_view(&[model("a", &[]), model("b", &[])], false).header(),
            "2 models detected"
        );
    }

    #[test]
    fn test_loading_wins_over_data() {
        assert_eq!(build_view(&[], true), ModelsView::Loading);
        assert_eq!(build_view(&[model("a", &["chat"])], true), ModelsView::Loading);
        assert_eq!(ModelsView::Loading.header(), LOADING_MESSAGE);
    }

    #[test]
    fn test_view_is_pure() {
        let data = vec![model("a", &["chat"]), model("b", &[])];
        assert_eq!(build_view(&data, false), build_view(&data, false));
        assert_eq!(data[0].capabilities, vec!["chat"]);
    }

    #[test]
    fn test_cards_keep_fetch_order() {
        let data = vec![model("z", &[]), model("a", &[]), model("m", &[])];
        let keys: Vec<String> = cards(build_view(&data, false))
            .into_iter()
            .map(|card| card.key)
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_capability_badges() {
        let data = vec![model("a", &[]), model("b", &["chat", "code"])];
        let cards = cards(build_view(&data, false));

        assert!(cards[0].capabilities.is_empty());
        assert_eq!(cards[0].capability_count, "0 capabilities");

        let labels: Vec<&str> = cards[1]
            .capabilities
            .iter()
            .map(|badge| badge.label.as_str())
            .collect();
        assert_eq!(labels, vec!["chat", "code"]);
        assert_eq!(cards[1].capability_count, "2 capabilities");
    }

    #[test]
    fn test_duplicate_capabilities_get_distinct_keys() {
        let cards = cards(build_view(&[model("a", &["chat", "chat"])], false));
        let badges = &cards[0].capabilities;
        assert_eq!(badges.len(), 2);
        assert_ne!(badges[0].key, badges[1].key);
    }

    #[test]
    fn test_unknown_values_render_defaults() {
        let mut odd = model("x", &[]);
        odd.status = "hibernating".into();
        odd.kind = "vllm".into();
        let card = ModelCard::from_descriptor(&odd);
        assert_eq!(card.status.class, STATUS_UNKNOWN);
        assert_eq!(card.status.label, "hibernating");
        assert_eq!(card.type_label, "VLLM");
    }

    #[test]
    fn test_llama3_card() {
        let descriptor = ModelDescriptor {
            id: "m1".to_string(),
            name: "Llama3".to_string(),
            kind: "ollama".into(),
            status: "ready".into(),
            capabilities: vec!["chat".to_string()],
            memory_mb: 4096.0,
            specialized: "reasoning".into(),
        };

        let cards = cards(build_view(&[descriptor], false));
        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.key, "m1");
        assert_eq!(card.icon, ICON_OLLAMA);
        assert_eq!(card.name, "Llama3");
        assert_eq!(card.type_label, "OLLAMA");
        assert_eq!(card.specialization.label, "reasoning");
        assert_eq!(card.specialization.class, SPECIALIZATION_REASONING);
        assert_eq!(card.status.label, "ready");
        assert_eq!(card.status.class, STATUS_READY);
        assert_eq!(card.memory, "4.0GB");
        assert_eq!(card.capability_count, "1 capabilities");
        assert_eq!(card.capabilities.len(), 1);
        assert_eq!(card.capabilities[0].label, "chat");
    }
}
