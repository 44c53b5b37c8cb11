//! Display tables for statuses, categories and accent colours

use serde::Serialize;

use super::entity::{ColorAccent, ProjectStatus};

/// Colour set attached to a `ColorAccent`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccentPalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub glow: &'static str,
    pub border: &'static str,
}

impl ColorAccent {
    pub fn palette(&self) -> AccentPalette {
        match self {
            Self::Cyan => AccentPalette {
                primary: "#00ffff",
                secondary: "#0088cc",
                glow: "0 0 20px rgba(0, 255, 255, 0.5)",
                border: "rgba(0, 255, 255, 0.3)",
            },
            Self::Purple => AccentPalette {
                primary: "#8b5cf6",
                secondary: "#7c3aed",
                glow: "0 0 20px rgba(139, 92, 246, 0.5)",
                border: "rgba(139, 92, 246, 0.3)",
            },
            Self::Blue => AccentPalette {
                primary: "#3b82f6",
                secondary: "#2563eb",
                glow: "0 0 20px rgba(59, 130, 246, 0.5)",
                border: "rgba(59, 130, 246, 0.3)",
            },
            Self::Magenta => AccentPalette {
                primary: "#ec4899",
                secondary: "#db2777",
                glow: "0 0 20px rgba(236, 72, 153, 0.5)",
                border: "rgba(236, 72, 153, 0.3)",
            },
        }
    }
}

impl ProjectStatus {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InDevelopment => "In Development",
            Self::Planned => "Planned",
        }
    }

    /// Badge colour
    pub fn color(&self) -> &'static str {
        match self {
            Self::Completed => "#00ff88",
            Self::InDevelopment => "#0084ff",
            Self::Planned => "#a855f7",
        }
    }
}

/// Category ids the site ships labels for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownCategory {
    Web,
    Ai,
    Monitoring,
}

impl KnownCategory {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "web" => Some(Self::Web),
            "ai" => Some(Self::Ai),
            "monitoring" => Some(Self::Monitoring),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Web => "Web Apps",
            Self::Ai => "AI/ML",
            Self::Monitoring => "Monitoring",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Web => "🌐",
            Self::Ai => "🤖",
            Self::Monitoring => "📊",
        }
    }
}

/// Label for an arbitrary category id, falling back to the id itself
pub fn category_label(id: &str) -> &str {
    KnownCategory::from_id(id).map_or(id, |c| c.label())
}

/// Icon for an arbitrary category id
pub fn category_icon(id: &str) -> Option<&'static str> {
    KnownCategory::from_id(id).map(|c| c.icon())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_accent_has_hex_primary() {
        for accent in [
            ColorAccent::Cyan,
            ColorAccent::Purple,
            ColorAccent::Blue,
            ColorAccent::Magenta,
        ] {
            let palette = accent.palette();
            assert!(palette.primary.starts_with('#'));
            assert_eq!(palette.primary.len(), 7);
            assert!(palette.glow.contains("rgba"));
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ProjectStatus::InDevelopment.label(), "In Development");
        assert_eq!(ProjectStatus::Completed.color(), "#00ff88");
    }

    #[test]
    fn test_category_labels_fall_back_to_id() {
        assert_eq!(category_label("ai"), "AI/ML");
        assert_eq!(category_label("blockchain"), "blockchain");
        assert_eq!(category_icon("web"), Some("🌐"));
        assert_eq!(category_icon("blockchain"), None);
        assert_eq!(KnownCategory::from_id("monitoring"), Some(KnownCategory::Monitoring));
        assert_eq!(KnownCategory::from_id("Web"), None);
    }
}
