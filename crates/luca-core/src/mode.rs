//! Chat modes.
//!
//! The selector is fully controlled: the caller owns the active mode and gets
//! the clicked identifier back through its change handler.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the assistant should treat a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    /// General bookkeeping questions.
    #[default]
    Standard,
    /// Cited answers from regulations and guidance.
    Research,
    /// Ratio and trend analysis over ledger data.
    Analysis,
    /// Tax treatment and filing questions.
    Tax,
    /// Control testing and anomaly review.
    Audit,
    /// Cash-flow and budget projections.
    Forecast,
}

impl ChatMode {
    /// All modes in display order.
    pub const ALL: [ChatMode; 6] = [
        ChatMode::Standard,
        ChatMode::Research,
        ChatMode::Analysis,
        ChatMode::Tax,
        ChatMode::Audit,
        ChatMode::Forecast,
    ];

    /// Stable identifier used on the wire.
    pub fn id(self) -> &'static str {
        match self {
            ChatMode::Standard => "standard",
            ChatMode::Research => "research",
            ChatMode::Analysis => "analysis",
            ChatMode::Tax => "tax",
            ChatMode::Audit => "audit",
            ChatMode::Forecast => "forecast",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            ChatMode::Standard => "Standard",
            ChatMode::Research => "Research",
            ChatMode::Analysis => "Analysis",
            ChatMode::Tax => "Tax",
            ChatMode::Audit => "Audit",
            ChatMode::Forecast => "Forecast",
        }
    }

    /// Icon glyph.
    pub fn icon(self) -> &'static str {
        match self {
            ChatMode::Standard => "💬",
            ChatMode::Research => "🔍",
            ChatMode::Analysis => "📊",
            ChatMode::Tax => "🧾",
            ChatMode::Audit => "🛡",
            ChatMode::Forecast => "📈",
        }
    }
}

impl fmt::Display for ChatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ChatMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChatMode::ALL
            .into_iter()
            .find(|mode| mode.id() == s)
            .ok_or_else(|| format!("unknown chat mode '{}'", s))
    }
}

/// One rendered option of the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeOption {
    /// The mode.
    pub mode: ChatMode,
    /// Whether it matches the caller's active identifier.
    pub is_active: bool,
}

/// Controlled mode selector.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeSelector;

impl ModeSelector {
    /// The six options, flagged against the caller's active identifier.
    pub fn options(active: &str) -> Vec<ModeOption> {
        ChatMode::ALL
            .into_iter()
            .map(|mode| ModeOption {
                mode,
                is_active: mode.id() == active,
            })
            .collect()
    }

    /// Forward a click to the caller. The identifier is passed through as-is.
    pub fn select<F: FnOnce(&str)>(id: &str, on_change: F) {
        on_change(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_modes_in_order() {
        let ids: Vec<_> = ChatMode::ALL.iter().map(|m| m.id()).collect();
        assert_eq!(
            ids,
            vec!["standard", "research", "analysis", "tax", "audit", "forecast"]
        );
    }

    #[test]
    fn test_id_round_trips_through_from_str() {
        for mode in ChatMode::ALL {
            assert_eq!(mode.id().parse::<ChatMode>(), Ok(mode));
        }
        assert!("Standard".parse::<ChatMode>().is_err());
    }

    #[test]
    fn test_options_flag_active() {
        let options = ModeSelector::options("tax");
        assert_eq!(options.len(), 6);
        let active: Vec<_> = options.iter().filter(|o| o.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].mode, ChatMode::Tax);
    }

    #[test]
    fn test_unknown_active_marks_nothing() {
        assert!(ModeSelector::options("poetry").iter().all(|o| !o.is_active));
    }

    #[test]
    fn test_select_passes_identifier_through() {
        let mut got = None;
        ModeSelector::select("research", |id| got = Some(id.to_string()));
        assert_eq!(got.as_deref(), Some("research"));

        ModeSelector::select("not-a-mode", |id| got = Some(id.to_string()));
        assert_eq!(got.as_deref(), Some("not-a-mode"));
    }

    #[test]
    fn test_serde_uses_identifier() {
        assert_eq!(
            serde_json::to_string(&ChatMode::Forecast).unwrap(),
            "\"forecast\""
        );
    }
}
