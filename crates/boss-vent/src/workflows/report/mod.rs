//! Multi-theme boss report generation.
//!
//! Detection (which themes and markers appear in the text) is kept apart from
//! composition (which paragraphs end up in the report) so either side can be
//! checked on its own.

mod themes;

pub use themes::{
    ThemeDefinition, ThemeKind, ThemeMessages, DEFAULT_MESSAGES, EMOTIONAL_INTENSITY_NOTE,
    STANDARD_THEMES, VULGARITY_MARKERS,
};

use serde::{Deserialize, Serialize};

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Manager-facing summary of a vent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossReport {
    pub rephrased_vent_statements: String,
    pub suggestions_for_boss: String,
}

/// What the generator detected in a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VentAnalysis {
    pub emotional_intensity: bool,
    /// Matched themes in table order.
    pub themes: Vec<ThemeKind>,
}

impl VentAnalysis {
    pub fn is_general(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn theme_labels(&self) -> Vec<&'static str> {
        self.themes.iter().map(|theme| theme.label()).collect()
    }
}

/// Stateless generator over a read-only theme table.
#[derive(Debug, Clone, Copy)]
pub struct BossReportGenerator {
    themes: &'static [ThemeDefinition],
    vulgarity_markers: &'static [&'static str],
}

impl Default for BossReportGenerator {
    fn default() -> Self {
        Self::standard()
    }
}

impl BossReportGenerator {
    pub const fn new(
        themes: &'static [ThemeDefinition],
        vulgarity_markers: &'static [&'static str],
    ) -> Self {
        Self {
            themes,
            vulgarity_markers,
        }
    }

    pub const fn standard() -> Self {
        Self::new(STANDARD_THEMES, VULGARITY_MARKERS)
    }

    pub fn analyze(&self, text: &str) -> VentAnalysis {
        let lower = text.to_lowercase();
        self.detect(&lower).analysis()
    }

    fn detect(&self, lower: &str) -> Detection {
        let emotional_intensity = self
            .vulgarity_markers
            .iter()
            .any(|marker| lower.contains(marker));

        let matched = self
            .themes
            .iter()
            .filter(|theme| theme.matches(lower))
            .collect();

        Detection {
            emotional_intensity,
            matched,
        }
    }

    /// Builds the report for `text`. Total over all inputs.
    pub fn generate(&self, text: &str) -> BossReport {
        self.generate_with_analysis(text).0
    }

    pub fn generate_with_analysis(&self, text: &str) -> (BossReport, VentAnalysis) {
        let lower = text.to_lowercase();
        let detection = self.detect(&lower);

        let mut rephrased: Vec<&'static str> = Vec::new();
        let mut suggestions: Vec<&'static str> = Vec::new();

        if detection.emotional_intensity {
            rephrased.push(EMOTIONAL_INTENSITY_NOTE);
        }

        // Paragraphs come from the matched rows so custom tables keep their own text.
        for theme in &detection.matched {
            rephrased.push(theme.messages.rephrased);
            suggestions.push(theme.messages.suggestion);
        }

        // The default paragraph sits alongside the intensity note when no theme matched.
        if detection.matched.is_empty() {
            rephrased.push(DEFAULT_MESSAGES.rephrased);
            suggestions.push(DEFAULT_MESSAGES.suggestion);
        }

        let report = BossReport {
            rephrased_vent_statements: compose(&rephrased),
            suggestions_for_boss: compose(&suggestions),
        };

        (report, detection.analysis())
    }
}

/// Rows of the injected table that matched, in table order.
struct Detection {
    emotional_intensity: bool,
    matched: Vec<&'static ThemeDefinition>,
}

impl Detection {
    fn analysis(&self) -> VentAnalysis {
        VentAnalysis {
            emotional_intensity: self.emotional_intensity,
            themes: self.matched.iter().map(|theme| theme.kind).collect(),
        }
    }
}

fn compose(paragraphs: &[&str]) -> String {
    paragraphs.join(PARAGRAPH_SEPARATOR).trim().to_string()
}

/// Generates a boss report with the standard theme table.
pub fn generate(text: &str) -> BossReport {
    BossReportGenerator::standard().generate(text)
}
