use serde::{Deserialize, Serialize};

/// Complaint categories the boss report knows how to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    Workload,
    Micromanagement,
    Unfairness,
    Communication,
}

/// Manager-facing paragraphs attached to a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeMessages {
    pub rephrased: &'static str,
    pub suggestion: &'static str,
}

/// One row of the theme table: detection keywords plus the paragraphs to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDefinition {
    pub kind: ThemeKind,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub messages: ThemeMessages,
}

impl ThemeDefinition {
    /// `lowercase_text` must already be lowercased; matching is plain
    /// substring containment with no word boundaries.
    pub fn matches(&self, lowercase_text: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowercase_text.contains(keyword))
    }
}

/// Theme table in output order.
pub const STANDARD_THEMES: &[ThemeDefinition] = &[
    ThemeDefinition {
        kind: ThemeKind::Workload,
        name: "Workload & Burnout",
        keywords: &[
            "workload",
            "too much",
            "overwhelmed",
            "burnt out",
            "unrealistic deadlines",
            "stretched thin",
            "no support",
        ],
        messages: ThemeMessages {
            rephrased: "The employee is expressing significant stress related to their workload. They may feel that expectations are unrealistic, deadlines are unmanageable, or that they lack the necessary support, leading to feelings of being overwhelmed and potentially approaching burnout.",
            suggestion: "It might be beneficial to review this employee's current projects and deadlines. Consider asking: 'What does your current workload look like to you?' or 'Is there anything we can deprioritize to ensure you have a manageable workload?' This can open a conversation about realistic expectations and resource allocation.",
        },
    },
    ThemeDefinition {
        kind: ThemeKind::Micromanagement,
        name: "Micromanagement & Autonomy",
        keywords: &[
            "micromanage",
            "control",
            "trust",
            "no autonomy",
            "breathing down my neck",
            "no freedom",
        ],
        messages: ThemeMessages {
            rephrased: "The employee feels a lack of trust and autonomy in their role. They may perceive the current management style as overly controlling, which can stifle their sense of ownership and motivation. They are likely looking for more space to perform their duties independently.",
            suggestion: "Consider ways to demonstrate trust. Could you define the desired outcome of a project and let them determine the process? Try asking: 'I want you to take the lead on this. What do you need from me to be successful?' This can empower them and build confidence.",
        },
    },
    ThemeDefinition {
        kind: ThemeKind::Unfairness,
        name: "Unfair Treatment & Bias",
        keywords: &[
            "unfair",
            "bias",
            "favorite",
            "not equal",
            "double standard",
            "singled out",
            "take credit",
            "blamed",
        ],
        messages: ThemeMessages {
            rephrased: "There is a perception of unfairness or bias in the workplace. The employee may feel that they are being treated differently from their peers, whether in task distribution, recognition, or how mistakes are handled. They might feel that their contributions are undervalued or that they are being unfairly blamed.",
            suggestion: "Reflect on recent team interactions. Is recognition distributed evenly? Are new opportunities offered to everyone? To address this, you could explicitly outline the criteria for new projects or praise specific actions in a team setting, ensuring everyone gets a chance to be seen and acknowledged for their unique contributions.",
        },
    },
    ThemeDefinition {
        kind: ThemeKind::Communication,
        name: "Communication Gaps",
        keywords: &[
            "communication",
            "unclear",
            "confusing",
            "no information",
            "no feedback",
            "left in the dark",
            "vague instructions",
        ],
        messages: ThemeMessages {
            rephrased: "The employee is struggling with a lack of clear communication. They may find instructions to be vague, feel uninformed about important changes, or desire more constructive feedback on their performance. This uncertainty can make it difficult for them to meet expectations.",
            suggestion: "Consider increasing the frequency or clarity of communication. After giving instructions, you could ask, 'What questions do you have?' or 'Can you quickly summarize the next steps to make sure we're aligned?' Regular, informal check-ins can also provide a space to clarify expectations and provide ongoing feedback.",
        },
    },
];

/// Lowercase fragments that mark a vent as emotionally charged.
pub const VULGARITY_MARKERS: &[&str] = &["fuck", "shit", "asshole", "bitch", "bastard"];

pub const EMOTIONAL_INTENSITY_NOTE: &str = "Note: The feedback was expressed with significant emotional intensity, indicating a high level of frustration.";

/// Used when no theme matched.
pub const DEFAULT_MESSAGES: ThemeMessages = ThemeMessages {
    rephrased: "The employee shared some general concerns about their experience at work, or their feedback did not strongly align with common predefined themes.",
    suggestion: "Consider having an open conversation with your team member to understand their perspective better, especially if their concerns were not specific or did not fit into common categories. Regular check-ins can help identify and address unique or nuanced concerns proactively. Ensure that feedback channels are open and that employees feel heard, regardless of the topic.",
};

impl ThemeKind {
    pub fn definition(self) -> &'static ThemeDefinition {
        match self {
            ThemeKind::Workload => &STANDARD_THEMES[0],
            ThemeKind::Micromanagement => &STANDARD_THEMES[1],
            ThemeKind::Unfairness => &STANDARD_THEMES[2],
            ThemeKind::Communication => &STANDARD_THEMES[3],
        }
    }

    pub fn messages(self) -> &'static ThemeMessages {
        &self.definition().messages
    }

    /// Same spelling as the serialized form.
    pub const fn label(self) -> &'static str {
        match self {
            ThemeKind::Workload => "workload",
            ThemeKind::Micromanagement => "micromanagement",
            ThemeKind::Unfairness => "unfairness",
            ThemeKind::Communication => "communication",
        }
    }
}
