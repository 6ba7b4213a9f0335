//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing version field in YAML
    #[error("Missing 'version' field in effect table file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported effect table version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// Unknown preset name
    #[error("Unknown preset '{0}'. Valid presets: builtin, empty")]
    UnknownPreset(String),

    /// Unknown effect kind name
    #[error("Unknown effect '{effect}' for op '{op}'. {suggestion}")]
    UnknownEffect {
        op: String,
        effect: String,
        suggestion: String,
    },

    /// Same op listed twice in overrides
    #[error("Op '{0}' appears more than once in overrides")]
    DuplicateOverride(String),

    /// Override without op name
    #[error("Override has an empty op name")]
    EmptyOpName,

    /// Op name with leading or trailing whitespace
    #[error("Op name '{0}' has leading or trailing whitespace")]
    PaddedOpName(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create an unknown effect error with suggestion
    pub fn unknown_effect_with_suggestion(
        op: impl Into<String>,
        effect: impl Into<String>,
        valid_effects: &[&str],
    ) -> Self {
        let effect = effect.into();
        let suggestion = find_closest_match(&effect, valid_effects);

        Self::UnknownEffect {
            op: op.into(),
            effect,
            suggestion,
        }
    }
}

/// Find closest match using simple edit distance
fn find_closest_match(target: &str, candidates: &[&str]) -> String {
    match candidates
        .iter()
        .min_by_key(|candidate| levenshtein_distance(target, candidate))
    {
        Some(closest) => format!("Did you mean '{}'?", closest),
        None => "No valid effects available".to_string(),
    }
}

/// Simple Levenshtein distance implementation
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let c1: Vec<char> = s1.chars().collect();
    let c2: Vec<char> = s2.chars().collect();
    let mut matrix = vec![vec![0; c2.len() + 1]; c1.len() + 1];

    for i in 0..=c1.len() {
        matrix[i][0] = i;
    }
    for j in 0..=c2.len() {
        matrix[0][j] = j;
    }

    for i in 0..c1.len() {
        for j in 0..c2.len() {
            let cost = if c1[i] == c2[j] { 0 } else { 1 };
            matrix[i + 1][j + 1] = (matrix[i][j + 1] + 1) // deletion
                .min(matrix[i + 1][j] + 1) // insertion
                .min(matrix[i][j] + cost); // substitution
        }
    }

    matrix[c1.len()][c2.len()]
}
