//! Preset configurations
//!
//! A preset is the registry an effect table starts from before overrides.

/// Base registry preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Builtin TIR intrinsics with their effect kinds
    Builtin,

    /// No ops at all: everything must come from overrides
    Empty,
}

impl Preset {
    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "builtin" => Ok(Self::Builtin),
            "empty" => Ok(Self::Empty),
            _ => Err(format!(
                "Unknown preset '{}'. Valid presets: builtin, empty",
                s
            )),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::Empty => "empty",
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Builtin
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
