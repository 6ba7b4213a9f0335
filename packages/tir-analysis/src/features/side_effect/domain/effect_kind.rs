/// Call effect kinds
use serde::{Deserialize, Serialize};

/// Effect classification attached to a built-in operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallEffectKind {
    /// Metadata marker around its arguments (`likely`, type hints)
    ExprAnnotation,

    /// Only computes a value
    Pure,

    /// Reads external state (result may change between evaluations)
    ReadState,

    /// Writes external state
    UpdateState,

    /// Anything may happen
    Opaque,

    /// Only valid as an argument of a specific intrinsic (`address_of`)
    SpecialCallArg,

    /// Embeds raw target code
    EmbedC,

    /// Transfers control (`ret`)
    ControlJump,
}

impl CallEffectKind {
    pub const ALL: [CallEffectKind; 8] = [
        CallEffectKind::ExprAnnotation,
        CallEffectKind::Pure,
        CallEffectKind::ReadState,
        CallEffectKind::UpdateState,
        CallEffectKind::Opaque,
        CallEffectKind::SpecialCallArg,
        CallEffectKind::EmbedC,
        CallEffectKind::ControlJump,
    ];

    /// Pure and annotation calls contribute no effect of their own
    pub fn is_side_effect_free(&self) -> bool {
        matches!(self, CallEffectKind::Pure | CallEffectKind::ExprAnnotation)
    }

    pub fn is_side_effect(&self) -> bool {
        !self.is_side_effect_free()
    }

    /// Severity rank (0-3, higher = more severe)
    ///
    /// Everything that is not annotation/pure/read collapses onto the
    /// `UpdateState` rank.
    pub fn severity(&self) -> u8 {
        match self {
            CallEffectKind::ExprAnnotation => 0,
            CallEffectKind::Pure => 1,
            CallEffectKind::ReadState => 2,
            CallEffectKind::UpdateState
            | CallEffectKind::Opaque
            | CallEffectKind::SpecialCallArg
            | CallEffectKind::EmbedC
            | CallEffectKind::ControlJump => 3,
        }
    }

    /// Highest severity rank
    pub const MAX_SEVERITY: u8 = 3;

    /// Representative kind for aggregated results
    ///
    /// Kinds that only make sense on a single call site are reported as `Opaque`.
    pub fn normalized(&self) -> CallEffectKind {
        match self {
            CallEffectKind::SpecialCallArg | CallEffectKind::EmbedC | CallEffectKind::ControlJump => {
                CallEffectKind::Opaque
            }
            other => *other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CallEffectKind::ExprAnnotation => "expr_annotation",
            CallEffectKind::Pure => "pure",
            CallEffectKind::ReadState => "read_state",
            CallEffectKind::UpdateState => "update_state",
            CallEffectKind::Opaque => "opaque",
            CallEffectKind::SpecialCallArg => "special_call_arg",
            CallEffectKind::EmbedC => "embed_c",
            CallEffectKind::ControlJump => "control_jump",
        }
    }

    /// Parse from the snake_case name used in config files
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl std::fmt::Display for CallEffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
