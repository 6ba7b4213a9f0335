//! TIR expression tree
//!
//! Design:
//! - **Tree-shaped**: children are owned (`Box`/`Vec`), no sharing, no cycles
//! - **Immutable**: analyses borrow `&PrimExpr`, rewrites build new trees
//! - **Closed**: every node kind is a `PrimExpr` variant, so visitors are exhaustive

use super::{DataType, Op};
use std::fmt;

/// Variable reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Var {
    pub name: String,
    pub dtype: DataType,
}

impl Var {
    pub fn new(name: impl Into<String>, dtype: DataType) -> Self {
        Self {
            name: name.into(),
            dtype,
        }
    }
}

/// Reference to a user-level function (not a built-in operator)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlobalVar {
    pub name_hint: String,
}

impl GlobalVar {
    pub fn new(name_hint: impl Into<String>) -> Self {
        Self {
            name_hint: name_hint.into(),
        }
    }
}

/// What a call invokes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CallTarget {
    /// Built-in operator, classified through the op registry
    Op(Op),

    /// User-defined or external function
    Global(GlobalVar),
}

impl CallTarget {
    pub fn as_op(&self) -> Option<&Op> {
        match self {
            CallTarget::Op(op) => Some(op),
            CallTarget::Global(_) => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CallTarget::Op(op) => op.name(),
            CallTarget::Global(gv) => &gv.name_hint,
        }
    }
}

/// Call node
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub dtype: DataType,
    pub target: CallTarget,
    pub args: Vec<PrimExpr>,
}

/// Binary operators (arithmetic, min/max, logical)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    FloorDiv,
    FloorMod,
    Min,
    Max,
    And,
    Or,
}

impl BinOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::FloorDiv => "//",
            BinOp::FloorMod => "floormod",
            BinOp::Min => "min",
            BinOp::Max => "max",
            BinOp::And => "&&",
            BinOp::Or => "||",
        }
    }
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::Ne => "!=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
        }
    }
}

/// Primitive expression
#[derive(Debug, Clone, PartialEq)]
pub enum PrimExpr {
    IntImm {
        dtype: DataType,
        value: i64,
    },
    FloatImm {
        dtype: DataType,
        value: f64,
    },
    StringImm(String),
    Var(Var),
    Binary {
        op: BinOp,
        a: Box<PrimExpr>,
        b: Box<PrimExpr>,
    },
    Compare {
        op: CmpOp,
        a: Box<PrimExpr>,
        b: Box<PrimExpr>,
    },
    Not(Box<PrimExpr>),
    Select {
        condition: Box<PrimExpr>,
        true_value: Box<PrimExpr>,
        false_value: Box<PrimExpr>,
    },
    Cast {
        dtype: DataType,
        value: Box<PrimExpr>,
    },
    Let {
        var: Var,
        value: Box<PrimExpr>,
        body: Box<PrimExpr>,
    },
    /// `base + i * stride` for `i` in `0..lanes`
    Ramp {
        base: Box<PrimExpr>,
        stride: Box<PrimExpr>,
        lanes: u16,
    },
    Broadcast {
        value: Box<PrimExpr>,
        lanes: u16,
    },
    BufferLoad {
        buffer: Var,
        indices: Vec<PrimExpr>,
    },
    Call(Call),
}

// ═══════════════════════════════════════════════════════════════════════════
// Builders
// ═══════════════════════════════════════════════════════════════════════════

impl PrimExpr {
    pub fn int(value: i64) -> Self {
        PrimExpr::IntImm {
            dtype: DataType::int32(),
            value,
        }
    }

    pub fn float(value: f64) -> Self {
        PrimExpr::FloatImm {
            dtype: DataType::float32(),
            value,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        PrimExpr::StringImm(value.into())
    }

    /// `int32` variable reference
    pub fn var(name: impl Into<String>) -> Self {
        PrimExpr::Var(Var::new(name, DataType::int32()))
    }

    pub fn binary(op: BinOp, a: PrimExpr, b: PrimExpr) -> Self {
        PrimExpr::Binary {
            op,
            a: Box::new(a),
            b: Box::new(b),
        }
    }

    pub fn add(a: PrimExpr, b: PrimExpr) -> Self {
        Self::binary(BinOp::Add, a, b)
    }

    pub fn sub(a: PrimExpr, b: PrimExpr) -> Self {
        Self::binary(BinOp::Sub, a, b)
    }

    pub fn mul(a: PrimExpr, b: PrimExpr) -> Self {
        Self::binary(BinOp::Mul, a, b)
    }

    pub fn compare(op: CmpOp, a: PrimExpr, b: PrimExpr) -> Self {
        PrimExpr::Compare {
            op,
            a: Box::new(a),
            b: Box::new(b),
        }
    }

    pub fn not(value: PrimExpr) -> Self {
        PrimExpr::Not(Box::new(value))
    }

    pub fn select(condition: PrimExpr, true_value: PrimExpr, false_value: PrimExpr) -> Self {
        PrimExpr::Select {
            condition: Box::new(condition),
            true_value: Box::new(true_value),
            false_value: Box::new(false_value),
        }
    }

    pub fn cast(dtype: DataType, value: PrimExpr) -> Self {
        PrimExpr::Cast {
            dtype,
            value: Box::new(value),
        }
    }

    pub fn let_in(var: Var, value: PrimExpr, body: PrimExpr) -> Self {
        PrimExpr::Let {
            var,
            value: Box::new(value),
            body: Box::new(body),
        }
    }

    pub fn ramp(base: PrimExpr, stride: PrimExpr, lanes: u16) -> Self {
        PrimExpr::Ramp {
            base: Box::new(base),
            stride: Box::new(stride),
            lanes,
        }
    }

    pub fn broadcast(value: PrimExpr, lanes: u16) -> Self {
        PrimExpr::Broadcast {
            value: Box::new(value),
            lanes,
        }
    }

    pub fn buffer_load(buffer: impl Into<String>, indices: Vec<PrimExpr>) -> Self {
        PrimExpr::BufferLoad {
            buffer: Var::new(buffer, DataType::handle()),
            indices,
        }
    }

    /// `int32` call to a built-in operator
    pub fn call_op(op: &Op, args: Vec<PrimExpr>) -> Self {
        PrimExpr::Call(Call {
            dtype: DataType::int32(),
            target: CallTarget::Op(op.clone()),
            args,
        })
    }

    /// `int32` call to a user-level function
    pub fn call_global(name: impl Into<String>, args: Vec<PrimExpr>) -> Self {
        PrimExpr::Call(Call {
            dtype: DataType::int32(),
            target: CallTarget::Global(GlobalVar::new(name)),
            args,
        })
    }

    /// Short node-kind name, used in logs
    pub fn kind_name(&self) -> &'static str {
        match self {
            PrimExpr::IntImm { .. } => "IntImm",
            PrimExpr::FloatImm { .. } => "FloatImm",
            PrimExpr::StringImm(_) => "StringImm",
            PrimExpr::Var(_) => "Var",
            PrimExpr::Binary { .. } => "Binary",
            PrimExpr::Compare { .. } => "Compare",
            PrimExpr::Not(_) => "Not",
            PrimExpr::Select { .. } => "Select",
            PrimExpr::Cast { .. } => "Cast",
            PrimExpr::Let { .. } => "Let",
            PrimExpr::Ramp { .. } => "Ramp",
            PrimExpr::Broadcast { .. } => "Broadcast",
            PrimExpr::BufferLoad { .. } => "BufferLoad",
            PrimExpr::Call(_) => "Call",
        }
    }

    /// Total number of nodes in the tree (this node included)
    pub fn node_count(&self) -> usize {
        1 + self.children().map(PrimExpr::node_count).sum::<usize>()
    }

    /// Immediate sub-expressions in operand order
    pub fn children(&self) -> impl Iterator<Item = &PrimExpr> {
        let children: Vec<&PrimExpr> = match self {
            PrimExpr::IntImm { .. }
            | PrimExpr::FloatImm { .. }
            | PrimExpr::StringImm(_)
            | PrimExpr::Var(_) => Vec::new(),
            PrimExpr::Binary { a, b, .. } | PrimExpr::Compare { a, b, .. } => vec![&**a, &**b],
            PrimExpr::Not(value)
            | PrimExpr::Cast { value, .. }
            | PrimExpr::Broadcast { value, .. } => vec![&**value],
            PrimExpr::Select {
                condition,
                true_value,
                false_value,
            } => vec![&**condition, &**true_value, &**false_value],
            PrimExpr::Let { value, body, .. } => vec![&**value, &**body],
            PrimExpr::Ramp { base, stride, .. } => vec![&**base, &**stride],
            PrimExpr::BufferLoad { indices, .. } => indices.iter().collect(),
            PrimExpr::Call(call) => call.args.iter().collect(),
        };
        children.into_iter()
    }
}

impl fmt::Display for PrimExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimExpr::IntImm { value, .. } => write!(f, "{}", value),
            PrimExpr::FloatImm { value, .. } => write!(f, "{:?}", value),
            PrimExpr::StringImm(s) => write!(f, "{:?}", s),
            PrimExpr::Var(v) => f.write_str(&v.name),
            PrimExpr::Binary { op, a, b } => match op {
                BinOp::Min | BinOp::Max | BinOp::FloorMod => {
                    write!(f, "{}({}, {})", op.symbol(), a, b)
                }
                _ => write!(f, "({} {} {})", a, op.symbol(), b),
            },
            PrimExpr::Compare { op, a, b } => write!(f, "({} {} {})", a, op.symbol(), b),
            PrimExpr::Not(value) => write!(f, "!{}", value),
            PrimExpr::Select {
                condition,
                true_value,
                false_value,
            } => write!(f, "select({}, {}, {})", condition, true_value, false_value),
            PrimExpr::Cast { dtype, value } => write!(f, "{}({})", dtype, value),
            PrimExpr::Let { var, value, body } => {
                write!(f, "(let {} = {} in {})", var.name, value, body)
            }
            PrimExpr::Ramp {
                base,
                stride,
                lanes,
            } => write!(f, "ramp({}, {}, {})", base, stride, lanes),
            PrimExpr::Broadcast { value, lanes } => write!(f, "x{}({})", lanes, value),
            PrimExpr::BufferLoad { buffer, indices } => {
                write!(f, "{}[{}]", buffer.name, join(indices))
            }
            PrimExpr::Call(call) => write!(f, "{}({})", call.target.name(), join(&call.args)),
        }
    }
}

fn join(exprs: &[PrimExpr]) -> String {
    exprs
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
