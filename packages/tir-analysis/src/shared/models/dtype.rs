//! Scalar / vector data types carried by TIR expressions

use std::fmt;

/// Type code of a [`DataType`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    Int,
    UInt,
    Float,
    /// Opaque pointer
    Handle,
}

/// Data type of an expression: `code` + `bits` + vector `lanes`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataType {
    pub code: TypeCode,
    pub bits: u8,
    pub lanes: u16,
}

impl DataType {
    pub const fn new(code: TypeCode, bits: u8, lanes: u16) -> Self {
        Self { code, bits, lanes }
    }

    pub const fn int32() -> Self {
        Self::new(TypeCode::Int, 32, 1)
    }

    pub const fn int64() -> Self {
        Self::new(TypeCode::Int, 64, 1)
    }

    pub const fn float32() -> Self {
        Self::new(TypeCode::Float, 32, 1)
    }

    /// Booleans are 1-bit unsigned integers
    pub const fn bool() -> Self {
        Self::new(TypeCode::UInt, 1, 1)
    }

    pub const fn handle() -> Self {
        Self::new(TypeCode::Handle, 64, 1)
    }

    /// Same element type with a different lane count
    pub const fn with_lanes(self, lanes: u16) -> Self {
        Self::new(self.code, self.bits, lanes)
    }

    pub fn is_scalar(&self) -> bool {
        self.lanes == 1
    }

    pub fn is_bool(&self) -> bool {
        self.code == TypeCode::UInt && self.bits == 1
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_bool() {
            write!(f, "bool")?;
        } else {
            let prefix = match self.code {
                TypeCode::Int => "int",
                TypeCode::UInt => "uint",
                TypeCode::Float => "float",
                TypeCode::Handle => "handle",
            };
            write!(f, "{}{}", prefix, self.bits)?;
        }
        if self.lanes > 1 {
            write!(f, "x{}", self.lanes)?;
        }
        Ok(())
    }
}
