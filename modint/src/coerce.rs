//! The operand coercion protocol.
//!
//! Every binary operation of [`ModInt`] first turns its right operand into an
//! [`Operand`], then validates it here before the operation itself runs.
//! This is the only place where modulus compatibility and the
//! [`ConversionPolicy`] are enforced.

use std::fmt::Display;

use num_bigint::BigInt;
use num_traits::FromPrimitive;

use crate::{ConversionPolicy, ModInt, ModIntError};

/// The right operand of a binary operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A value that claims to be in some modular system.
    Modular(ModInt),
    /// A plain integer.
    Plain(BigInt),
    /// Anything the modular system can not combine with.
    Unsupported(&'static str),
}

impl Operand {
    /// Describes the operand for error messages.
    pub fn describe(&self) -> String {
        match self {
            Operand::Modular(m) => format!("{m:?}"),
            Operand::Plain(k) => k.to_string(),
            Operand::Unsupported(kind) => (*kind).to_string(),
        }
    }
}

impl From<ModInt> for Operand {
    #[inline]
    fn from(value: ModInt) -> Self {
        Operand::Modular(value)
    }
}

impl From<&ModInt> for Operand {
    #[inline]
    fn from(value: &ModInt) -> Self {
        Operand::Modular(value.clone())
    }
}

impl From<BigInt> for Operand {
    #[inline]
    fn from(value: BigInt) -> Self {
        Operand::Plain(value)
    }
}

impl From<&BigInt> for Operand {
    #[inline]
    fn from(value: &BigInt) -> Self {
        Operand::Plain(value.clone())
    }
}

impl From<bool> for Operand {
    #[inline]
    fn from(value: bool) -> Self {
        Operand::Plain(BigInt::from(u8::from(value)))
    }
}

macro_rules! impl_operand_from_integer {
    ($($t:ty),*) => {$(
        impl From<$t> for Operand {
            #[inline]
            fn from(value: $t) -> Self {
                Operand::Plain(BigInt::from(value))
            }
        }
    )*};
}

impl_operand_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_operand_from_float {
    ($($t:ty => $from:ident),*) => {$(
        impl From<$t> for Operand {
            /// Narrows to an integer by truncation toward zero.
            #[inline]
            fn from(value: $t) -> Self {
                match BigInt::$from(value.trunc()) {
                    Some(k) => Operand::Plain(k),
                    None => Operand::Unsupported("non-finite float"),
                }
            }
        }
    )*};
}

impl_operand_from_float!(f32 => from_f32, f64 => from_f64);

/// The binary operations known to the modular system.
///
/// The `R*` variants are the reflected forms, where [`ModInt`] is the right
/// hand side, e.g. [`BinaryOp::RSub`] computes `other - self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `self + other`
    Add,
    /// `other + self`
    RAdd,
    /// `self - other`
    Sub,
    /// `other - self`
    RSub,
    /// `self * other`
    Mul,
    /// `other * self`
    RMul,
    /// `self ** other`
    Pow,
    /// `other ** self`
    RPow,
    /// `self / other`
    TrueDiv,
    /// `self // other`
    FloorDiv,
    /// `other / self`
    RTrueDiv,
    /// `other // self`
    RFloorDiv,
    /// `self % other`
    Mod,
    /// `other % self`
    RMod,
    /// `divmod(self, other)`
    DivMod,
    /// `self & other`
    BitAnd,
    /// `self | other`
    BitOr,
    /// `self ^ other`
    BitXor,
    /// `self << other`
    Shl,
    /// `self >> other`
    Shr,
    /// `self == other`
    Eq,
    /// `self != other`
    Ne,
    /// `self < other`
    Lt,
    /// `self <= other`
    Le,
    /// `self > other`
    Gt,
    /// `self >= other`
    Ge,
}

impl BinaryOp {
    /// Returns the name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::RAdd => "radd",
            BinaryOp::Sub => "sub",
            BinaryOp::RSub => "rsub",
            BinaryOp::Mul => "mul",
            BinaryOp::RMul => "rmul",
            BinaryOp::Pow => "pow",
            BinaryOp::RPow => "rpow",
            BinaryOp::TrueDiv => "truediv",
            BinaryOp::FloorDiv => "floordiv",
            BinaryOp::RTrueDiv => "rtruediv",
            BinaryOp::RFloorDiv => "rfloordiv",
            BinaryOp::Mod => "mod",
            BinaryOp::RMod => "rmod",
            BinaryOp::DivMod => "divmod",
            BinaryOp::BitAnd => "and",
            BinaryOp::BitOr => "or",
            BinaryOp::BitXor => "xor",
            BinaryOp::Shl => "lshift",
            BinaryOp::Shr => "rshift",
            BinaryOp::Eq => "eq",
            BinaryOp::Ne => "ne",
            BinaryOp::Lt => "lt",
            BinaryOp::Le => "le",
            BinaryOp::Gt => "gt",
            BinaryOp::Ge => "ge",
        }
    }
}

impl Display for BinaryOp {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The result of [`ModInt::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// An arithmetic result.
    Value(ModInt),
    /// A relational result.
    Truth(bool),
}

impl Outcome {
    /// Returns the arithmetic result, if any.
    #[inline]
    pub fn into_value(self) -> Option<ModInt> {
        match self {
            Outcome::Value(v) => Some(v),
            Outcome::Truth(_) => None,
        }
    }

    /// Returns the relational result, if any.
    #[inline]
    pub fn truth(&self) -> Option<bool> {
        match self {
            Outcome::Value(_) => None,
            Outcome::Truth(t) => Some(*t),
        }
    }
}

/// A validated operand for the operations keeping plain integers.
#[derive(Debug, Clone)]
pub(crate) enum Scalar {
    Modular(ModInt),
    Plain(BigInt),
}

impl Scalar {
    /// The integer this operand stands for.
    #[inline]
    pub(crate) fn into_integer(self) -> BigInt {
        match self {
            Scalar::Modular(m) => m.into_value(),
            Scalar::Plain(k) => k,
        }
    }
}

impl ModInt {
    /// Checks that `other` lives in the same modular system.
    pub(crate) fn check_system(&self, op: &'static str, other: &ModInt) -> Result<(), ModIntError> {
        if other.modulus() == self.modulus() {
            Ok(())
        } else {
            Err(ModIntError::IncompatibleModulus {
                op,
                lhs_modulus: self.modulus().clone(),
                rhs_modulus: other.modulus().clone(),
            })
        }
    }

    /// Coerces `other` into this modular system, promoting plain integers
    /// when `policy` allows it.
    pub(crate) fn coerce_promote(
        &self,
        op: &'static str,
        other: Operand,
        policy: &ConversionPolicy,
    ) -> Result<ModInt, ModIntError> {
        match other {
            Operand::Modular(m) => {
                self.check_system(op, &m)?;
                Ok(m)
            }
            Operand::Plain(k) => {
                if policy.allowed() {
                    Ok(ModInt::with_modulus(k, self.system().clone()))
                } else {
                    Err(ModIntError::ConversionDisabled {
                        op,
                        value: k,
                        modulus: self.modulus().clone(),
                    })
                }
            }
            Operand::Unsupported(kind) => Err(ModIntError::Unsupported {
                op,
                operand: kind.to_string(),
            }),
        }
    }

    /// Validates `other` for an operation which keeps plain integers as they are.
    ///
    /// Multiplication, power and the division family give plain integers
    /// their own meaning (scaling, exponent, divisor).
    pub(crate) fn coerce_scalar(&self, op: &'static str, other: Operand) -> Result<Scalar, ModIntError> {
        match other {
            Operand::Modular(m) => {
                self.check_system(op, &m)?;
                Ok(Scalar::Modular(m))
            }
            Operand::Plain(k) => Ok(Scalar::Plain(k)),
            Operand::Unsupported(kind) => Err(ModIntError::Unsupported {
                op,
                operand: kind.to_string(),
            }),
        }
    }
}
