use super::Val;
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

/// ## Operators
///
/// Operand types are checked before anything is computed.

pub struct Operation {}

fn mismatch(verb: &str, lhs: &Val, rhs: &Val) -> Error {
    error!(TypeMismatch; format!(
        "CANNOT {} {} AND {}",
        verb,
        lhs.type_name(),
        rhs.type_name()
    ))
}

impl Operation {
    pub fn negate(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Number(n) => Ok(Number(-n)),
            String(_) | Boolean(_) | Void => {
                Err(error!(TypeMismatch; format!("CANNOT NEGATE {}", val.type_name())))
            }
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (&lhs, &rhs) {
            (Number(l), Number(r)) => Ok(Number(l * r)),
            _ => Err(mismatch("TIMES", &lhs, &rhs)),
        }
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (&lhs, &rhs) {
            (Number(l), Number(r)) => Ok(Number(l / r)),
            _ => Err(mismatch("DIVIDE", &lhs, &rhs)),
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(Number(l + r)),
            (String(l), String(r)) => Ok(String(l + &r)),
            (lhs, rhs) => Err(mismatch("ADD", &lhs, &rhs)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (&lhs, &rhs) {
            (Number(l), Number(r)) => Ok(Number(l - r)),
            _ => Err(mismatch("SUBTRACT", &lhs, &rhs)),
        }
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Operation::relation(lhs, rhs, |o| o == Ordering::Equal)
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Operation::relation(lhs, rhs, |o| o != Ordering::Equal)
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        Operation::relation(lhs, rhs, |o| o == Ordering::Less)
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Operation::relation(lhs, rhs, |o| o != Ordering::Greater)
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        Operation::relation(lhs, rhs, |o| o == Ordering::Greater)
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Operation::relation(lhs, rhs, |o| o != Ordering::Less)
    }

    /// Numbers compare exactly; NaN is unordered and every test on it fails
    /// except `<>`.
    fn relation(lhs: Val, rhs: Val, test: fn(Ordering) -> bool) -> Result<Val> {
        use Val::*;
        let ordering = match (&lhs, &rhs) {
            (Number(l), Number(r)) => l.partial_cmp(r),
            (String(l), String(r)) => Some(l.as_bytes().cmp(r.as_bytes())),
            _ => return Err(mismatch("COMPARE", &lhs, &rhs)),
        };
        Ok(Boolean(match ordering {
            Some(o) => test(o),
            None => test(Ordering::Less) && test(Ordering::Greater),
        }))
    }
}
