use super::Address;
use crate::error;
use crate::lang::{Error, Ident};

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    overflow_message: &'static str,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str) -> Stack<T> {
        Stack {
            overflow_message,
            vec: vec![],
        }
    }
    fn max_len(&self) -> usize {
        u16::max_value() as usize
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.max_len() {
            return Err(error!(OutOfMemory; self.overflow_message));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(error!(InternalError; "UNDERFLOW")),
        }
    }
}

/// ## Control flow scope
///
/// Loops and subroutine calls share one stack.

#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    For {
        var: Ident,
        limit: f64,
        step: f64,
        top: Address,
    },
    Gosub {
        ret: Address,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    For,
    Gosub,
}

impl Frame {
    pub fn kind(&self) -> Kind {
        match self {
            Frame::For { .. } => Kind::For,
            Frame::Gosub { .. } => Kind::Gosub,
        }
    }
}

impl Stack<Frame> {
    /// Discards frames until one of `kind` is on top or the stack is empty.
    pub fn pop_until(&mut self, kind: Kind) -> Option<&Frame> {
        while let Some(frame) = self.vec.last() {
            if frame.kind() == kind {
                break;
            }
            self.vec.pop();
        }
        self.vec.last()
    }
}
