use super::Val;
use crate::error;
use crate::lang::{Error, Ident};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Only the first two letters of a name are significant. String and
/// numeric variables live in separate partitions.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<(String, bool), Val>,
}

fn key(ident: &Ident) -> (String, bool) {
    let letters = ident
        .name()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(2)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    (letters, ident.is_string())
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn fetch(&self, ident: &Ident) -> Val {
        match self.vars.get(&key(ident)) {
            Some(val) => val.clone(),
            None if ident.is_string() => Val::String(String::new()),
            None => Val::Number(0.0),
        }
    }

    pub fn store(&mut self, ident: &Ident, value: Val) -> Result<()> {
        match (&value, ident.is_string()) {
            (Val::Number(_), false) | (Val::String(_), true) => {}
            _ => {
                let kind = if ident.is_string() { "STRING" } else { "NUMBER" };
                return Err(error!(TypeMismatch; format!(
                    "CANNOT ASSIGN {} TO {} VARIABLE {}",
                    value.type_name(),
                    kind,
                    ident
                )));
            }
        }
        self.vars.insert(key(ident), value);
        Ok(())
    }

    /// Adds `delta` to a numeric variable in place and returns the result.
    pub fn increment(&mut self, ident: &Ident, delta: f64) -> Result<f64> {
        let n = match self.fetch(ident) {
            Val::Number(n) => n + delta,
            val => {
                return Err(error!(TypeMismatch; format!(
                    "CANNOT ADD {} AND NUMBER",
                    val.type_name()
                )))
            }
        };
        self.store(ident, Val::Number(n))?;
        Ok(n)
    }
}
