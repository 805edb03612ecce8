use super::{Output, Val};
use crate::error;
use crate::lang::Error;
use rand::Rng;
use std::collections::HashMap;
use std::ops::RangeInclusive;

type Result<T> = std::result::Result<T, Error>;

/// Widest column `TAB` will pad to.
const MAX_TAB: f64 = 255.0;

pub type Builtin = fn(&[f64], &mut dyn Output) -> Result<Val>;

/// ## Builtin function registry
///
/// Every builtin takes numbers only. Arity and argument types are
/// checked here so the builtins themselves can't fail on bad input.

pub struct Function {
    table: HashMap<&'static str, (RangeInclusive<usize>, Builtin)>,
}

impl Default for Function {
    fn default() -> Function {
        let mut f = Function {
            table: HashMap::new(),
        };
        f.define("ABS", 1..=1, |a, _| Ok(Val::Number(a[0].abs())));
        f.define("COS", 1..=1, |a, _| Ok(Val::Number(a[0].cos())));
        f.define("LN", 1..=1, |a, _| Ok(Val::Number(a[0].ln())));
        f.define("LOG", 1..=1, |a, _| Ok(Val::Number(a[0].log10())));
        f.define("SIN", 1..=1, |a, _| Ok(Val::Number(a[0].sin())));
        f.define("TAN", 1..=1, |a, _| Ok(Val::Number(a[0].tan())));
        f.define("TAB", 1..=1, Function::tab);
        f.define("RND", 0..=1, Function::rnd);
        f
    }
}

impl Function {
    pub fn new() -> Function {
        Function::default()
    }

    /// Adds or replaces a builtin.
    pub fn define(&mut self, name: &'static str, arity: RangeInclusive<usize>, f: Builtin) {
        self.table.insert(name, (arity, f));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name.to_ascii_uppercase().as_str())
    }

    pub fn call(&self, name: &str, args: Vec<Val>, output: &mut dyn Output) -> Result<Val> {
        let name = name.to_ascii_uppercase();
        let (arity, f) = match self.table.get(name.as_str()) {
            Some(entry) => entry,
            None => {
                return Err(error!(UndefinedFunction; format!(
                    "FUNCTION {} IS NOT DEFINED",
                    name
                )))
            }
        };
        if !arity.contains(&args.len()) {
            let expects = if arity.start() == arity.end() {
                let n = *arity.start();
                format!("{} ARGUMENT{}", n, if n == 1 { "" } else { "S" })
            } else {
                format!("{} TO {} ARGUMENTS", arity.start(), arity.end())
            };
            return Err(error!(IllegalFunctionCall; format!(
                "FUNCTION {} EXPECTS {}",
                name, expects
            )));
        }
        let mut numbers = Vec::with_capacity(args.len());
        for arg in args {
            match arg {
                Val::Number(n) => numbers.push(n),
                other => {
                    return Err(error!(TypeMismatch; format!(
                        "CANNOT CALL {} WITH {}",
                        name,
                        other.type_name()
                    )))
                }
            }
        }
        f(&numbers, output)
    }

    fn tab(args: &[f64], output: &mut dyn Output) -> Result<Val> {
        if args[0] > MAX_TAB {
            return Err(error!(IllegalFunctionCall; format!(
                "TAB COLUMN {} EXCEEDS {}",
                Val::Number(args[0]),
                MAX_TAB
            )));
        }
        if args[0] >= 0.0 {
            output.tab_to(args[0] as usize);
        }
        Ok(Val::Void)
    }

    fn rnd(_args: &[f64], _output: &mut dyn Output) -> Result<Val> {
        Ok(Val::Number(rand::thread_rng().gen::<f64>()))
    }
}
