use super::{Operation, Runtime, Val};
use crate::lang::{ast::Expression, Error};

type Result<T> = std::result::Result<T, Error>;

impl Runtime {
    pub fn evaluate(&mut self, expr: &Expression) -> Result<Val> {
        use Expression::*;
        match expr {
            Number(n) => Ok(Val::Number(*n)),
            String(s) => Ok(Val::String(s.clone())),
            Var(ident) => Ok(self.vars.fetch(ident)),
            Function(name, args) => {
                let mut vals = Vec::with_capacity(args.len());
                for arg in args {
                    vals.push(self.evaluate(arg)?);
                }
                self.functions.call(name, vals, &mut *self.output)
            }
            Negation(expr) => Operation::negate(self.evaluate(expr)?),
            Multiply(l, r) => self.binary(l, r, Operation::multiply),
            Divide(l, r) => self.binary(l, r, Operation::divide),
            Add(l, r) => self.binary(l, r, Operation::sum),
            Subtract(l, r) => self.binary(l, r, Operation::subtract),
            Equal(l, r) => self.binary(l, r, Operation::equal),
            NotEqual(l, r) => self.binary(l, r, Operation::not_equal),
            Less(l, r) => self.binary(l, r, Operation::less),
            LessEqual(l, r) => self.binary(l, r, Operation::less_equal),
            Greater(l, r) => self.binary(l, r, Operation::greater),
            GreaterEqual(l, r) => self.binary(l, r, Operation::greater_equal),
        }
    }

    fn binary(
        &mut self,
        lhs: &Expression,
        rhs: &Expression,
        op: fn(Val, Val) -> Result<Val>,
    ) -> Result<Val> {
        let lhs = self.evaluate(lhs)?;
        let rhs = self.evaluate(rhs)?;
        op(lhs, rhs)
    }
}
