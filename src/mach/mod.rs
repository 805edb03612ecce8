/*!
## Machine Module

Stores programs and executes statements. The runtime walks the parsed
statements directly, using a scope stack for FOR loops and GOSUB.

*/

pub type Address = usize;

pub mod disk;
mod device;
mod eval;
mod exec;
mod function;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;
mod var;

pub use device::{Input, LineInput, Output, Printer};
pub use function::{Builtin, Function};
pub use operation::Operation;
pub use program::{Index, Program};
pub use runtime::Runtime;
pub use stack::{Frame, Kind, Stack};
pub use val::Val;
pub use var::Var;

#[cfg(test)]
mod tests;
