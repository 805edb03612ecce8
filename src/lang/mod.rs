/*!
# Language Module

Lexical analysis and parsing of BASIC source lines into statements.

*/

#[macro_use]
mod error;
mod ident;
mod keyword;
mod lex;
mod parse;
mod token;

pub mod ast;

pub use error::Error;
pub use error::ErrorCode;
pub use ident::Ident;
pub use keyword::Context;
pub use lex::Lexer;
pub use parse::{parse, Mode};
pub use token::{Operator, Token};

pub type LineNumber = Option<u16>;
pub type Column = std::ops::Range<usize>;

/// Largest line number a program may use.
pub const MAX_LINE_NUMBER: u16 = 65529;
