//! # Line BASIC
//!
//! An interpreter for line-numbered BASIC. Numbered lines are stored as a
//! program; anything else typed at the prompt runs immediately.
//!
//! ```text
//! 10 FOR I = 1 TO 3
//! 20 PRINT I
//! 30 NEXT I
//! RUN
//! ```
//!
//! The [`lang`] module turns source lines into statements, [`mach`] stores
//! and executes them, and [`term`] connects a runtime to a terminal.

pub mod lang;
pub mod mach;
pub mod term;
