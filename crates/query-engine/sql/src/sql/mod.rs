//! SQL AST, its conversion to parameterized SQL strings, and helpers for building it.

pub mod ast;
pub mod convert;
pub mod execution_plan;
pub mod helpers;
pub mod string;
