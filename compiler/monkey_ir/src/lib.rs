//! Monkey IR - shared front-end types for the Monkey interpreter.
//!
//! This crate contains the data structures the lexer produces and the
//! runtime consumes:
//! - Spans for source locations
//! - Tokens and token kinds
//! - Syntax tree nodes with their canonical string rendering
//!
//! There is no parser here. Syntax trees are built by whoever owns the
//! parsing step; the runtime only needs to render them (function values
//! print their parameters and body).

pub mod ast;
mod span;
mod token;

pub use ast::{
    BlockStatement, Expression, Identifier, InfixOp, PrefixOp, Program, Statement,
};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind};
