//! Core structures: expressions, literals, and canonical clauses.

pub mod clause;
pub mod expression;
