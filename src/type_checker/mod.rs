//! Arithmetic type checking.
//!
//! This module walks expression trees bottom-up and gives every node a type
//! tag. A binary node has the type of its left operand; mixing numbers with
//! bools, strings or chars is rejected. Whole programs are checked by
//! visiting every expression their statements contain.

pub mod type_checker;

#[cfg(test)]
mod tests;
