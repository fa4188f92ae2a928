use std::collections::HashMap;

use super::rational::Rational;

/// Literal values collected while parsing, handed to code generation.
///
/// Each distinct number and string is stored once; adding a value that is
/// already present returns the index it was first given.
#[derive(Debug, Clone, Default)]
pub struct ConstantPool {
    numbers: Vec<Rational>,
    number_lookup: HashMap<Rational, usize>,
    strings: Vec<String>,
    string_lookup: HashMap<String, usize>,
}

impl ConstantPool {
    pub fn new() -> Self {
        ConstantPool::default()
    }

    pub fn add_number(&mut self, value: &Rational) -> usize {
        if let Some(index) = self.number_lookup.get(value) {
            return *index;
        }

        self.numbers.push(value.clone());
        self.number_lookup.insert(value.clone(), self.numbers.len() - 1);
        self.numbers.len() - 1
    }

    pub fn add_string(&mut self, value: &str) -> usize {
        if let Some(index) = self.string_lookup.get(value) {
            return *index;
        }

        self.strings.push(String::from(value));
        self.string_lookup
            .insert(String::from(value), self.strings.len() - 1);
        self.strings.len() - 1
    }

    pub fn numbers(&self) -> &[Rational] {
        &self.numbers
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    pub fn number_index(&self, value: &Rational) -> Option<usize> {
        self.number_lookup.get(value).copied()
    }

    pub fn string_index(&self, value: &str) -> Option<usize> {
        self.string_lookup.get(value).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty() && self.strings.is_empty()
    }
}
