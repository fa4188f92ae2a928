use std::{fmt::Display, rc::Rc};

use crate::{
    ast::{
        ast::{Stmt, StmtType, StmtWrapper},
        expressions::{BoolExpr, ClosureBody, ExprNode, FactorNode, TermNode},
        statements::{
            AssignmentStmt, BlockStmt, CallStmt, FieldAssignStmt, FnDeclStmt, ForStmt, IfStmt,
            IndexAssignStmt, MethodCallStmt, ReturnStmt, TimerStmt, VarDeclKind, VarDeclStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// The type of an expression node as far as it can be known from its
/// leaves alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Number,
    Bool,
    String,
    Char,
    /// Variables, calls and increments. Their type is not inferred here.
    Unresolved,
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeTag::Number => write!(f, "number"),
            TypeTag::Bool => write!(f, "bool"),
            TypeTag::String => write!(f, "string"),
            TypeTag::Char => write!(f, "char"),
            TypeTag::Unresolved => write!(f, "unresolved"),
        }
    }
}

/// Numbers do not combine with bools, strings or chars, in either order.
/// Operators are not overloaded.
fn conflicts(left: TypeTag, right: TypeTag) -> bool {
    matches!(
        (left, right),
        (TypeTag::Number, TypeTag::Bool | TypeTag::String | TypeTag::Char)
            | (TypeTag::Bool | TypeTag::String | TypeTag::Char, TypeTag::Number)
    )
}

#[derive(Debug)]
pub struct TypeChecker {
    file: Rc<String>,
}

impl TypeChecker {
    pub fn new(file: Rc<String>) -> Self {
        TypeChecker { file }
    }

    fn conflict(&self, left: TypeTag, right: TypeTag, line: u32, column: u32) -> Error {
        Error::new(
            ErrorImpl::TypeConflict { left, right },
            Position::new(line, column, Rc::clone(&self.file)),
        )
    }

    /// An expression takes the type of its left-most term.
    pub fn check_type(&self, expression: &ExprNode) -> Result<TypeTag, Error> {
        self.check_term_chain(expression).map(|(first, _)| first)
    }

    /// A term takes the type of its left-most factor.
    pub fn check_term(&self, term: &TermNode) -> Result<TypeTag, Error> {
        self.check_factor_chain(term).map(|(first, _)| first)
    }

    /// Checks each pair of neighbouring terms and returns the types of the
    /// first and last term of the chain.
    fn check_term_chain(&self, expression: &ExprNode) -> Result<(TypeTag, TypeTag), Error> {
        match expression {
            ExprNode::Term(term) => {
                let ty = self.check_term(term)?;
                Ok((ty, ty))
            }
            ExprNode::Binary {
                left,
                right,
                line,
                column,
                ..
            } => {
                let (first, last) = self.check_term_chain(left)?;
                let right = self.check_term(right)?;

                if conflicts(last, right) {
                    return Err(self.conflict(last, right, *line, *column));
                }

                Ok((first, right))
            }
        }
    }

    fn check_factor_chain(&self, term: &TermNode) -> Result<(TypeTag, TypeTag), Error> {
        match term {
            TermNode::Factor(factor) => {
                let ty = self.check_factor(factor)?;
                Ok((ty, ty))
            }
            TermNode::Binary {
                left,
                right,
                line,
                column,
                ..
            } => {
                let (first, last) = self.check_factor_chain(left)?;
                let right = self.check_factor(right)?;

                if conflicts(last, right) {
                    return Err(self.conflict(last, right, *line, *column));
                }

                Ok((first, right))
            }
        }
    }

    pub fn check_factor(&self, factor: &FactorNode) -> Result<TypeTag, Error> {
        match factor {
            FactorNode::Number { .. } => Ok(TypeTag::Number),
            FactorNode::Bool { .. } => Ok(TypeTag::Bool),
            FactorNode::String { .. } => Ok(TypeTag::String),
            FactorNode::Char { .. } => Ok(TypeTag::Char),
            FactorNode::Paren { expression, .. } => self.check_type(expression),
            FactorNode::Call(call) => {
                self.check_expressions(&call.arguments)?;
                Ok(TypeTag::Unresolved)
            }
            FactorNode::Closure(closure) => {
                match &closure.body {
                    ClosureBody::Expression(body) => {
                        self.check_type(body)?;
                    }
                    ClosureBody::Block(body) => self.check_block(body)?,
                }
                Ok(TypeTag::Unresolved)
            }
            FactorNode::Table { entries, .. } => {
                for entry in entries {
                    self.check_type(&entry.value)?;
                }
                Ok(TypeTag::Unresolved)
            }
            FactorNode::FieldAccess { object, .. } => {
                self.check_factor(object)?;
                Ok(TypeTag::Unresolved)
            }
            FactorNode::IndexAccess { object, index, .. } => {
                self.check_factor(object)?;
                self.check_type(index)?;
                Ok(TypeTag::Unresolved)
            }
            FactorNode::MethodCall {
                callee, arguments, ..
            } => {
                self.check_factor(callee)?;
                self.check_expressions(arguments)?;
                Ok(TypeTag::Unresolved)
            }
            FactorNode::Variable { .. }
            | FactorNode::PreIncrement { .. }
            | FactorNode::PostIncrement { .. }
            | FactorNode::PreDecrement { .. }
            | FactorNode::PostDecrement { .. } => Ok(TypeTag::Unresolved),
        }
    }

    fn check_expressions(&self, expressions: &[ExprNode]) -> Result<(), Error> {
        for expression in expressions {
            self.check_type(expression)?;
        }
        Ok(())
    }

    pub fn check_bool(&self, condition: &BoolExpr) -> Result<(), Error> {
        match condition {
            BoolExpr::Comparison { left, right, .. } => {
                self.check_type(left)?;
                self.check_type(right)?;
                Ok(())
            }
            BoolExpr::Grouped(inner) => self.check_bool(inner),
            BoolExpr::Logical { left, right, .. } => {
                self.check_bool(left)?;
                self.check_bool(right)
            }
        }
    }

    pub fn check_block(&self, block: &BlockStmt) -> Result<(), Error> {
        for stmt in block.iter() {
            self.check_stmt(stmt)?;
        }
        Ok(())
    }

    pub fn check_stmt(&self, stmt: &StmtWrapper) -> Result<(), Error> {
        match stmt.get_stmt_type() {
            StmtType::BlockStmt => visit(stmt, |block: &BlockStmt| self.check_block(block)),
            StmtType::FnDeclStmt => visit(stmt, |func: &FnDeclStmt| self.check_block(&func.body)),
            StmtType::VarDeclStmt => visit(stmt, |decl: &VarDeclStmt| match &decl.kind {
                VarDeclKind::Assigned(assignment) => self.check_expressions(&assignment.values),
                VarDeclKind::Typed { .. } => Ok(()),
            }),
            StmtType::AssignmentStmt => visit(stmt, |assignment: &AssignmentStmt| {
                self.check_expressions(&assignment.values)
            }),
            StmtType::CallStmt => visit(stmt, |call: &CallStmt| {
                self.check_expressions(&call.call.arguments)
            }),
            StmtType::FieldAssignStmt => visit(stmt, |assign: &FieldAssignStmt| {
                self.check_factor(&assign.object)?;
                self.check_type(&assign.value).map(|_| ())
            }),
            StmtType::IndexAssignStmt => visit(stmt, |assign: &IndexAssignStmt| {
                self.check_factor(&assign.object)?;
                self.check_type(&assign.index)?;
                self.check_type(&assign.value).map(|_| ())
            }),
            StmtType::MethodCallStmt => visit(stmt, |call: &MethodCallStmt| {
                self.check_factor(&call.callee)?;
                self.check_expressions(&call.arguments)
            }),
            StmtType::IfStmt => visit(stmt, |if_stmt: &IfStmt| self.check_if(if_stmt)),
            StmtType::ForStmt => visit(stmt, |for_stmt: &ForStmt| self.check_for(for_stmt)),
            StmtType::ReturnStmt => {
                visit(stmt, |ret: &ReturnStmt| self.check_expressions(&ret.values))
            }
            StmtType::TimerStmt => visit(stmt, |timer: &TimerStmt| self.check_block(&timer.body)),
            StmtType::IncDecStmt | StmtType::BreakStmt | StmtType::ContinueStmt => Ok(()),
        }
    }

    fn check_if(&self, if_stmt: &IfStmt) -> Result<(), Error> {
        self.check_bool(&if_stmt.condition)?;
        self.check_block(&if_stmt.body)?;
        for branch in &if_stmt.else_ifs {
            self.check_bool(&branch.condition)?;
            self.check_block(&branch.body)?;
        }
        match &if_stmt.else_body {
            Some(else_body) => self.check_block(else_body),
            None => Ok(()),
        }
    }

    fn check_for(&self, for_stmt: &ForStmt) -> Result<(), Error> {
        if let Some(init) = &for_stmt.init {
            self.check_stmt(init)?;
        }
        if let Some(condition) = &for_stmt.condition {
            self.check_bool(condition)?;
        }
        if let Some(step) = &for_stmt.step {
            self.check_stmt(step)?;
        }
        self.check_block(&for_stmt.body)
    }
}

/// Runs `check` on the concrete statement behind `stmt`. A wrapper whose
/// type tag does not match its contents is skipped.
fn visit<T, F>(stmt: &StmtWrapper, check: F) -> Result<(), Error>
where
    T: Stmt + 'static,
    F: FnOnce(&T) -> Result<(), Error>,
{
    stmt.downcast::<T>().map_or(Ok(()), check)
}

/// Checks one arithmetic expression and returns its type.
pub fn check_type(expression: &ExprNode, file: Rc<String>) -> Result<TypeTag, Error> {
    TypeChecker::new(file).check_type(expression)
}

/// Checks every expression in a parsed program, stopping at the first
/// conflict.
pub fn type_check(ast: &BlockStmt) -> Result<(), Error> {
    TypeChecker::new(Rc::clone(&ast.span.start.file)).check_block(ast)
}
