use std::{any::Any, slice::Iter};

use crate::Span;

use super::{
    ast::{Stmt, StmtType, StmtWrapper},
    expressions::{BoolExpr, CallExpr, ExprNode, FactorNode},
};

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<StmtWrapper>,
    pub id: i32,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.body.iter()
    }
}

impl Stmt for BlockStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BlockStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `var name -> type` inside a function's parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
}

#[derive(Debug, Clone)]
pub struct FnDeclStmt {
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub return_types: Vec<String>,
    pub body: BlockStmt,
    pub span: Span,
}

impl Stmt for FnDeclStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::FnDeclStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
}

/// `a, b = 1, 2` or `a += 1`. Compound operators take a single target.
#[derive(Debug, Clone)]
pub struct AssignmentStmt {
    pub targets: Vec<String>,
    pub operator: AssignOp,
    pub values: Vec<ExprNode>,
    pub span: Span,
}

impl Stmt for AssignmentStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::AssignmentStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub enum VarDeclKind {
    /// `var name -> type`
    Typed { identifier: String, type_name: String },
    /// `var a, b = 1, 2`
    Assigned(AssignmentStmt),
}

#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub kind: VarDeclKind,
    pub span: Span,
}

impl VarDeclStmt {
    pub fn identifiers(&self) -> Vec<&str> {
        match &self.kind {
            VarDeclKind::Typed { identifier, .. } => vec![identifier.as_str()],
            VarDeclKind::Assigned(assignment) => {
                assignment.targets.iter().map(|t| t.as_str()).collect()
            }
        }
    }
}

impl Stmt for VarDeclStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::VarDeclStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub struct CallStmt {
    pub call: CallExpr,
    pub span: Span,
}

impl Stmt for CallStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::CallStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `object.field = value`
#[derive(Debug, Clone)]
pub struct FieldAssignStmt {
    pub object: FactorNode,
    pub field: String,
    pub value: ExprNode,
    pub span: Span,
}

impl Stmt for FieldAssignStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::FieldAssignStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `object[index] = value`
#[derive(Debug, Clone)]
pub struct IndexAssignStmt {
    pub object: FactorNode,
    pub index: ExprNode,
    pub value: ExprNode,
    pub span: Span,
}

impl Stmt for IndexAssignStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::IndexAssignStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// A method call whose result is discarded, such as `list.push(1)`.
#[derive(Debug, Clone)]
pub struct MethodCallStmt {
    pub callee: FactorNode,
    pub arguments: Vec<ExprNode>,
    pub span: Span,
}

impl Stmt for MethodCallStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::MethodCallStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `name++` or `name--` used as a statement.
#[derive(Debug, Clone)]
pub struct IncDecStmt {
    pub identifier: String,
    pub is_increment: bool,
    pub span: Span,
}

impl Stmt for IncDecStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::IncDecStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub struct ElseIfBranch {
    pub condition: BoolExpr,
    pub body: BlockStmt,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: BoolExpr,
    pub body: BlockStmt,
    pub else_ifs: Vec<ElseIfBranch>,
    pub else_body: Option<BlockStmt>,
    pub span: Span,
}

impl Stmt for IfStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::IfStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `for (init; condition; step) { ... }`. Every clause may be empty.
#[derive(Debug, Clone)]
pub struct ForStmt {
    pub init: Option<StmtWrapper>,
    pub condition: Option<BoolExpr>,
    pub step: Option<StmtWrapper>,
    pub body: BlockStmt,
    pub span: Span,
}

impl ForStmt {
    pub fn is_infinite(&self) -> bool {
        self.condition.is_none()
    }
}

impl Stmt for ForStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ForStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub values: Vec<ExprNode>,
    pub span: Span,
}

impl Stmt for ReturnStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ReturnStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub struct BreakStmt {
    pub span: Span,
}

impl Stmt for BreakStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BreakStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone)]
pub struct ContinueStmt {
    pub span: Span,
}

impl Stmt for ContinueStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ContinueStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// `timer { ... }` measures how long its body takes to run.
#[derive(Debug, Clone)]
pub struct TimerStmt {
    pub body: BlockStmt,
    pub span: Span,
}

impl Stmt for TimerStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::TimerStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}
