use super::{
    rational::{Rational, RationalError},
    statements::BlockStmt,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOp {
    Add,
    Sub,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulOp {
    Mul,
    Div,
    Pow,
    Mod,
    /// `~`, a random value in the range between its operands.
    Rand,
}

/// Additive level: `Term (('+' | '-') Term)*`.
///
/// `1 - 2 + 3` is stored left-nested as `Binary(Binary(1 - 2) + 3)`.
/// `line` and `column` locate the operator.
#[derive(Debug, Clone)]
pub enum ExprNode {
    Term(TermNode),
    Binary {
        op: AddOp,
        left: Box<ExprNode>,
        right: TermNode,
        line: u32,
        column: u32,
    },
}

/// Multiplicative level: `Factor (('*' | '/' | '^' | '%' | '~') Factor)*`.
#[derive(Debug, Clone)]
pub enum TermNode {
    Factor(FactorNode),
    Binary {
        op: MulOp,
        left: Box<TermNode>,
        right: FactorNode,
        line: u32,
        column: u32,
    },
}

#[derive(Debug, Clone)]
pub enum FactorNode {
    Number { value: Rational, line: u32 },
    Bool { value: bool, line: u32 },
    String { value: String, line: u32 },
    Char { value: String, line: u32 },
    Variable { name: String, line: u32 },
    /// `++name`
    PreIncrement { name: String, line: u32 },
    /// `name++`
    PostIncrement { name: String, line: u32 },
    PreDecrement { name: String, line: u32 },
    PostDecrement { name: String, line: u32 },
    Paren { expression: Box<ExprNode>, line: u32 },
    Call(CallExpr),
    Closure(ClosureExpr),
    /// `{ key: value, ... }`
    Table { entries: Vec<TableEntry>, line: u32 },
    /// `object.field`
    FieldAccess {
        object: Box<FactorNode>,
        field: String,
        line: u32,
    },
    /// `object[index]`
    IndexAccess {
        object: Box<FactorNode>,
        index: Box<ExprNode>,
        line: u32,
    },
    /// A call through a field, an index or another such call:
    /// `t.f(1)`, `t["f"](1)`, `t.f(1)(2)`.
    MethodCall {
        callee: Box<FactorNode>,
        arguments: Vec<ExprNode>,
        line: u32,
    },
}

#[derive(Debug, Clone)]
pub struct CallExpr {
    pub name: String,
    pub arguments: Vec<ExprNode>,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct ClosureParam {
    pub name: String,
    pub type_name: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ClosureBody {
    Expression(Box<ExprNode>),
    Block(BlockStmt),
}

/// `|a, b -> number| => a + b`, `|| => { ... }`
#[derive(Debug, Clone)]
pub struct ClosureExpr {
    pub parameters: Vec<ClosureParam>,
    pub body: ClosureBody,
    pub line: u32,
}

#[derive(Debug, Clone)]
pub struct TableEntry {
    pub key: String,
    pub value: ExprNode,
}

impl ExprNode {
    pub fn line(&self) -> u32 {
        match self {
            ExprNode::Term(term) => term.line(),
            ExprNode::Binary { line, .. } => *line,
        }
    }

    /// Folds an expression made only of number literals, parentheses and
    /// `+ - * /`.
    ///
    /// Returns `Ok(None)` when the value is not known before run time: a
    /// leaf that is not a number, or a `^` or `~` operator.
    pub fn evaluate(&self) -> Result<Option<Rational>, RationalError> {
        match self {
            ExprNode::Term(term) => term.evaluate(),
            ExprNode::Binary {
                op, left, right, ..
            } => {
                let (Some(left), Some(right)) = (left.evaluate()?, right.evaluate()?) else {
                    return Ok(None);
                };

                Ok(Some(match op {
                    AddOp::Add => left + right,
                    AddOp::Sub => left - right,
                }))
            }
        }
    }
}

impl TermNode {
    pub fn line(&self) -> u32 {
        match self {
            TermNode::Factor(factor) => factor.line(),
            TermNode::Binary { line, .. } => *line,
        }
    }

    pub fn evaluate(&self) -> Result<Option<Rational>, RationalError> {
        match self {
            TermNode::Factor(factor) => factor.evaluate(),
            TermNode::Binary {
                op, left, right, ..
            } => {
                let (Some(left), Some(right)) = (left.evaluate()?, right.evaluate()?) else {
                    return Ok(None);
                };

                match op {
                    MulOp::Mul => Ok(Some(left * right)),
                    MulOp::Div => left.checked_div(&right).map(Some),
                    MulOp::Mod => left.checked_rem(&right).map(Some),
                    MulOp::Pow | MulOp::Rand => Ok(None),
                }
            }
        }
    }
}

impl FactorNode {
    pub fn line(&self) -> u32 {
        match self {
            FactorNode::Number { line, .. }
            | FactorNode::Bool { line, .. }
            | FactorNode::String { line, .. }
            | FactorNode::Char { line, .. }
            | FactorNode::Variable { line, .. }
            | FactorNode::PreIncrement { line, .. }
            | FactorNode::PostIncrement { line, .. }
            | FactorNode::PreDecrement { line, .. }
            | FactorNode::PostDecrement { line, .. }
            | FactorNode::Paren { line, .. }
            | FactorNode::Table { line, .. }
            | FactorNode::FieldAccess { line, .. }
            | FactorNode::IndexAccess { line, .. }
            | FactorNode::MethodCall { line, .. } => *line,
            FactorNode::Call(call) => call.line,
            FactorNode::Closure(closure) => closure.line,
        }
    }

    pub fn evaluate(&self) -> Result<Option<Rational>, RationalError> {
        match self {
            FactorNode::Number { value, .. } => Ok(Some(value.clone())),
            FactorNode::Paren { expression, .. } => expression.evaluate(),
            _ => Ok(None),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Greater,
    Less,
    GreaterEquals,
    LessEquals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

/// Conditions of `if` and `for`. `&&` and `||` share one precedence level
/// and associate to the left.
#[derive(Debug, Clone)]
pub enum BoolExpr {
    Comparison {
        left: ExprNode,
        op: CompareOp,
        right: ExprNode,
        line: u32,
    },
    Grouped(Box<BoolExpr>),
    Logical {
        left: Box<BoolExpr>,
        op: LogicalOp,
        right: Box<BoolExpr>,
        line: u32,
    },
}
