//! AST types for parsed fish-like scripts
//!
//! The grammar (outside this crate) builds these from the lexer's tokens.
//! Every node owns its children; a finished tree is only ever read, most
//! often through [`walk`].

mod walk;

pub use walk::{Inspector, Visitor, inspect, walk};

use serde::Serialize;

use crate::parser::{Fd, Fragment, Ident, VarExpr, Word};

/// An expression: a single fragment or a whole composite word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expr {
    Ident(Ident),
    Var(VarExpr),
    Fd(Fd),
    Str(Word),
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Stmt {
    Cmd(CmdStmt),
    Begin(BeginStmt),
    If(IfStmt),
    Function(FunctionStmt),
    Pipe(PipeStmt),
    Redirect(RedirectStmt),
}

/// `cmd arg...`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdStmt {
    pub cmd: Expr,
    pub args: Vec<Expr>,
}

/// `begin ... end`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeginStmt {
    pub body: Vec<Stmt>,
}

/// `if cond ... else ... end`. `else_body` is empty when there is no `else`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IfStmt {
    pub cond: Expr,
    pub body: Vec<Stmt>,
    pub else_body: Vec<Stmt>,
}

/// `function name args... ... end`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionStmt {
    pub args: Vec<Expr>,
    pub body: Vec<Stmt>,
}

/// `lhs | rhs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipeStmt {
    pub lhs: Box<Stmt>,
    pub rhs: Box<Stmt>,
}

/// Which redirect operator produced a [`RedirectStmt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RedirectOp {
    /// `<`
    In,
    /// `>` / `>&`
    Out,
    /// `>>`
    Append,
    /// `^` / `^&`
    Err,
    /// `^^`
    ErrAppend,
}

/// `lhs > rhs` and friends. `rhs` is the target word or FD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectStmt {
    pub op: RedirectOp,
    pub lhs: Box<Stmt>,
    pub rhs: Expr,
}

/// A borrowed view of any node the walker can visit.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Stmts(&'a [Stmt]),
    Exprs(&'a [Expr]),
    Stmt(&'a Stmt),
    Expr(&'a Expr),
    Fragment(&'a Fragment),
}

impl Node<'_> {
    /// Short name of the node's variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Stmts(_) => "Stmts",
            Node::Exprs(_) => "Exprs",
            Node::Stmt(stmt) => match stmt {
                Stmt::Cmd(_) => "CmdStmt",
                Stmt::Begin(_) => "BeginStmt",
                Stmt::If(_) => "IfStmt",
                Stmt::Function(_) => "FunctionStmt",
                Stmt::Pipe(_) => "PipeStmt",
                Stmt::Redirect(_) => "RedirectStmt",
            },
            Node::Expr(expr) => match expr {
                Expr::Ident(_) => "Ident",
                Expr::Var(_) => "VarExpr",
                Expr::Fd(_) => "FD",
                Expr::Str(_) => "StrExpr",
            },
            Node::Fragment(fragment) => match fragment {
                Fragment::Ident(_) => "Ident",
                Fragment::Var(_) => "VarExpr",
                Fragment::Fd(_) => "FD",
            },
        }
    }
}

impl<'a> From<&'a [Stmt]> for Node<'a> {
    fn from(stmts: &'a [Stmt]) -> Self {
        Node::Stmts(stmts)
    }
}

impl<'a> From<&'a Stmt> for Node<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        Node::Stmt(stmt)
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        Node::Expr(expr)
    }
}

impl From<Word> for Expr {
    fn from(word: Word) -> Self {
        Expr::Str(word)
    }
}
