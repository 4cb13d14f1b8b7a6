//! Depth-first traversal of the AST
//!
//! [`walk`] calls the visitor with `Some(node)` on entry. If the visitor
//! returns `ControlFlow::Continue`, each child is walked in source order.
//! The visitor then gets `None` as the node's exit marker, whether or not
//! children were visited, so entry and exit calls always nest.

use std::ops::ControlFlow;

use super::{Expr, Node, Stmt};

/// Receives every node of a walk.
pub trait Visitor<'ast> {
    /// Called with `Some(node)` on entry and `None` on exit.
    ///
    /// Returning `Break` on entry skips the node's children. The value
    /// returned for the exit marker is ignored.
    fn visit(&mut self, node: Option<Node<'ast>>) -> ControlFlow<()>;
}

/// Walk `node` and everything below it.
pub fn walk<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: Node<'ast>) {
    if visitor.visit(Some(node)).is_continue() {
        walk_children(visitor, node);
    }
    let _ = visitor.visit(None);
}

fn walk_children<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: Node<'ast>) {
    match node {
        Node::Stmts(stmts) => {
            for stmt in stmts {
                walk(visitor, Node::Stmt(stmt));
            }
        }
        Node::Exprs(exprs) => {
            for expr in exprs {
                walk(visitor, Node::Expr(expr));
            }
        }
        Node::Stmt(stmt) => match stmt {
            Stmt::Cmd(cmd) => {
                walk(visitor, Node::Expr(&cmd.cmd));
                walk_exprs(visitor, &cmd.args);
            }
            Stmt::Begin(begin) => walk_stmts(visitor, &begin.body),
            Stmt::If(if_stmt) => {
                walk(visitor, Node::Expr(&if_stmt.cond));
                walk_stmts(visitor, &if_stmt.body);
                walk_stmts(visitor, &if_stmt.else_body);
            }
            Stmt::Function(function) => {
                walk_exprs(visitor, &function.args);
                walk_stmts(visitor, &function.body);
            }
            Stmt::Pipe(pipe) => {
                walk(visitor, Node::Stmt(&pipe.lhs));
                walk(visitor, Node::Stmt(&pipe.rhs));
            }
            Stmt::Redirect(redirect) => {
                walk(visitor, Node::Stmt(&redirect.lhs));
                walk(visitor, Node::Expr(&redirect.rhs));
            }
        },
        Node::Expr(Expr::Str(word)) => {
            for fragment in word {
                walk(visitor, Node::Fragment(fragment));
            }
        }
        Node::Expr(_) | Node::Fragment(_) => {}
    }
}

// Empty child sequences are not visited at all.

fn walk_stmts<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmts: &'ast [Stmt]) {
    if !stmts.is_empty() {
        walk(visitor, Node::Stmts(stmts));
    }
}

fn walk_exprs<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, exprs: &'ast [Expr]) {
    if !exprs.is_empty() {
        walk(visitor, Node::Exprs(exprs));
    }
}

/// Adapts a closure into a [`Visitor`]. `true` means descend.
pub struct Inspector<F>(pub F);

impl<'ast, F> Visitor<'ast> for Inspector<F>
where
    F: FnMut(Option<Node<'ast>>) -> bool,
{
    fn visit(&mut self, node: Option<Node<'ast>>) -> ControlFlow<()> {
        if (self.0)(node) {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }
}

/// Walk `node`, calling `f` for every entry (`Some`) and exit (`None`).
pub fn inspect<'ast, F>(node: Node<'ast>, f: F)
where
    F: FnMut(Option<Node<'ast>>) -> bool,
{
    walk(&mut Inspector(f), node);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BeginStmt, CmdStmt, IfStmt, PipeStmt};
    use crate::parser::{Ident, Position, VarExpr, Word};
    use pretty_assertions::assert_eq;

    fn ident(name: &str) -> Ident {
        Ident {
            name: name.to_string(),
            pos: Position::new(),
        }
    }

    fn cmd(name: &str, args: &[&str]) -> Stmt {
        Stmt::Cmd(CmdStmt {
            cmd: Expr::Ident(ident(name)),
            args: args.iter().map(|a| Expr::Ident(ident(a))).collect(),
        })
    }

    /// Entry/exit trace as `Kind` and `/` lines.
    fn trace(node: Node<'_>) -> Vec<String> {
        let mut out = Vec::new();
        inspect(node, |n| {
            out.push(n.map_or("/".to_string(), |n| n.kind().to_string()));
            true
        });
        out
    }

    #[test]
    fn test_cmd_order() {
        let stmts = vec![cmd("echo", &["hi"])];
        assert_eq!(trace(Node::Stmts(&stmts)), vec![
            "Stmts", "CmdStmt", "Ident", "/", "Exprs", "Ident", "/", "/", "/", "/"
        ]);
    }

    #[test]
    fn test_empty_args_skipped() {
        let stmt = cmd("ls", &[]);
        assert_eq!(trace(Node::Stmt(&stmt)), vec!["CmdStmt", "Ident", "/", "/"]);
    }

    #[test]
    fn test_if_without_else() {
        let stmt = Stmt::If(IfStmt {
            cond: Expr::Ident(ident("true")),
            body: vec![cmd("a", &[])],
            else_body: vec![],
        });
        assert_eq!(trace(Node::Stmt(&stmt)), vec![
            "IfStmt", "Ident", "/", "Stmts", "CmdStmt", "Ident", "/", "/", "/", "/"
        ]);
    }

    #[test]
    fn test_empty_begin_body_skipped() {
        let stmt = Stmt::Begin(BeginStmt { body: vec![] });
        assert_eq!(trace(Node::Stmt(&stmt)), vec!["BeginStmt", "/"]);
    }

    #[test]
    fn test_str_expr_descends_into_fragments() {
        let mut word = Word::new();
        word.push(ident("a"));
        word.push(VarExpr {
            name: "b".to_string(),
            pos: Position::new(),
        });
        let expr = Expr::Str(word);
        assert_eq!(trace(Node::Expr(&expr)), vec![
            "StrExpr", "Ident", "/", "VarExpr", "/", "/"
        ]);
    }

    #[test]
    fn test_skip_children_still_exits() {
        let stmt = Stmt::Pipe(PipeStmt {
            lhs: Box::new(cmd("a", &["x"])),
            rhs: Box::new(cmd("b", &[])),
        });
        let mut out = Vec::new();
        inspect(Node::Stmt(&stmt), |n| {
            out.push(n.map_or("/", |n| n.kind()));
            !matches!(n, Some(Node::Stmt(Stmt::Cmd(_))))
        });
        assert_eq!(out, vec!["PipeStmt", "CmdStmt", "/", "CmdStmt", "/", "/"]);
    }

    struct Counter {
        depth: usize,
        max_depth: usize,
        idents: usize,
    }

    impl<'ast> Visitor<'ast> for Counter {
        fn visit(&mut self, node: Option<Node<'ast>>) -> ControlFlow<()> {
            match node {
                Some(n) => {
                    self.depth += 1;
                    self.max_depth = self.max_depth.max(self.depth);
                    if let Node::Expr(Expr::Ident(_)) = n {
                        self.idents += 1;
                    }
                }
                None => self.depth -= 1,
            }
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn test_struct_visitor() {
        let stmts = vec![cmd("a", &["b", "c"]), cmd("d", &[])];
        let mut counter = Counter {
            depth: 0,
            max_depth: 0,
            idents: 0,
        };
        walk(&mut counter, Node::Stmts(&stmts));
        assert_eq!(counter.depth, 0);
        assert_eq!(counter.idents, 4);
        // Stmts > CmdStmt > Exprs > Ident
        assert_eq!(counter.max_depth, 4);
    }
}
