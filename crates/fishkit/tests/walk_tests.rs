//! AST walker integration tests
//!
//! Trees are assembled from real lexer output the way a grammar would, then
//! traversed through both the `Visitor` trait and `inspect`.

use std::ops::ControlFlow;

use fishkit::ast::{
    BeginStmt, CmdStmt, Expr, FunctionStmt, IfStmt, Inspector, Node, PipeStmt, RedirectOp,
    RedirectStmt, Stmt, Visitor, inspect, walk,
};
use fishkit::parser::{Fragment, Token, Word};
use fishkit::tokenize;
use pretty_assertions::assert_eq;

/// Lex `input` as a single word.
fn word(input: &str) -> Word {
    match tokenize(input).unwrap().into_iter().next() {
        Some(Token::Str(word)) | Some(Token::RedirectToFd(word)) => word,
        other => panic!("expected a word for {input:?}, got {other:?}"),
    }
}

fn expr(input: &str) -> Expr {
    Expr::Str(word(input))
}

fn cmd(line: &str) -> Stmt {
    let mut exprs = line.split(' ').map(expr);
    Stmt::Cmd(CmdStmt {
        cmd: exprs.next().unwrap(),
        args: exprs.collect(),
    })
}

/// `function greet $who; echo "hi $who" | tr a-z A-Z > out; end`
/// followed by `if test; begin; end; else; ls >&2; end`
fn sample_script() -> Vec<Stmt> {
    vec![
        Stmt::Function(FunctionStmt {
            args: vec![expr("greet"), expr("$who")],
            body: vec![Stmt::Redirect(RedirectStmt {
                op: RedirectOp::Out,
                lhs: Box::new(Stmt::Pipe(PipeStmt {
                    lhs: Box::new(cmd("echo \"hi$who\"")),
                    rhs: Box::new(cmd("tr a-z A-Z")),
                })),
                rhs: expr("out"),
            })],
        }),
        Stmt::If(IfStmt {
            cond: expr("test"),
            body: vec![Stmt::Begin(BeginStmt { body: vec![] })],
            else_body: vec![Stmt::Redirect(RedirectStmt {
                op: RedirectOp::Out,
                lhs: Box::new(cmd("ls")),
                rhs: expr(">&2"),
            })],
        }),
    ]
}

/// Records an indented outline of the walk and checks nesting as it goes.
#[derive(Default)]
struct Outline {
    depth: usize,
    lines: Vec<String>,
}

impl<'ast> Visitor<'ast> for Outline {
    fn visit(&mut self, node: Option<Node<'ast>>) -> ControlFlow<()> {
        let Some(node) = node else {
            self.depth = self.depth.checked_sub(1).expect("exit without entry");
            return ControlFlow::Continue(());
        };
        let label = match node {
            Node::Fragment(Fragment::Ident(i)) => format!("Ident {}", i.name),
            Node::Fragment(Fragment::Var(v)) => format!("VarExpr {}", v.name),
            other => other.kind().to_string(),
        };
        self.lines.push(format!("{}{}", "  ".repeat(self.depth), label));
        self.depth += 1;
        ControlFlow::Continue(())
    }
}

#[test]
fn test_full_outline() {
    let script = sample_script();
    let mut outline = Outline::default();
    walk(&mut outline, Node::Stmts(&script));
    assert_eq!(outline.depth, 0);
    assert_eq!(outline.lines, vec![
        "Stmts",
        "  FunctionStmt",
        "    Exprs",
        "      StrExpr",
        "        Ident greet",
        "      StrExpr",
        "        VarExpr who",
        "    Stmts",
        "      RedirectStmt",
        "        PipeStmt",
        "          CmdStmt",
        "            StrExpr",
        "              Ident echo",
        "            Exprs",
        "              StrExpr",
        "                Ident hi",
        "                VarExpr who",
        "          CmdStmt",
        "            StrExpr",
        "              Ident tr",
        "            Exprs",
        "              StrExpr",
        "                Ident a-z",
        "              StrExpr",
        "                Ident A-Z",
        "        StrExpr",
        "          Ident out",
        "  IfStmt",
        "    StrExpr",
        "      Ident test",
        "    Stmts",
        "      BeginStmt",
        "    Stmts",
        "      RedirectStmt",
        "        CmdStmt",
        "          StrExpr",
        "            Ident ls",
        "        StrExpr",
        "          FD",
    ]);
}

#[test]
fn test_entries_match_exits() {
    let script = sample_script();
    let (mut entries, mut exits) = (0, 0);
    inspect(Node::Stmts(&script), |node| {
        match node {
            Some(_) => entries += 1,
            None => exits += 1,
        }
        true
    });
    assert_eq!(entries, 39);
    assert_eq!(entries, exits);
}

#[test]
fn test_skip_function_bodies() {
    let script = sample_script();
    let mut kinds = Vec::new();
    inspect(Node::Stmts(&script), |node| {
        let Some(node) = node else { return true };
        kinds.push(node.kind());
        !matches!(node, Node::Stmt(Stmt::Function(_)) | Node::Expr(Expr::Str(_)))
    });
    assert_eq!(kinds, vec![
        "Stmts",
        "FunctionStmt",
        "IfStmt",
        "StrExpr",
        "Stmts",
        "BeginStmt",
        "Stmts",
        "RedirectStmt",
        "CmdStmt",
        "StrExpr",
        "StrExpr",
    ]);
}

#[test]
fn test_collect_variable_references() {
    let script = sample_script();
    let mut vars = Vec::new();
    inspect(Node::Stmts(&script), |node| {
        if let Some(Node::Fragment(Fragment::Var(v))) = node {
            vars.push(v.name.as_str());
        }
        true
    });
    assert_eq!(vars, vec!["who", "who"]);
}

#[test]
fn test_walk_through_dyn_visitor() {
    let script = sample_script();
    let mut count = 0;
    let mut inspector = Inspector(|node: Option<Node<'_>>| {
        count += usize::from(node.is_some());
        true
    });
    let visitor: &mut dyn Visitor<'_> = &mut inspector;
    walk(visitor, Node::Stmt(&script[1]));
    // IfStmt, cond, its fragment, two Stmts, Begin, Redirect, Cmd, two StrExprs, two leaves
    assert_eq!(count, 12);
}

#[test]
fn test_empty_root_sequence_still_visited() {
    let mut calls = Vec::new();
    inspect(Node::Stmts(&[]), |node| {
        calls.push(node.map(|n| n.kind()));
        true
    });
    assert_eq!(calls, vec![Some("Stmts"), None]);
}

#[test]
fn test_ast_serializes() {
    let stmt = Stmt::Redirect(RedirectStmt {
        op: RedirectOp::Append,
        lhs: Box::new(cmd("ls")),
        rhs: expr("log"),
    });
    let json = serde_json::to_value(&stmt).unwrap();
    assert_eq!(json["Redirect"]["op"], "Append");
    assert_eq!(
        json["Redirect"]["lhs"]["Cmd"]["cmd"]["Str"]["fragments"][0]["Ident"]["name"],
        "ls"
    );
}
