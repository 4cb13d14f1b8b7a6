//! Composite words and the fragments they are built from
//!
//! A word such as `foo$bar"baz"` is kept as the ordered list of pieces the
//! lexer saw: literal runs, variable references and (for redirect targets)
//! file-descriptor literals.

use std::collections::HashMap;

use serde::Serialize;

use super::span::Position;

/// A maximal run of non-special characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ident {
    pub name: String,
    pub pos: Position,
}

/// A `$name` variable reference. `pos` points at the `$`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarExpr {
    pub name: String,
    pub pos: Position,
}

/// Target of a `>&` / `^&` redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FdTarget {
    /// `&N`
    Num(u32),
    /// `&-`: close the descriptor
    Close,
}

/// A file-descriptor literal. `pos` points at the `&`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fd {
    pub target: FdTarget,
    pub pos: Position,
}

/// One piece of a composite word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Fragment {
    Ident(Ident),
    Var(VarExpr),
    Fd(Fd),
}

impl Fragment {
    /// Where this fragment started in the input.
    pub fn pos(&self) -> Position {
        match self {
            Fragment::Ident(i) => i.pos,
            Fragment::Var(v) => v.pos,
            Fragment::Fd(fd) => fd.pos,
        }
    }

    pub fn as_ident(&self) -> Option<&Ident> {
        match self {
            Fragment::Ident(i) => Some(i),
            _ => None,
        }
    }
}

impl From<Ident> for Fragment {
    fn from(ident: Ident) -> Self {
        Fragment::Ident(ident)
    }
}

impl From<VarExpr> for Fragment {
    fn from(var: VarExpr) -> Self {
        Fragment::Var(var)
    }
}

impl From<Fd> for Fragment {
    fn from(fd: Fd) -> Self {
        Fragment::Fd(fd)
    }
}

/// A composite word: fragments concatenated left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Word {
    pub fragments: Vec<Fragment>,
}

impl Word {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: impl Into<Fragment>) {
        self.fragments.push(fragment.into());
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }

    /// The concatenated text, if every fragment is a literal.
    ///
    /// Returns `None` as soon as a variable reference or FD is present, so an
    /// expansion can never masquerade as a keyword.
    pub fn literal_text(&self) -> Option<String> {
        let mut text = String::new();
        for fragment in &self.fragments {
            text.push_str(&fragment.as_ident()?.name);
        }
        Some(text)
    }

    /// Render the word's value with variables looked up in `env`.
    ///
    /// Unset variables expand to the empty string.
    pub fn render(&self, env: &HashMap<String, String>) -> String {
        let mut out = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Ident(i) => out.push_str(&i.name),
                Fragment::Var(v) => {
                    if let Some(value) = env.get(&v.name) {
                        out.push_str(value);
                    }
                }
                Fragment::Fd(fd) => match fd.target {
                    FdTarget::Num(n) => out.push_str(&n.to_string()),
                    FdTarget::Close => out.push('-'),
                },
            }
        }
        out
    }
}

impl Extend<Fragment> for Word {
    fn extend<T: IntoIterator<Item = Fragment>>(&mut self, iter: T) {
        self.fragments.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}
