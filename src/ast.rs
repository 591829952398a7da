use std::fmt;

/// A prefix sign operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `+e`, the identity.
    Plus,
    /// `-e`, arithmetic negation.
    Minus,
}

impl UnaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }

    /// Returns the marker used for the operator in postfix output and in the
    /// S-expression rendering of a tree.
    ///
    /// The markers differ from the binary operator symbols so that a postfix
    /// sequence stays unambiguous.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Plus => "pos",
            Self::Minus => "neg",
        }
    }
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition `+`.
    Add,
    /// Subtraction `-`.
    Sub,
    /// Multiplication `*`.
    Mul,
    /// Truncating integer division `/`.
    Div,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The set of variants is closed: every consumer matches on all three, so a
/// new variant cannot be silently ignored by an evaluator. Parentheses do not
/// appear in the tree; they only shape it.
///
/// A chain like `1 + 1 + ... + 1` folds into a tree as deep as the chain is
/// long, so the walks over a tree ([`Expr::post_order`], `Display`,
/// `PartialEq`, `Drop`) keep their work on the heap. The derived `Clone` and
/// `Debug` still recurse once per level.
#[derive(Debug, Clone)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal value.
        value: i64,
    },
    /// A prefix sign applied to an operand.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a [`Expr::Number`] leaf.
    #[must_use]
    pub const fn number(value: i64) -> Self {
        Self::Number { value }
    }

    /// Builds a [`Expr::UnaryOp`] node.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr) }
    }

    /// Builds a [`Expr::BinaryOp`] node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Returns an iterator over the nodes of the tree in post-order: the
    /// operand of a unary node, then the left and right operands of a binary
    /// node, always come before the node itself.
    ///
    /// # Example
    /// ```
    /// use quotient::{ast::Expr, interpreter::parser::parse};
    ///
    /// let tree = parse("1 - 2").unwrap();
    /// let leaves = tree.post_order()
    ///                  .filter_map(|node| match node {
    ///                      Expr::Number { value } => Some(*value),
    ///                      _ => None,
    ///                  })
    ///                  .collect::<Vec<_>>();
    /// assert_eq!(leaves, vec![1, 2]);
    /// assert_eq!(tree.post_order().last(), Some(&tree));
    /// ```
    #[must_use]
    pub fn post_order(&self) -> PostOrder<'_> {
        PostOrder { stack: vec![(self, false)] }
    }

    /// Returns the number of nodes on the longest path from this node to a
    /// leaf, counting both ends.
    ///
    /// # Example
    /// ```
    /// use quotient::interpreter::parser::parse;
    ///
    /// assert_eq!(parse("7").unwrap().depth(), 1);
    /// assert_eq!(parse("1 + -(2 * 3)").unwrap().depth(), 4);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut heights: Vec<usize> = Vec::new();
        for node in self.post_order() {
            let height = match node {
                Self::Number { .. } => 1,
                Self::UnaryOp { .. } => 1 + heights.pop().unwrap_or_default(),
                Self::BinaryOp { .. } => {
                    let right = heights.pop().unwrap_or_default();
                    let left = heights.pop().unwrap_or_default();
                    1 + left.max(right)
                },
            };
            heights.push(height);
        }
        heights.pop().unwrap_or_default()
    }

    /// Moves the children of this node onto `out`, leaving leaves behind.
    fn detach_children(&mut self, out: &mut Vec<Self>) {
        match self {
            Self::Number { .. } => {},
            Self::UnaryOp { expr, .. } => out.push(std::mem::replace(&mut **expr, Self::number(0))),
            Self::BinaryOp { left, right, .. } => {
                out.push(std::mem::replace(&mut **left, Self::number(0)));
                out.push(std::mem::replace(&mut **right, Self::number(0)));
            },
        }
    }
}

/// Post-order iterator over the nodes of an [`Expr`].
///
/// Created by [`Expr::post_order`].
pub struct PostOrder<'a> {
    stack: Vec<(&'a Expr, bool)>,
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node);
            }
            self.stack.push((node, true));
            match node {
                Expr::Number { .. } => {},
                Expr::UnaryOp { expr, .. } => self.stack.push((&**expr, false)),
                Expr::BinaryOp { left, right, .. } => {
                    self.stack.push((&**right, false));
                    self.stack.push((&**left, false));
                },
            }
        }
        None
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Self::Number { value: a }, Self::Number { value: b }) => {
                    if a != b {
                        return false;
                    }
                },
                (Self::UnaryOp { op: a, expr: x }, Self::UnaryOp { op: b, expr: y }) => {
                    if a != b {
                        return false;
                    }
                    pending.push((&**x, &**y));
                },
                (Self::BinaryOp { left: l1,
                                  op: a,
                                  right: r1, },
                 Self::BinaryOp { left: l2,
                                  op: b,
                                  right: r2, }) => {
                    if a != b {
                        return false;
                    }
                    pending.push((&**r1, &**r2));
                    pending.push((&**l1, &**l2));
                },
                _ => return false,
            }
        }
        true
    }
}

impl Eq for Expr {}

/// Piece of pending output while rendering a tree.
enum Piece<'a> {
    Node(&'a Expr),
    Space,
    Close,
}

/// Renders the tree as a prefix S-expression, e.g. `(+ 2 (* 3 5))` or
/// `(neg 7)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Node(Self::Number { value }) => write!(f, "{value}")?,
                Piece::Node(Self::UnaryOp { op, expr }) => {
                    write!(f, "({op} ")?;
                    pending.push(Piece::Close);
                    pending.push(Piece::Node(expr));
                },
                Piece::Node(Self::BinaryOp { left, op, right }) => {
                    write!(f, "({op} ")?;
                    pending.push(Piece::Close);
                    pending.push(Piece::Node(right));
                    pending.push(Piece::Space);
                    pending.push(Piece::Node(left));
                },
                Piece::Space => f.write_str(" ")?,
                Piece::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}
