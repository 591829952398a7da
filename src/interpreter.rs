/// The lexer module tokenizes source code for further parsing.
///
/// The scanner reads the raw source text lazily and produces one token at a
/// time: integer literals, the four operators and parentheses. Whitespace is
/// skipped. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens paired with their byte
///   offset.
/// - Produces an end-of-input token forever once the text is exhausted.
/// - Reports lexical errors for characters outside the token alphabet.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one token of lookahead. Each precedence
/// level is one routine; binary operators fold to the left and sign operators
/// nest to the right.
///
/// # Responsibilities
/// - Converts tokens into [`Expr`](crate::ast::Expr) nodes.
/// - Validates grammar and reports the expected and actual token with its
///   offset.
/// - Bounds nesting depth.
pub mod parser;
/// The evaluator module computes the value of a tree.
///
/// # Responsibilities
/// - Walks the AST and applies checked integer arithmetic.
/// - Reports division by zero and overflow.
pub mod evaluator;
/// Postfix (reverse Polish) emission and evaluation.
///
/// Linearizes a tree in post-order, renders the sequence as text, and
/// evaluates such sequences on an operand stack.
pub mod postfix;
