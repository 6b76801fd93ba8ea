use std::fmt::{self, Display};

/// Unary operator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Negate => write!(f, "-"),
        }
    }
}

/// Binary operator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Add => write!(f, "+"),
            BinaryOp::Subtract => write!(f, "-"),
            BinaryOp::Multiply => write!(f, "*"),
            BinaryOp::Divide => write!(f, "/"),
        }
    }
}

/// A binding name: a borrowed slice of the original source. The AST never
/// copies identifier text, so it cannot outlive the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier<'src> {
    pub name: &'src str,
}

impl Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A node in the syntax tree. Every non-leaf variant exclusively owns its
/// children; a successful parse hands the caller one root `Block`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'src> {
    /// A number literal.
    Number(f64),
    /// A unary operator applied to an operand.
    Unary {
        op: UnaryOp,
        operand: Box<Node<'src>>,
    },
    /// A binary operator applied to two operands.
    Binary {
        left: Box<Node<'src>>,
        op: BinaryOp,
        right: Box<Node<'src>>,
    },
    /// `let name = value;` — declares a new binding.
    LetAssign {
        ident: Identifier<'src>,
        value: Box<Node<'src>>,
    },
    /// `name = value;` — assigns to an existing binding.
    LetSet {
        ident: Identifier<'src>,
        value: Box<Node<'src>>,
    },
    /// `name` — reads a binding.
    LetGet(Identifier<'src>),
    /// `{ ... }` — statements in declaration order, forming a lexical scope.
    Block(Vec<Node<'src>>),
}

impl<'src> Node<'src> {
    /// Renders the tree back to parseable source. A root `Block` is printed
    /// without its braces, so `parse(node.to_source())` rebuilds a
    /// structurally identical tree.
    pub fn to_source(&self) -> String {
        match self {
            Node::Block(body) => {
                let statements: Vec<String> = body.iter().map(render_statement).collect();
                statements.join(" ")
            }
            _ => render_statement(self),
        }
    }
}

/// Blocks carry their own delimiters when printed; every other statement
/// takes a `;`. The `;` lives here and not in `Display` because an
/// assignment can sit in expression position, where no terminator belongs.
fn render_statement(node: &Node<'_>) -> String {
    if matches!(node, Node::Block(_)) {
        node.to_string()
    } else {
        format!("{};", node)
    }
}

impl Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(value) => write!(f, "{}", value),
            Node::Unary { op, operand } => write!(f, "({}{})", op, operand),
            Node::Binary { left, op, right } => write!(f, "({} {} {})", left, op, right),
            Node::LetAssign { ident, value } => write!(f, "let {} = {}", ident, value),
            // Parenthesized so a reparse in expression position rebuilds the
            // same node.
            Node::LetSet { ident, value } => write!(f, "({} = {})", ident, value),
            Node::LetGet(ident) => write!(f, "{}", ident),
            Node::Block(body) => {
                write!(f, "{{")?;
                for statement in body {
                    write!(f, " {}", render_statement(statement))?;
                }
                write!(f, " }}")
            }
        }
    }
}
