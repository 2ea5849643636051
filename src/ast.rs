use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AstNode {
    Leaf(char),
    AnyChar,
    Concatenation(Box<AstNode>, Box<AstNode>),
    Or(Box<AstNode>, Box<AstNode>),
    Star(Box<AstNode>),
}

impl AstNode {
    pub(crate) fn concatenation(left: AstNode, right: AstNode) -> Self {
        Self::Concatenation(Box::new(left), Box::new(right))
    }

    pub(crate) fn or(left: AstNode, right: AstNode) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    pub(crate) fn star(node: AstNode) -> Self {
        Self::Star(Box::new(node))
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);

        match self {
            Self::Leaf(c) => writeln!(f, "{}Leaf: {}", indent, c),
            Self::AnyChar => writeln!(f, "{}AnyChar", indent),
            Self::Concatenation(left, right) => {
                writeln!(f, "{}Concatenation", indent)?;
                left.write_tree(f, depth + 1)?;
                right.write_tree(f, depth + 1)
            }
            Self::Or(left, right) => {
                writeln!(f, "{}Or", indent)?;
                left.write_tree(f, depth + 1)?;
                right.write_tree(f, depth + 1)
            }
            Self::Star(node) => {
                writeln!(f, "{}Star", indent)?;
                node.write_tree(f, depth + 1)
            }
        }
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}
