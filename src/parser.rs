use log::debug;

use crate::{
    ast::AstNode,
    common::{ParseError, StructuralError, SyntaxError},
    reader::Reader,
};

/// Recursive descent over:
///
/// ```text
/// Expression    := Concatenation ( '|' Concatenation )*
/// Concatenation := Repeat ( Repeat )*
/// Repeat        := Atom ( '*' )*
/// Atom          := alnum | '(' Expression ')' | '.'
/// ```
///
/// Recursion depth follows the nesting depth of the expression, so very deep
/// groups are bounded by the thread's stack.
pub(crate) struct Parser;

impl Parser {
    pub(crate) fn parse_regex_str(s: &str) -> Result<AstNode, ParseError> {
        let chars = s.chars().collect::<Vec<_>>();
        Self::check_structure(&chars)?;

        let mut reader = Reader::new(&chars[..]);
        let ast = Self::parse_expression(&mut reader)?;

        let position = reader.pos();
        if let Some(c) = reader.pop() {
            return Err(SyntaxError::UnexpectedChar { ch: *c, position }.into());
        }

        debug!("Parsed {:?} into {:?}", s, ast);
        Ok(ast)
    }

    // Unclosed `(` is left to the descent, which can point at the opening.
    fn check_structure(chars: &[char]) -> Result<(), StructuralError> {
        let mut depth = 0usize;
        let mut prev = None;

        for (position, &c) in chars.iter().enumerate() {
            match c {
                '(' => depth += 1,
                ')' => {
                    if depth == 0 {
                        return Err(StructuralError::UnopenedParen { position });
                    }
                    depth -= 1;
                }
                '*' | '|' if prev == Some(c) => {
                    return Err(StructuralError::RepeatedOperator { op: c, position });
                }
                _ => {}
            }

            prev = Some(c);
        }

        Ok(())
    }

    fn parse_expression(reader: &mut Reader<'_, char>) -> Result<AstNode, ParseError> {
        let mut left = Self::parse_concatenation(reader)?;

        while reader.pop_if(&'|') {
            let right = Self::parse_concatenation(reader)?;
            left = AstNode::or(left, right);
        }

        Ok(left)
    }

    fn parse_concatenation(reader: &mut Reader<'_, char>) -> Result<AstNode, ParseError> {
        let mut left = Self::parse_repeat(reader)?;

        loop {
            match reader.peek() {
                None | Some('|') | Some(')') => break,
                Some(_) => {
                    let right = Self::parse_repeat(reader)?;
                    left = AstNode::concatenation(left, right);
                }
            }
        }

        Ok(left)
    }

    fn parse_repeat(reader: &mut Reader<'_, char>) -> Result<AstNode, ParseError> {
        let mut node = Self::parse_atom(reader)?;

        while reader.pop_if(&'*') {
            node = AstNode::star(node);
        }

        Ok(node)
    }

    fn parse_atom(reader: &mut Reader<'_, char>) -> Result<AstNode, ParseError> {
        let position = reader.pos();

        match reader.pop() {
            Some('(') => {
                let inner = Self::parse_expression(reader)?;
                if reader.pop_if(&')') {
                    Ok(inner)
                } else {
                    Err(SyntaxError::UnmatchedParen { position }.into())
                }
            }
            Some('.') => Ok(AstNode::AnyChar),
            Some(c) if c.is_alphanumeric() => Ok(AstNode::Leaf(*c)),
            Some(c) => Err(SyntaxError::UnexpectedChar { ch: *c, position }.into()),
            None => Err(SyntaxError::UnexpectedEnd { position }.into()),
        }
    }
}
