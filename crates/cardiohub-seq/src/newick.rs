//! Minimal Newick tree parsing.
//!
//! Handles the plain subset the phylo demo needs: nested parenthesised
//! groups, comma-separated children, bare node names, an optional trailing
//! semicolon. No branch lengths, no quoting, no comments.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NewickError {
    #[error("unexpected character '{found}' at byte {at}")]
    Unexpected { found: char, at: usize },

    #[error("unbalanced parentheses")]
    Unbalanced,

    #[error("trailing input after tree: \"{0}\"")]
    TrailingInput(String),

    #[error("empty input")]
    Empty,
}

/// One node of a parsed tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Clade {
    pub name: Option<String>,
    pub children: Vec<Clade>,
}

impl Clade {
    pub fn leaf(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Nodes in the subtree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Clade::node_count).sum::<usize>()
    }

    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(Clade::leaf_count).sum()
        }
    }

    /// Indented ASCII rendering, one node per line.
    pub fn to_ascii(&self) -> String {
        let mut out = String::new();
        self.render(&mut out, 0);
        out
    }

    fn render(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("    ");
        }
        out.push_str(self.name.as_deref().unwrap_or("Clade"));
        out.push('\n');
        for child in &self.children {
            child.render(out, depth + 1);
        }
    }
}

/// Parse a Newick string such as `(A, (B, C), (D, E));`.
pub fn parse_newick(input: &str) -> Result<Clade, NewickError> {
    let mut parser = Parser {
        bytes: input.as_bytes(),
        pos: 0,
    };
    parser.skip_ws();
    if parser.at_end() {
        return Err(NewickError::Empty);
    }
    let clade = parser.clade()?;
    parser.skip_ws();
    if parser.peek() == Some(b';') {
        parser.pos += 1;
        parser.skip_ws();
    }
    if !parser.at_end() {
        let rest = input[parser.pos..].trim().to_string();
        return Err(NewickError::TrailingInput(rest));
    }
    Ok(clade)
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn clade(&mut self) -> Result<Clade, NewickError> {
        self.skip_ws();
        let mut clade = Clade::default();

        if self.peek() == Some(b'(') {
            self.pos += 1;
            loop {
                clade.children.push(self.clade()?);
                self.skip_ws();
                match self.peek() {
                    Some(b',') => self.pos += 1,
                    Some(b')') => {
                        self.pos += 1;
                        break;
                    }
                    Some(other) => {
                        return Err(NewickError::Unexpected {
                            found: other as char,
                            at: self.pos,
                        })
                    }
                    None => return Err(NewickError::Unbalanced),
                }
            }
            self.skip_ws();
        }

        clade.name = self.name();

        if clade.name.is_none() && clade.children.is_empty() {
            return match self.peek() {
                Some(other) => Err(NewickError::Unexpected {
                    found: other as char,
                    at: self.pos,
                }),
                None => Err(NewickError::Unbalanced),
            };
        }
        Ok(clade)
    }

    /// A bare name: everything up to a structural character or whitespace.
    fn name(&mut self) -> Option<String> {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if matches!(b, b'(' | b')' | b',' | b';') || b.is_ascii_whitespace() {
                break;
            }
            self.pos += 1;
        }
        if self.pos == start {
            None
        } else {
            Some(String::from_utf8_lossy(&self.bytes[start..self.pos]).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_demo_tree() {
        let tree = parse_newick("(A, (B, C), (D, E));").unwrap();
        assert_eq!(tree.children.len(), 3);
        assert_eq!(tree.children[0], Clade::leaf("A"));
        assert_eq!(tree.children[1].children, vec![Clade::leaf("B"), Clade::leaf("C")]);
        assert_eq!(tree.leaf_count(), 5);
        assert_eq!(tree.node_count(), 8);
    }

    #[test]
    fn named_inner_clade() {
        let tree = parse_newick("((A,B)AB,C)root;").unwrap();
        assert_eq!(tree.name.as_deref(), Some("root"));
        assert_eq!(tree.children[0].name.as_deref(), Some("AB"));
        assert_eq!(tree.children[0].children.len(), 2);
    }

    #[test]
    fn single_leaf_is_a_tree() {
        assert_eq!(parse_newick("A;").unwrap(), Clade::leaf("A"));
    }

    #[test]
    fn semicolon_is_optional() {
        assert_eq!(parse_newick("(A,B)").unwrap().children.len(), 2);
    }

    #[test]
    fn ascii_rendering_indents_children() {
        let tree = parse_newick("(A, (B, C));").unwrap();
        let ascii = tree.to_ascii();
        assert!(ascii.contains("    A\n"));
        assert!(ascii.contains("        B\n"));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(parse_newick("   "), Err(NewickError::Empty));
    }

    #[test]
    fn unbalanced_parens_are_an_error() {
        assert_eq!(parse_newick("(A,(B,C)"), Err(NewickError::Unbalanced));
    }

    #[test]
    fn dangling_comma_is_an_error() {
        assert!(matches!(
            parse_newick("(A,)"),
            Err(NewickError::Unexpected { found: ')', .. })
        ));
    }

    #[test]
    fn trailing_garbage_is_an_error() {
        assert!(matches!(
            parse_newick("(A,B); junk"),
            Err(NewickError::TrailingInput(_))
        ));
    }
}
