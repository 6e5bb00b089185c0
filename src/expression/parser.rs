use log::trace;

use crate::{
    error::ParseError,
    expression::{
        lexer::{Token, tokenize},
        node::{ExpressionNode, Operand, Operator},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The deepest parenthesis nesting the parser accepts.
///
/// Evaluating, displaying and dropping a tree are all recursive, so the depth
/// is bounded to keep them within a fixed stack budget.
pub const MAX_NESTING_DEPTH: usize = 256;

type NodeId = usize;

const ROOT: NodeId = 0;

/// Which operand the innermost open scope is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// A node under construction.
///
/// `parent` is an index into the builder's arena and only serves to climb
/// back out of a scope on `)`. While a child is open, the parent's slot for
/// it stays empty; the finished child is moved into it when the child closes.
#[derive(Debug, Default)]
struct DraftNode {
    operator:  Option<Operator>,
    left:      Option<Operand>,
    right:     Option<Operand>,
    parent:    Option<NodeId>,
    opened_at: usize,
}

impl DraftNode {
    fn slot_mut(&mut self, side: Side) -> &mut Option<Operand> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Builds an expression tree by scanning tokens left to right.
///
/// `current` is the node receiving operands and `position` holds, for every
/// open scope from the root down, the operand that scope expects next.
struct TreeBuilder {
    nodes:    Vec<DraftNode>,
    current:  NodeId,
    position: Vec<Side>,
}

/// Parses an infix expression into an expression tree.
///
/// Tokens must be separated by whitespace. There is no operator precedence:
/// each pair of parentheses holds exactly one operation, and the whole input
/// is one implicit outer operation.
///
/// Grammar: `expression := operand operator operand`,
/// `operand := integer | "(" expression ")"`
///
/// # Errors
/// Returns a [`ParseError`] citing the index of the offending token when the
/// input is empty, contains an unknown token, or is structurally malformed.
///
/// # Example
/// ```
/// use infix_stairs::{error::ParseError, expression::parse};
///
/// let tree = parse("( 2 * 1 ) + 2").unwrap();
/// assert_eq!(tree.to_string(), "((2 * 1) + 2)");
///
/// assert_eq!(parse("( 1 + 2"), Err(ParseError::UnclosedParenthesis { index: 0 }));
/// ```
pub fn parse(source: &str) -> ParseResult<ExpressionNode> {
    let tokens = tokenize(source)?;

    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut builder = TreeBuilder::new();
    for &(token, index) in &tokens {
        builder.push(token, index)?;
    }

    builder.finish(tokens.len())
}

impl TreeBuilder {
    fn new() -> Self {
        Self { nodes:    vec![DraftNode::default()],
               current:  ROOT,
               position: vec![Side::Left], }
    }

    fn push(&mut self, token: Token, index: usize) -> ParseResult<()> {
        trace!("token {index}: '{token}' at depth {}", self.position.len());

        match token {
            Token::OpenParen => self.open(index),
            Token::CloseParen => self.close(index),
            Token::Integer(value) => self.fill(Operand::Literal(value), index),
            Token::Plus => self.set_operator(Operator::Add, index),
            Token::Minus => self.set_operator(Operator::Subtract, index),
            Token::Star => self.set_operator(Operator::Multiply, index),
            Token::Slash => self.set_operator(Operator::Divide, index),
        }
    }

    fn expecting(&self) -> Side {
        self.position.last().copied().unwrap_or(Side::Left)
    }

    fn expected_slot(&mut self, index: usize) -> ParseResult<&mut Option<Operand>> {
        let side = self.expecting();
        let target = self.nodes[self.current].slot_mut(side);

        if target.is_some() {
            return Err(ParseError::UnexpectedOperand { index });
        }
        Ok(target)
    }

    fn fill(&mut self, operand: Operand, index: usize) -> ParseResult<()> {
        *self.expected_slot(index)? = Some(operand);
        Ok(())
    }

    fn open(&mut self, index: usize) -> ParseResult<()> {
        if self.position.len() > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { index,
                                                    limit: MAX_NESTING_DEPTH });
        }
        self.expected_slot(index)?;

        let child = self.nodes.len();
        self.nodes.push(DraftNode { parent: Some(self.current),
                                    opened_at: index,
                                    ..DraftNode::default() });
        self.current = child;
        self.position.push(Side::Left);
        Ok(())
    }

    fn close(&mut self, index: usize) -> ParseResult<()> {
        let Some(parent) = self.nodes[self.current].parent else {
            return Err(ParseError::UnbalancedParenthesis { index });
        };
        let node = self.complete(self.current, index)?;

        self.current = parent;
        self.position.pop();
        self.fill(node.into(), index)
    }

    fn set_operator(&mut self, operator: Operator, index: usize) -> ParseResult<()> {
        let node = &mut self.nodes[self.current];

        if node.left.is_none() {
            return Err(ParseError::MissingOperand { index });
        }
        if node.operator.is_some() {
            return Err(ParseError::DuplicateOperator { token: operator.to_string(),
                                                       index });
        }
        node.operator = Some(operator);

        // The left operand is done; whatever comes next belongs on the right.
        if let Some(side) = self.position.last_mut() {
            *side = Side::Right;
        }
        Ok(())
    }

    fn finish(mut self, token_count: usize) -> ParseResult<ExpressionNode> {
        let node = &self.nodes[self.current];

        if node.parent.is_some() {
            return Err(ParseError::UnclosedParenthesis { index: node.opened_at });
        }

        self.complete(ROOT, token_count)
    }

    /// Moves a finished draft out of the arena as an owned node.
    ///
    /// `index` is where the node ended: its `)`, or the token count for the
    /// root.
    fn complete(&mut self, id: NodeId, index: usize) -> ParseResult<ExpressionNode> {
        let node = std::mem::take(&mut self.nodes[id]);

        match (node.left, node.operator, node.right) {
            (Some(left), Some(operator), Some(right)) => Ok(ExpressionNode { operator,
                                                                             left,
                                                                             right }),
            (None, ..) => Err(ParseError::MissingOperand { index }),
            (_, None, _) => Err(ParseError::MissingOperator { index }),
            (_, _, None) => Err(ParseError::MissingOperand { index }),
        }
    }
}
