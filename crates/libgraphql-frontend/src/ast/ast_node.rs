use crate::Pos;

/// Trait implemented by every AST node type: the node's half-open source
/// span `[pos(), end())`.
///
/// All node types implement this via `#[inherent] impl AstNode`, so the
/// methods are callable without importing the trait while still being
/// available as a bound for generic utilities such as the
/// [`walker`](crate::walker).
///
/// Spans are computed from a node's stored tokens and children on every
/// call. `pos()` is the position of the node's first character and `end()`
/// is the position one past its last, so `pos() <= end()` always holds.
pub trait AstNode {
    fn pos(&self) -> Pos;

    fn end(&self) -> Pos;
}

/// Span of a non-empty sequence of nodes: from the first node's `pos()` to
/// the last node's `end()`. Empty sequences have the span
/// `[Pos::NONE, Pos::NONE)`.
pub(crate) fn seq_pos<T: AstNode>(items: &[T]) -> Pos {
    items.first().map_or(Pos::NONE, AstNode::pos)
}

pub(crate) fn seq_end<T: AstNode>(items: &[T]) -> Pos {
    items.last().map_or(Pos::NONE, AstNode::end)
}
