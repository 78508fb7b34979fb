//! Tuple concatenation.
//!
//! The result type is computed by recursion over the left operand's cells,
//! so the whole shape is settled at the type level; the only runtime work
//! is moving each element into place once.
use crate::tuple::{Cons, Nil, Tuple};

/// Append `Rhs` to the end of `self`.
pub trait Concat<Rhs: Tuple>: Tuple {
    /// The concatenated tuple type.
    type Output: Tuple;

    /// Consume both tuples and produce their concatenation.
    fn concat(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs: Tuple> Concat<Rhs> for Nil {
    type Output = Rhs;

    #[inline]
    fn concat(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<Head, Tail, Rhs> Concat<Rhs> for Cons<Head, Tail>
where
    Tail: Concat<Rhs>,
    Rhs: Tuple,
{
    type Output = Cons<Head, Tail::Output>;

    #[inline]
    fn concat(self, rhs: Rhs) -> Self::Output {
        Cons {
            head: self.head,
            tail: self.tail.concat(rhs),
        }
    }
}

/// Concatenate a tuple of tuples into one tuple.
///
/// This is the engine behind [`tuple_cat`]; implemented for any tuple whose
/// elements are themselves tuples.
pub trait ConcatAll: Tuple {
    /// The concatenation of all the element tuples.
    type Output: Tuple;

    /// Consume the sources and produce their concatenation.
    fn concat_all(self) -> Self::Output;
}

impl ConcatAll for Nil {
    type Output = Nil;

    #[inline]
    fn concat_all(self) -> Nil {
        Nil
    }
}

impl<Head, Tail> ConcatAll for Cons<Head, Tail>
where
    Tail: ConcatAll,
    Head: Concat<Tail::Output>,
{
    type Output = <Head as Concat<Tail::Output>>::Output;

    #[inline]
    fn concat_all(self) -> Self::Output {
        self.head.concat(self.tail.concat_all())
    }
}

/// Concatenate any number of tuples, in source order, position order within
/// each source.
///
/// The sources are passed as one tuple of tuples and are consumed; a caller
/// that wants to keep a source clones it at the call site. Zero sources
/// yield the empty tuple, and empty sources contribute nothing.
///
/// ```rust
/// use hcons::{tuple, tuple_cat};
///
/// let t = tuple_cat(tuple![tuple![1, 2], tuple![3], tuple![], tuple![4, 5]]);
/// assert_eq!(t, tuple![1, 2, 3, 4, 5]);
/// ```
#[inline]
pub fn tuple_cat<Sources: ConcatAll>(sources: Sources) -> Sources::Output {
    sources.concat_all()
}
