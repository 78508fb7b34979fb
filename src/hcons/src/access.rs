//! Element access by position and by unique element type.
//!
//! Both lookups are resolved entirely at the type level: an out-of-range
//! index or a type that occurs zero or several times means the required
//! impl doesn't exist (or can't be inferred), and the call fails to build.
use crate::{
    nat::{Nat, S, Z},
    tuple::Cons,
};

/// Positional access to the element at index `N`.
///
/// Implemented for every tuple whose arity is greater than `N::N`.
pub trait At<N: Nat> {
    /// The type of the element at this position.
    type Element;

    /// Borrow the element.
    fn at(&self) -> &Self::Element;

    /// Mutably borrow the element.
    fn at_mut(&mut self) -> &mut Self::Element;

    /// Move the element out, discarding the rest of the tuple.
    fn into_at(self) -> Self::Element
    where
        Self: Sized;
}

impl<Head, Tail> At<Z> for Cons<Head, Tail> {
    type Element = Head;

    #[inline]
    fn at(&self) -> &Head {
        &self.head
    }

    #[inline]
    fn at_mut(&mut self) -> &mut Head {
        &mut self.head
    }

    #[inline]
    fn into_at(self) -> Head {
        self.head
    }
}

impl<Head, Tail, N> At<S<N>> for Cons<Head, Tail>
where
    N: Nat,
    Tail: At<N>,
{
    type Element = Tail::Element;

    #[inline]
    fn at(&self) -> &Self::Element {
        self.tail.at()
    }

    #[inline]
    fn at_mut(&mut self) -> &mut Self::Element {
        self.tail.at_mut()
    }

    #[inline]
    fn into_at(self) -> Self::Element {
        self.tail.into_at()
    }
}

/// The type of `L`'s element at position `N`.
pub type ElementAt<N, L> = <L as At<N>>::Element;

/// Borrow the element at position `N`.
///
/// ```rust
/// use hcons::{get, nat::N1, tuple};
///
/// let t = tuple![1, "a", true];
/// assert_eq!(*get::<N1, _>(&t), "a");
/// ```
#[inline]
pub fn get<N: Nat, L: At<N>>(list: &L) -> &L::Element {
    list.at()
}

/// Mutably borrow the element at position `N`.
#[inline]
pub fn get_mut<N: Nat, L: At<N>>(list: &mut L) -> &mut L::Element {
    list.at_mut()
}

/// Move the element at position `N` out of the tuple.
#[inline]
pub fn get_into<N: Nat, L: At<N>>(list: L) -> L::Element {
    list.into_at()
}

/// Access to the sole element of type `E`.
///
/// `N` is the element's position; callers leave it to inference. Inference
/// succeeds exactly when `E` occurs in the tuple once: with zero
/// occurrences no impl applies, with several the position is ambiguous,
/// and either way the call fails to compile.
pub trait Select<E, N: Nat> {
    /// Borrow the element.
    fn pick(&self) -> &E;

    /// Mutably borrow the element.
    fn pick_mut(&mut self) -> &mut E;

    /// Move the element out, discarding the rest of the tuple.
    fn pick_into(self) -> E
    where
        Self: Sized;
}

impl<E, Tail> Select<E, Z> for Cons<E, Tail> {
    #[inline]
    fn pick(&self) -> &E {
        &self.head
    }

    #[inline]
    fn pick_mut(&mut self) -> &mut E {
        &mut self.head
    }

    #[inline]
    fn pick_into(self) -> E {
        self.head
    }
}

impl<Head, Tail, E, N> Select<E, S<N>> for Cons<Head, Tail>
where
    N: Nat,
    Tail: Select<E, N>,
{
    #[inline]
    fn pick(&self) -> &E {
        self.tail.pick()
    }

    #[inline]
    fn pick_mut(&mut self) -> &mut E {
        self.tail.pick_mut()
    }

    #[inline]
    fn pick_into(self) -> E {
        self.tail.pick_into()
    }
}

/// Borrow the sole element of type `E`.
///
/// ```rust
/// use hcons::{select, tuple};
///
/// let t = tuple![1i32, 2.5f64];
/// assert_eq!(*select::<i32, _, _>(&t), 1);
/// ```
#[inline]
pub fn select<E, N: Nat, L: Select<E, N>>(list: &L) -> &E {
    list.pick()
}

/// Mutably borrow the sole element of type `E`.
#[inline]
pub fn select_mut<E, N: Nat, L: Select<E, N>>(list: &mut L) -> &mut E {
    list.pick_mut()
}

/// Move the sole element of type `E` out of the tuple.
#[inline]
pub fn select_into<E, N: Nat, L: Select<E, N>>(list: L) -> E {
    list.pick_into()
}
