//! Conversions: native ("flat") tuple interop and element-wise converting
//! construction.
//!
//! The flat impls are generated for arities `0..16`. `From` only works in
//! the flat-to-cons direction; the reverse would place uncovered type
//! parameters ahead of the local type and is rejected by coherence, so it's
//! the [`IntoFlat`] trait instead.
use crate::tuple::{Cons, Nil, Tuple};

/// Convert a cons-cell tuple into the native tuple of the same arity.
///
/// ```rust
/// use hcons::{tuple, IntoFlat};
///
/// assert_eq!(tuple![1, "a"].into_flat(), (1, "a"));
/// ```
pub trait IntoFlat: Tuple {
    /// The native tuple with the same element types.
    type Flat;

    /// Consume the tuple and produce its flat spelling.
    fn into_flat(self) -> Self::Flat;
}

macro_rules! impl_flat_conversions {
    ( @start $($x:tt)* ) => {
        impl_flat_conversions! { @iter [] [$($x)*] }
    };

    // inductive case
    ( @iter
        [$(($ElemI:ident, $elemI:ident, $I:tt))*]
        [$next_head:tt $($next_tail:tt)*]
    ) => {
        impl_flat_conversions! {
            @iter [$(($ElemI, $elemI, $I))* $next_head] [$($next_tail)*]
        }

        impl<$($ElemI,)*> From<($($ElemI,)*)> for $crate::Tuple![$($ElemI),*] {
            #[inline]
            fn from(_flat: ($($ElemI,)*)) -> Self {
                $crate::tuple![$(_flat.$I),*]
            }
        }

        impl<$($ElemI,)*> IntoFlat for $crate::Tuple![$($ElemI),*] {
            type Flat = ($($ElemI,)*);

            #[inline]
            fn into_flat(self) -> Self::Flat {
                let $crate::tuple_pat![$($elemI),*] = self;
                ($($elemI,)*)
            }
        }
    };

    // base case
    ( @iter [$($_discard:tt)*] [] ) => {};
}

seq_macro::seq!(I in 0..16 {
    impl_flat_conversions! { @start #( (Elem~I, elem~I, I) )* }
});

/// Element-wise converting construction from a tuple of equal arity.
///
/// Each source element converts through its own `Into`; the arity match is
/// enforced by the cell recursion, so converting from a tuple of a
/// different arity fails to compile.
///
/// ```rust
/// use hcons::{tuple, ConvertFrom, Tuple};
///
/// let wide = <Tuple![f64, f64]>::convert_from(tuple![1i32, 2i32]);
/// assert_eq!(wide, tuple![1.0, 2.0]);
/// ```
pub trait ConvertFrom<Src>: Sized {
    /// Convert every element of `src` into this tuple's element types.
    fn convert_from(src: Src) -> Self;
}

impl ConvertFrom<Nil> for Nil {
    #[inline]
    fn convert_from(_src: Nil) -> Self {
        Nil
    }
}

impl<SrcHead, SrcTail, Head, Tail> ConvertFrom<Cons<SrcHead, SrcTail>> for Cons<Head, Tail>
where
    SrcHead: Into<Head>,
    Tail: ConvertFrom<SrcTail>,
{
    #[inline]
    fn convert_from(src: Cons<SrcHead, SrcTail>) -> Self {
        Cons {
            head: src.head.into(),
            tail: Tail::convert_from(src.tail),
        }
    }
}

/// The `Into` counterpart of [`ConvertFrom`], implemented blanket-wise.
pub trait ConvertInto<Dst> {
    /// Convert every element of `self` into `Dst`'s element types.
    fn convert_into(self) -> Dst;
}

impl<Src, Dst: ConvertFrom<Src>> ConvertInto<Dst> for Src {
    #[inline]
    fn convert_into(self) -> Dst {
        Dst::convert_from(self)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::{tuple, Tuple};

    #[test]
    fn from_flat() {
        let t: Tuple![i32, &str] = (1, "a").into();
        assert_eq!(t, tuple![1, "a"]);

        let empty: Tuple![] = ().into();
        assert_eq!(empty, Nil);

        let single: Tuple![i32] = (7,).into();
        assert_eq!(single, tuple![7]);
    }

    #[test]
    fn pair_conversion_is_the_arity_two_case() {
        let t: Tuple![String, i32] = (String::from("k"), 3).into();
        assert_eq!(t, tuple![String::from("k"), 3]);
    }

    #[test]
    fn into_flat() {
        assert_eq!(tuple![1, "a"].into_flat(), (1, "a"));
        assert_eq!(tuple![7].into_flat(), (7,));

        let _: () = Nil.into_flat();
    }

    #[test]
    fn converting_construction_widens_each_element() {
        let wide = <Tuple![f64, f64]>::convert_from(tuple![1i32, 2i32]);
        assert_eq!(wide, tuple![1.0, 2.0]);

        let owned: Tuple![String, u64] = tuple!["s", 5u32].convert_into();
        assert_eq!(owned, tuple![String::from("s"), 5u64]);
    }

    #[test]
    fn converting_construction_allows_identity() {
        let same: Tuple![i32, i32] = tuple![1, 2].convert_into();
        assert_eq!(same, tuple![1, 2]);
    }

    #[quickcheck]
    fn flat_round_trip(flat: (u8, i16, u32, i64)) {
        let _ = env_logger::builder().is_test(true).try_init();
        log::debug!("flat = {flat:?}");

        let list: Tuple![u8, i16, u32, i64] = flat.into();
        assert_eq!(list.into_flat(), flat);
    }
}
