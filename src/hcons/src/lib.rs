//! Heterogeneous fixed-arity tuples built from cons cells.
//!
//! A tuple type is spelled with the [`Tuple!`] macro, which expands to a
//! chain of [`Cons`] cells terminated by [`Nil`]. The matching value and
//! pattern spellings are [`tuple!`] and [`tuple_pat!`].
//!
//! ```rust
//! use hcons::{tuple, Tuple};
//!
//! let point: Tuple![i32, i32, &str] = (10, 20, "origin").into();
//! assert_eq!(point, tuple![10, 20, "origin"]);
//! ```
//!
//! Arity and per-position element types are compile-time facts of the
//! concrete type. Every misuse (comparing tuples of different arity,
//! indexing past the end, selecting by a type that occurs zero or several
//! times) is a missing or ambiguous trait impl, never a runtime fault.
//!
//!  - Positional access: [`get`], [`get_mut`], [`get_into`] with the
//!    type-level indices from [`nat`].
//!  - Access by unique element type: [`select`], [`select_mut`],
//!    [`select_into`].
//!  - Structural comparison and hashing, element-wise and lexicographic.
//!  - Concatenation of any number of tuples: [`tuple_cat`].
//!  - Conversion from and to the native tuple spelling: `From`/[`IntoFlat`],
//!    for arities up to 15.
//!  - Element-wise converting construction: [`ConvertFrom`], [`ConvertInto`].
//!  - Destructuring assignment into existing places: [`tie!`], [`Unpack`],
//!    with [`Ignore`] as the discard target.
//!  - Const-context default construction via [`utils::Init`].
#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod utils;

pub mod access;
pub mod bind;
pub mod cat;
pub mod convert;
pub mod nat;
pub mod tuple;

mod cmp;
mod tests_impls;

pub use access::{get, get_into, get_mut, select, select_into, select_mut, At, ElementAt, Select};
pub use bind::{Ignore, Place, ToMut, ToRef, Unpack};
pub use cat::{tuple_cat, Concat, ConcatAll};
pub use convert::{ConvertFrom, ConvertInto, IntoFlat};
pub use tuple::{swap, Cons, Nil, Tuple};

/// The prelude module.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        access::{At, Select},
        bind::{ToMut, ToRef, Unpack},
        cat::{Concat, ConcatAll},
        convert::{ConvertFrom, ConvertInto, IntoFlat},
        tuple::Tuple,
        utils::Init,
    };
}
