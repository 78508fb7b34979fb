#![allow(clippy::declare_interior_mutable_const)]
use core::{
    cell::{Cell, RefCell, UnsafeCell},
    marker::PhantomData,
};

use crate::tuple::{Cons, Nil};

/// Trait for types having a constant default value. This is essentially a
/// constant version of `Default`.
///
/// Default-constructing a tuple in a constant context goes through this
/// trait; it's implemented for a tuple exactly when it's implemented for
/// every element.
///
/// ```rust
/// use hcons::{tuple, utils::Init, Tuple};
///
/// const ORIGIN: Tuple![i32, i32] = Init::INIT;
/// assert_eq!(ORIGIN, tuple![0, 0]);
/// ```
pub trait Init {
    /// The default value.
    const INIT: Self;
}

impl Init for Nil {
    const INIT: Self = Nil;
}

impl<Head: Init, Tail: Init> Init for Cons<Head, Tail> {
    const INIT: Self = Cons {
        head: Head::INIT,
        tail: Tail::INIT,
    };
}

impl<T: 'static> Init for &'_ [T] {
    const INIT: Self = &[];
}

impl Init for &'_ str {
    const INIT: Self = "";
}

impl<T> Init for Option<T> {
    const INIT: Self = None;
}

impl<T: ?Sized> Init for PhantomData<T> {
    const INIT: Self = PhantomData;
}

impl<T: Init, const LEN: usize> Init for [T; LEN] {
    const INIT: Self = [T::INIT; LEN];
}

impl<T: Init> Init for UnsafeCell<T> {
    const INIT: Self = UnsafeCell::new(T::INIT);
}

impl<T: Init> Init for Cell<T> {
    const INIT: Self = Cell::new(T::INIT);
}

impl<T: Init> Init for RefCell<T> {
    const INIT: Self = RefCell::new(T::INIT);
}

macro_rules! impl_init {
    (
        $(
            $ty:ty => $value:expr,
        )*
    ) => {
        $(
            impl Init for $ty {
                const INIT: Self = $value;
            }
        )*
    };
}

impl_init! {
    bool => false,
    char => '\0',
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    u128 => 0,
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
    usize => 0,
    isize => 0,
    f32 => 0.0,
    f64 => 0.0,
    () => (),
}
