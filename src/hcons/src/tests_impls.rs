//! The test code for the trait implementations and the lack thereof.
//!
//! For negative tests, we use doc tests, which are a simple way to assert
//! the lack of certain trait implementations. There's a caveat: the doc
//! tests must be visible with `cfg(not(test))`. Each negative case has a
//! positive twin in the per-module unit tests, so a syntax error here can't
//! masquerade as the expected failure.

macro_rules! assert_compile_fail {
    ($($tt:tt)*) => {
        const _: () = {
            /// ```rust,compile_fail
            #[doc = stringify!($($tt)*)]
            /// ```
            #[allow(dead_code)]
            fn assert_compile_fail() {}
        };
    };
}

// Comparison requires equal arity.
assert_compile_fail! {
    use hcons::tuple;

    fn arity_mismatch() -> bool {
        tuple![1, 2] == tuple![1, 2, 3]
    }
}

// Default construction requires every element to be default-constructible.
assert_compile_fail! {
    use hcons::Tuple;

    struct NoDefault(u8);

    fn default_gate() -> Tuple![NoDefault, u8] {
        Default::default()
    }
}

// Positional access past the end has no impl.
assert_compile_fail! {
    use hcons::{get, nat::N2, tuple};

    fn out_of_range() -> i32 {
        *get::<N2, _>(&tuple![1, 2])
    }
}

// Access by type is only legal for a type that occurs exactly once.
assert_compile_fail! {
    use hcons::{select, tuple};

    fn ambiguous() -> i32 {
        *select::<i32, _, _>(&tuple![1i32, 2i32])
    }
}

assert_compile_fail! {
    use hcons::{select, tuple};

    fn absent() -> u8 {
        *select::<u8, _, _>(&tuple![1i32, 2.5f64])
    }
}

// A pair converts into the arity-2 tuple and nothing else.
assert_compile_fail! {
    use hcons::Tuple;

    fn pair_into_single() -> Tuple![String] {
        (String::new(), 1i32).into()
    }
}

// Element-wise converting construction requires equal arity.
assert_compile_fail! {
    use hcons::{tuple, ConvertFrom, Tuple};

    fn converting_arity_mismatch() -> Tuple![f64, f64] {
        <Tuple![f64, f64]>::convert_from(tuple![1i32])
    }
}

// `swap` requires the same tuple type on both sides.
assert_compile_fail! {
    use hcons::{swap, tuple};

    fn swap_mismatch() {
        let mut a = tuple![1, 2];
        let mut b = tuple![1, "x"];
        swap(&mut a, &mut b);
    }
}
