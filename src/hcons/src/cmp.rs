//! Structural comparison and hashing.
//!
//! Tuples compare position by position, left to right; ordering is
//! lexicographic (the first non-equal position decides, an exhausted
//! comparison is `Equal`). The impls permit comparison across tuples with
//! different but mutually comparable element types; tuples of different
//! arity have no impl at all, so comparing them is a build failure.
use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::tuple::{Cons, Nil};

impl PartialEq for Nil {
    #[inline]
    fn eq(&self, _other: &Nil) -> bool {
        true
    }
}

impl Eq for Nil {}

impl PartialOrd for Nil {
    #[inline]
    fn partial_cmp(&self, _other: &Nil) -> Option<Ordering> {
        Some(Ordering::Equal)
    }
}

impl Ord for Nil {
    #[inline]
    fn cmp(&self, _other: &Nil) -> Ordering {
        Ordering::Equal
    }
}

impl Hash for Nil {
    #[inline]
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

impl<Head, Tail, RHead, RTail> PartialEq<Cons<RHead, RTail>> for Cons<Head, Tail>
where
    Head: PartialEq<RHead>,
    Tail: PartialEq<RTail>,
{
    #[inline]
    fn eq(&self, other: &Cons<RHead, RTail>) -> bool {
        self.head == other.head && self.tail == other.tail
    }
}

impl<Head: Eq, Tail: Eq> Eq for Cons<Head, Tail> {}

impl<Head, Tail, RHead, RTail> PartialOrd<Cons<RHead, RTail>> for Cons<Head, Tail>
where
    Head: PartialOrd<RHead>,
    Tail: PartialOrd<RTail>,
{
    fn partial_cmp(&self, other: &Cons<RHead, RTail>) -> Option<Ordering> {
        match self.head.partial_cmp(&other.head) {
            Some(Ordering::Equal) => self.tail.partial_cmp(&other.tail),
            ord => ord,
        }
    }
}

impl<Head: Ord, Tail: Ord> Ord for Cons<Head, Tail> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.head
            .cmp(&other.head)
            .then_with(|| self.tail.cmp(&other.tail))
    }
}

impl<Head: Hash, Tail: Hash> Hash for Cons<Head, Tail> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.head.hash(state);
        self.tail.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use crate::{tuple, Tuple};

    #[test]
    fn structural_equality() {
        assert_eq!(tuple![1, 2], tuple![1, 2]);
        assert_ne!(tuple![1, 2], tuple![1, 3]);
        assert_eq!(tuple![], tuple![]);
    }

    #[test]
    fn lexicographic_order() {
        assert!(tuple![1, 2] < tuple![1, 3]);
        assert!(!(tuple![2, 1] < tuple![1, 9]));
        assert!(tuple![1, 2] <= tuple![1, 2]);
        assert!(tuple![2, 0] > tuple![1, 9]);
    }

    #[test]
    fn compare_across_element_types() {
        // `String: PartialEq<&str>` carries over position by position.
        assert_eq!(tuple![String::from("a"), 1], tuple!["a", 1]);
        assert_ne!(tuple![String::from("a"), 1], tuple!["b", 1]);
    }

    #[test]
    fn sorts_like_the_flat_spelling() {
        let mut ours = vec![tuple![2u8, 1u8], tuple![1, 9], tuple![1, 2], tuple![0, 0]];
        ours.sort();
        assert_eq!(
            ours,
            vec![tuple![0, 0], tuple![1, 2], tuple![1, 9], tuple![2, 1]]
        );
    }

    #[test]
    fn hash_agrees_with_equality() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        assert_eq!(hash_of(&tuple![1, "a"]), hash_of(&tuple![1, "a"]));
        assert_ne!(hash_of(&tuple![1, "a"]), hash_of(&tuple![2, "a"]));
    }

    #[quickcheck]
    fn ordering_matches_the_flat_spelling(a: (u8, i32, u64), b: (u8, i32, u64)) {
        let _ = env_logger::builder().is_test(true).try_init();

        let la: Tuple![u8, i32, u64] = a.into();
        let lb: Tuple![u8, i32, u64] = b.into();
        log::debug!("a = {a:?}, b = {b:?}");

        assert_eq!(la.partial_cmp(&lb), a.partial_cmp(&b));
        assert_eq!(la == lb, a == b);
    }
}
