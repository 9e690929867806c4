//! Collection checks
//!
//! Covers arrays, slices, `Vec`, `VecDeque`, `LinkedList`, `BinaryHeap`, the
//! std sets and maps, references to any of them, and `Option`s of them (where
//! `None` is the null state). Maps count entries and search by key.

use std::any::type_name;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use crate::core::{ArgumentContext, EnsureResult, Nullable};
use crate::ensure;

// ============================================================================
// COLLECTION ABSTRACTION
// ============================================================================

/// A finite container that can report its size and search for an item.
pub trait Collection {
    /// The element type, or the key type for maps.
    type Item;

    /// Word used in default messages: `"array"` for contiguous sequences,
    /// `"collection"` for everything else.
    const KIND: &'static str;

    /// Number of elements.
    fn count(&self) -> usize;

    /// Whether `item` is an element. Linear for sequences.
    fn has(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq;
}

impl<T> Collection for [T] {
    type Item = T;
    const KIND: &'static str = "array";

    fn count(&self) -> usize {
        self.len()
    }

    fn has(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == item)
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    const KIND: &'static str = "array";

    fn count(&self) -> usize {
        N
    }

    fn has(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().has(item)
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    const KIND: &'static str = "array";

    fn count(&self) -> usize {
        self.len()
    }

    fn has(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().has(item)
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;
    const KIND: &'static str = "collection";

    fn count(&self) -> usize {
        self.len()
    }

    fn has(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == item)
    }
}

impl<T> Collection for LinkedList<T> {
    type Item = T;
    const KIND: &'static str = "collection";

    fn count(&self) -> usize {
        self.len()
    }

    fn has(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains(item)
    }
}

impl<T> Collection for BinaryHeap<T> {
    type Item = T;
    const KIND: &'static str = "collection";

    fn count(&self) -> usize {
        self.len()
    }

    fn has(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == item)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Collection for HashSet<T, S> {
    type Item = T;
    const KIND: &'static str = "collection";

    fn count(&self) -> usize {
        self.len()
    }

    fn has(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains(item)
    }
}

impl<T: Ord> Collection for BTreeSet<T> {
    type Item = T;
    const KIND: &'static str = "collection";

    fn count(&self) -> usize {
        self.len()
    }

    fn has(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains(item)
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Item = K;
    const KIND: &'static str = "collection";

    fn count(&self) -> usize {
        self.len()
    }

    fn has(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        self.contains_key(key)
    }
}

impl<K: Ord, V> Collection for BTreeMap<K, V> {
    type Item = K;
    const KIND: &'static str = "collection";

    fn count(&self) -> usize {
        self.len()
    }

    fn has(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        self.contains_key(key)
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    type Item = C::Item;
    const KIND: &'static str = C::KIND;

    fn count(&self) -> usize {
        (**self).count()
    }

    fn has(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        (**self).has(item)
    }
}

/// `None` counts as empty, but checks reject it as null before looking.
impl<C: Collection> Collection for Option<C> {
    type Item = C::Item;
    const KIND: &'static str = C::KIND;

    fn count(&self) -> usize {
        self.as_ref().map_or(0, Collection::count)
    }

    fn has(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.as_ref().is_some_and(|collection| collection.has(item))
    }
}

// ============================================================================
// CHECKS
// ============================================================================

/// Checks for [`Collection`] values.
///
/// # Examples
///
/// ```rust,ignore
/// use ensured::prelude::*;
///
/// let names = vec!["Hello"];
/// let names = that!(names).is_not_empty()?;
/// let names = that!(names).contains("Hello")?;
/// ```
pub trait CollectionChecks: Sized {
    /// The collection being checked.
    type Target: Collection;

    /// Requires at least one element.
    ///
    /// # Errors
    ///
    /// Fails with `"Expected the array to have an item."` (or `collection`)
    /// when empty, or as null when the collection is absent.
    fn is_not_empty(self) -> EnsureResult<Self::Target>;

    /// Requires exactly `count` elements.
    ///
    /// # Errors
    ///
    /// Fails when the element count differs, or as null when the collection
    /// is absent. Arrays report `"... it has <n> items."`, other collections
    /// `"... it has <n>."`.
    fn count_is(self, count: usize) -> EnsureResult<Self::Target>;

    /// Requires `item` to be an element.
    ///
    /// # Errors
    ///
    /// A null `item` fails as a null argument named `"value"`. Otherwise
    /// fails when no element equals `item`, or for maps when no key does.
    fn contains(self, item: <Self::Target as Collection>::Item) -> EnsureResult<Self::Target>
    where
        <Self::Target as Collection>::Item: PartialEq + Nullable + Debug;
}

impl<C> CollectionChecks for ArgumentContext<C>
where
    C: Collection + Nullable,
{
    type Target = C;

    fn is_not_empty(self) -> EnsureResult<C> {
        self.check(
            |collection| collection.count() > 0,
            |_| format!("Expected the {} to have an item.", C::KIND),
            false,
        )
    }

    fn count_is(self, count: usize) -> EnsureResult<C> {
        // usize is never null; the guard mirrors every other auxiliary argument.
        let count = ensure::require(count, Some(Cow::Borrowed("count")), None)?;
        self.check(
            |collection| collection.count() == count,
            |collection| match C::KIND {
                "array" => format!(
                    "Expected the array to have <{count}> items, it has <{}> items.",
                    collection.count()
                ),
                kind => format!(
                    "Expected the {kind} to have <{count}> items, it has <{}>.",
                    collection.count()
                ),
            },
            false,
        )
    }

    fn contains(self, item: C::Item) -> EnsureResult<C>
    where
        C::Item: PartialEq + Nullable + Debug,
    {
        let item = ensure::require(item, Some(Cow::Borrowed("value")), None)?;
        self.check(
            |collection| collection.has(&item),
            |_| match C::KIND {
                "array" => format!("Expected the array to contain <{item:?}>"),
                kind => format!(
                    "Expected to find <{item:?}> in the {kind} of <{}>",
                    type_name::<C::Item>()
                ),
            },
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ensure::{that, that_named};

    #[test]
    fn test_is_not_empty() {
        assert_eq!(that(vec!["Hello"]).is_not_empty(), Ok(vec!["Hello"]));

        let err = that(Vec::<&str>::new()).is_not_empty().unwrap_err();
        assert!(err.is_failed_condition());
        assert_eq!(err.message(), "Expected the array to have an item.");
    }

    #[test]
    fn test_is_not_empty_on_set_uses_collection_wording() {
        let err = that(BTreeSet::<i32>::new()).is_not_empty().unwrap_err();
        assert_eq!(err.message(), "Expected the collection to have an item.");
    }

    #[test]
    fn test_count_is() {
        assert_eq!(that(["Hello"]).count_is(1), Ok(["Hello"]));

        let err = that_named(Vec::<i32>::new(), "items").count_is(1).unwrap_err();
        assert_eq!(
            err.message(),
            "Expected the array to have <1> items, it has <0> items."
        );
        assert_eq!(err.param_name(), Some("items"));
    }

    #[test]
    fn test_contains() {
        let items = [1, 2, 3];
        assert!(that(&items[..]).contains(2).is_ok());

        let err = that(&items[..]).contains(7).unwrap_err();
        assert_eq!(err.message(), "Expected the array to contain <7>");
    }

    #[test]
    fn test_contains_null_item() {
        let err = that(vec![Some(1)]).contains(None).unwrap_err();
        assert!(err.is_null_argument());
        assert_eq!(err.param_name(), Some("value"));
    }

    #[test]
    fn test_absent_collection_is_null() {
        let err = that_named(None::<Vec<i32>>, "items")
            .is_not_empty()
            .unwrap_err();
        assert!(err.is_null_argument());
        assert_eq!(err.param_name(), Some("items"));
    }

    #[test]
    fn test_hash_set_and_deque() {
        let set: HashSet<_> = [1, 2].into_iter().collect();
        assert!(that(&set).contains(1).is_ok());

        let deque: VecDeque<_> = [1, 2].into_iter().collect();
        assert!(that(deque).count_is(2).is_ok());
    }

    #[test]
    fn test_collection_count_wording() {
        let set: BTreeSet<_> = [1, 2].into_iter().collect();
        let err = that(&set).count_is(3).unwrap_err();
        assert_eq!(
            err.message(),
            "Expected the collection to have <3> items, it has <2>."
        );
    }

    #[test]
    fn test_collection_contains_wording() {
        let deque: VecDeque<i32> = [1, 2].into_iter().collect();
        let err = that(&deque).contains(7).unwrap_err();
        assert_eq!(
            err.message(),
            "Expected to find <7> in the collection of <i32>"
        );
    }

    #[test]
    fn test_hash_map_counts_entries_and_finds_keys() {
        let ports: HashMap<&str, u16> = [("http", 80), ("https", 443)].into_iter().collect();
        assert!(that(&ports).is_not_empty().is_ok());
        assert!(that(&ports).count_is(2).is_ok());
        assert!(that(&ports).contains("https").is_ok());

        let err = that_named(&ports, "ports").contains("ftp").unwrap_err();
        assert!(err.is_failed_condition());
        assert_eq!(err.param_name(), Some("ports"));

        let err = that(HashMap::<u8, u8>::new()).is_not_empty().unwrap_err();
        assert_eq!(err.message(), "Expected the collection to have an item.");
    }

    #[test]
    fn test_btree_map_counts_entries_and_finds_keys() {
        let limits: BTreeMap<u32, &str> = [(1, "low"), (9, "high")].into_iter().collect();
        assert_eq!(that(&limits).count_is(2).map(BTreeMap::len), Ok(2));
        assert!(that(&limits).contains(9).is_ok());

        let err = that(&limits).contains(5).unwrap_err();
        assert_eq!(
            err.message(),
            "Expected to find <5> in the collection of <u32>"
        );

        let err = that(limits).count_is(1).unwrap_err();
        assert_eq!(
            err.message(),
            "Expected the collection to have <1> items, it has <2>."
        );
    }

    #[test]
    fn test_linked_list() {
        let list: LinkedList<i32> = [4, 8].into_iter().collect();
        assert!(that(&list).contains(8).is_ok());
        assert!(that(&list).count_is(2).is_ok());

        let err = that(LinkedList::<i32>::new()).is_not_empty().unwrap_err();
        assert_eq!(err.message(), "Expected the collection to have an item.");
    }

    #[test]
    fn test_binary_heap() {
        let heap: BinaryHeap<i32> = [3, 1, 2].into_iter().collect();
        assert!(that(&heap).contains(1).is_ok());
        assert!(that(&heap).count_is(3).is_ok());

        let err = that(&heap).contains(9).unwrap_err();
        assert_eq!(
            err.message(),
            "Expected to find <9> in the collection of <i32>"
        );

        let err = that_named(None::<BinaryHeap<i32>>, "queue")
            .is_not_empty()
            .unwrap_err();
        assert!(err.is_null_argument());
        assert_eq!(err.param_name(), Some("queue"));
    }
}
