use std::fmt::{self, Display};
use std::iter::Copied;
use std::str::FromStr;
use std::{slice, vec};

use crate::{Error, Item, parse, sorted, unparse};

/// An owned cpuset value: a sequence of processor indexes kept in ascending order.
///
/// This is a typed alternative to working with [`parse()`] and [`unparse()`] directly, suitable
/// for fields of configuration structures. It converts from text via [`FromStr`] and back to
/// text via [`Display`].
///
/// Like the functions it wraps, a `CpuSet` does not remove duplicates.
///
/// # Example
///
/// ```
/// use cpuset::CpuSet;
///
/// let cpus: CpuSet = "0-2,8".parse().unwrap();
///
/// assert_eq!(cpus.len(), 4);
/// assert!(cpus.contains(8));
/// assert_eq!(cpus.to_string(), "0-2,8");
///
/// let from_values = CpuSet::from(vec![8, 2, 1, 0]);
/// assert_eq!(from_values, cpus);
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct CpuSet {
    cpus: Vec<Item>,
}

impl CpuSet {
    /// Creates an empty cpuset.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self { cpus: Vec::new() }
    }

    /// The number of values in the set, counting duplicates.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.cpus.len()
    }

    /// Whether the set contains no values.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cpus.is_empty()
    }

    /// Whether the given value is present in the set.
    #[must_use]
    pub fn contains(&self, cpu: Item) -> bool {
        self.cpus.binary_search(&cpu).is_ok()
    }

    /// The values in ascending order.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[Item] {
        &self.cpus
    }

    /// Iterates over the values in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Item> + '_ {
        self.cpus.iter().copied()
    }

    /// Consumes the set and returns the values in ascending order.
    #[must_use]
    #[inline]
    pub fn into_vec(self) -> Vec<Item> {
        self.cpus
    }
}

impl FromStr for CpuSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // parse() already returns sorted values.
        parse(s).map(|cpus| Self { cpus })
    }
}

impl Display for CpuSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&unparse(self.iter()))
    }
}

impl From<Vec<Item>> for CpuSet {
    fn from(value: Vec<Item>) -> Self {
        Self {
            cpus: sorted(value),
        }
    }
}

impl From<CpuSet> for Vec<Item> {
    #[inline]
    #[cfg_attr(test, mutants::skip)] // Trivial forwarder to into_vec.
    fn from(value: CpuSet) -> Self {
        value.into_vec()
    }
}

impl FromIterator<Item> for CpuSet {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self {
            cpus: sorted(iter),
        }
    }
}

impl AsRef<[Item]> for CpuSet {
    #[inline]
    #[cfg_attr(test, mutants::skip)] // Trivial.
    fn as_ref(&self) -> &[Item] {
        &self.cpus
    }
}

impl IntoIterator for CpuSet {
    type IntoIter = vec::IntoIter<Item>;
    type Item = Item;

    /// Consumes the set and returns an iterator over the values in ascending order.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.cpus.into_iter()
    }
}

impl<'a> IntoIterator for &'a CpuSet {
    type IntoIter = Copied<slice::Iter<'a, Item>>;
    type Item = Item;

    /// Returns an iterator over the values in ascending order.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.cpus.iter().copied()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;
    use std::hash::Hash;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(CpuSet: Send, Sync, Debug, Clone, Default, Eq, Hash, FromStr, Display);

    #[test]
    fn new_is_empty() {
        let cpus = CpuSet::new();

        assert!(cpus.is_empty());
        assert_eq!(cpus.len(), 0);
        assert_eq!(cpus.to_string(), "");
        assert_eq!(cpus, CpuSet::default());
    }

    #[test]
    fn from_str_parses() {
        let cpus: CpuSet = "3,0-1".parse().unwrap();

        assert_eq!(cpus.as_slice(), &[0, 1, 3]);
        assert_eq!(cpus.len(), 3);
        assert!(!cpus.is_empty());
    }

    #[test]
    fn from_str_reports_errors() {
        let error = "1,2-4-6".parse::<CpuSet>().unwrap_err();

        assert!(matches!(error, Error::MalformedInterval { .. }));
    }

    #[test]
    fn display_emits_canonical_text() {
        let cpus: CpuSet = "7,0,1,2,3,9,10,11".parse().unwrap();

        assert_eq!(cpus.to_string(), "0-3,7,9-11");
        assert_eq!(format!("cpus={cpus}"), "cpus=0-3,7,9-11");
    }

    #[test]
    fn from_vec_sorts() {
        let cpus = CpuSet::from(vec![5, 1, 3, 1]);

        assert_eq!(cpus.as_slice(), &[1, 1, 3, 5]);
    }

    #[test]
    fn collect_sorts() {
        let cpus: CpuSet = [9, 2, 4].into_iter().collect();

        assert_eq!(cpus.into_vec(), vec![2, 4, 9]);
    }

    #[test]
    fn contains_finds_values() {
        let cpus: CpuSet = "0-3,8".parse().unwrap();

        assert!(cpus.contains(0));
        assert!(cpus.contains(3));
        assert!(cpus.contains(8));
        assert!(!cpus.contains(4));
        assert!(!cpus.contains(-1));
    }

    #[test]
    fn iteration_is_ascending() {
        let cpus = CpuSet::from(vec![3, 2, 1]);

        assert_eq!(cpus.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!((&cpus).into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        let slice: &[Item] = cpus.as_ref();
        assert_eq!(slice, &[1, 2, 3]);

        let values: Vec<Item> = cpus.clone().into();
        assert_eq!(values, vec![1, 2, 3]);

        assert_eq!(cpus.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn round_trips_through_text() {
        let original = CpuSet::from(vec![0, 1, 2, 16, 18, 19]);

        let text = original.to_string();
        let parsed: CpuSet = text.parse().unwrap();

        assert_eq!(text, "0-2,16,18-19");
        assert_eq!(parsed, original);
    }
}
