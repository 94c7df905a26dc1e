use std::fmt::{self, Display};

use itertools::Itertools;

use crate::{Item, sorted};

/// Emits a [cpuset][crate] string from the given numeric items.
///
/// The input does not need to be sorted. It is copied and sorted before processing, so the
/// caller's own collection is never modified (pass `values.iter().copied()` to keep ownership).
///
/// Consecutive values are compacted into `start-end` ranges and every other value is emitted on
/// its own. Duplicates are not removed: a duplicate does not interrupt a range but it does count
/// as an additional value, so `[1, 1]` emits `1-1`.
///
/// See [package-level documentation][crate] for details.
///
/// # Example
///
/// ```
/// assert_eq!(cpuset::unparse([0, 1, 2, 3]), "0-3");
/// assert_eq!(cpuset::unparse([5, 1, 3]), "1,3,5");
/// assert_eq!(cpuset::unparse([]), "");
/// ```
#[must_use]
pub fn unparse(values: impl IntoIterator<Item = Item>) -> String {
    let cpus = sorted(values);
    let mut cpus = cpus.into_iter();

    let Some(first) = cpus.next() else {
        return String::new();
    };

    let mut atoms = Vec::new();
    let mut current = Atom::new(first);

    for cpu in cpus {
        // Sorted input means cpu >= current.last, so anything above 1 is a gap.
        if cpu.abs_diff(current.last) > 1 {
            atoms.push(current);
            current = Atom::new(cpu);
        } else {
            current.extend(cpu);
        }
    }

    atoms.push(current);

    atoms.iter().join(",")
}

/// One comma-separated element of the output: a run of values with no gaps wider than 1.
#[derive(Clone, Copy, Debug)]
struct Atom {
    first: Item,
    last: Item,

    // Counts duplicates too, so a run of [n, n] is still a range.
    is_range: bool,
}

impl Atom {
    const fn new(cpu: Item) -> Self {
        Self {
            first: cpu,
            last: cpu,
            is_range: false,
        }
    }

    fn extend(&mut self, cpu: Item) {
        self.last = cpu;
        self.is_range = true;
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_range {
            write!(f, "{}-{}", self.first, self.last)
        } else {
            write!(f, "{}", self.first)
        }
    }
}
