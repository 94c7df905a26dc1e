use tracing::{debug, trace};

use crate::{Error, Item, Result, empty, sorted};

/// Parses a [cpuset][crate] and returns the numeric items in ascending order.
///
/// Duplicates are preserved: `0,1,1,3` parses to `[0, 1, 1, 3]`.
///
/// An empty string is valid input and returns an empty result.
///
/// See [package-level documentation][crate] for details.
///
/// # Errors
///
/// Returns an error if any comma-separated item is not a single integer or an ascending
/// `start-end` range. This includes empty items such as those produced by `,,`. A range whose
/// values cannot be allocated (e.g. `0-9223372036854775807`) is also an error.
pub fn parse(cpuset: &str) -> Result<Vec<Item>> {
    if cpuset.is_empty() {
        return Ok(empty());
    }

    let mut cpus = empty();

    for item in cpuset.split(',') {
        if let Err(error) = parse_item(item, &mut cpus) {
            debug!(cpuset, %error, "failed to parse cpuset");
            return Err(error);
        }
    }

    let cpus = sorted(cpus);

    trace!(cpuset, count = cpus.len(), "parsed cpuset");

    Ok(cpus)
}

fn parse_item(item: &str, cpus: &mut Vec<Item>) -> Result<()> {
    let mut bounds = item.split('-');

    match (bounds.next(), bounds.next(), bounds.next()) {
        (Some(single), None, None) => {
            cpus.push(parse_integer(single, item)?);
        }
        (Some(start), Some(end), None) => {
            let start = parse_integer(start, item)?;
            let end = parse_integer(end, item)?;

            if start > end {
                return Err(Error::ReversedRange {
                    item: item.to_string(),
                    start,
                    end,
                });
            }

            // The span of i64 values always fits u64, but not necessarily usize.
            let len = usize::try_from(end.abs_diff(start))
                .ok()
                .and_then(|span| span.checked_add(1));

            let reserved = len.is_some_and(|len| cpus.try_reserve(len).is_ok());

            if !reserved {
                return Err(Error::RangeTooLarge {
                    item: item.to_string(),
                    start,
                    end,
                });
            }

            cpus.extend(start..=end);
        }
        _ => {
            return Err(Error::MalformedInterval {
                item: item.to_string(),
            });
        }
    }

    Ok(())
}

fn parse_integer(token: &str, item: &str) -> Result<Item> {
    token
        .parse::<Item>()
        .map_err(|source| Error::InvalidInteger {
            token: token.to_string(),
            item: item.to_string(),
            source,
        })
}
