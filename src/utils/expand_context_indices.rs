use crate::types::SentenceIndex;
use crate::Error;
use std::collections::BTreeSet;

/// Sentinel window size meaning "expand all the way to the bound".
pub const EXPAND_TO_BOUND: i64 = -1;

/// Expands every index in `indices` by up to `before` preceding and `after` following indices.
///
/// A window size of `-1` expands to the bound on that side. The bounds are `min_int` / `max_int`
/// when given, otherwise the smallest / largest index present in `indices`. Explicit windows never
/// reach below `min_int` (or `0`) nor above `max_int` (when given).
///
/// The result is deduplicated and sorted ascending. An empty input yields an empty output.
///
/// # Errors
/// - `Error::InvalidArgument` if `before` or `after` is below `-1`.
/// - `Error::InvalidArgument` if `indices` contains a negative number.
///
/// # Example
/// ```
/// use transcript_sniffer::utils::expand_context_indices;
///
/// assert_eq!(expand_context_indices(&[2], 1, 1, Some(0), Some(4)).unwrap(), vec![1, 2, 3]);
/// assert_eq!(expand_context_indices(&[2], -1, -1, Some(0), Some(4)).unwrap(), vec![0, 1, 2, 3, 4]);
/// assert_eq!(expand_context_indices(&[2], 0, 0, Some(0), Some(4)).unwrap(), vec![2]);
/// ```
pub fn expand_context_indices(
    indices: &[i64],
    before: i64,
    after: i64,
    min_int: Option<i64>,
    max_int: Option<i64>,
) -> Result<Vec<SentenceIndex>, Error> {
    if before < EXPAND_TO_BOUND {
        return Err(Error::InvalidArgument(format!(
            "before must be -1 or a non-negative integer, got {}",
            before
        )));
    }
    if after < EXPAND_TO_BOUND {
        return Err(Error::InvalidArgument(format!(
            "after must be -1 or a non-negative integer, got {}",
            after
        )));
    }
    if let Some(negative) = indices.iter().find(|&&idx| idx < 0) {
        return Err(Error::InvalidArgument(format!(
            "indices must be non-negative, got {}",
            negative
        )));
    }

    let (Some(&smallest), Some(&largest)) = (indices.iter().min(), indices.iter().max()) else {
        return Ok(vec![]);
    };

    let explicit_floor = min_int.unwrap_or(0).max(0);

    let mut expanded: BTreeSet<i64> = BTreeSet::new();

    for &idx in indices {
        let start = if before == EXPAND_TO_BOUND {
            min_int.unwrap_or(smallest).max(0)
        } else {
            idx.saturating_sub(before).max(explicit_floor)
        };

        let end = if after == EXPAND_TO_BOUND {
            max_int.unwrap_or(largest)
        } else {
            match max_int {
                Some(max_int) => idx.saturating_add(after).min(max_int),
                None => idx.saturating_add(after),
            }
        };

        // The matched index itself is always kept, even when it lies outside explicit bounds
        expanded.insert(idx);
        expanded.extend(start..=end);
    }

    Ok(expanded.into_iter().map(|idx| idx as SentenceIndex).collect())
}
