//! Heap's swap-based permutation enumeration.
//!
//! # Algorithm
//!
//! To permute a prefix of length `k`, for each `i` in `0..k`:
//!
//! ```text
//! permute(k - 1)
//! if k is even: swap(i, k - 1)
//! else:         swap(0, k - 1)
//! ```
//!
//! A prefix of length ≤ 1 is a complete permutation and is visited. Every
//! ordering is produced exactly once, in place, so memory stays O(n).
//! The swap rule fixes the visit order; for `[0, 1, 2]` it is
//! `012, 102, 201, 021, 120, 210`.
//!
//! # Complexity
//!
//! O(n!) visits, O(n) recursion depth.
//!
//! # Reference
//!
//! Heap, B.R. (1963). "Permutations by interchanges", *The Computer
//! Journal* 6(3), 293-298.

use std::ops::ControlFlow;

/// Visits every permutation of `items`, in place.
///
/// The visitor sees the buffer after each permutation is formed and may
/// stop the enumeration by returning [`ControlFlow::Break`]. An empty
/// slice has exactly one (empty) permutation.
///
/// On completion `items` holds some permutation of its original contents,
/// not necessarily the starting order.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use u_tour::permutation::for_each_permutation;
///
/// let mut items = ['a', 'b', 'c'];
/// let mut seen = Vec::new();
/// let flow: ControlFlow<()> = for_each_permutation(&mut items, |p| {
///     seen.push(p.iter().collect::<String>());
///     ControlFlow::Continue(())
/// });
/// assert!(flow.is_continue());
/// assert_eq!(seen, ["abc", "bac", "cab", "acb", "bca", "cba"]);
/// ```
pub fn for_each_permutation<T, B, F>(items: &mut [T], mut visit: F) -> ControlFlow<B>
where
    F: FnMut(&[T]) -> ControlFlow<B>,
{
    let k = items.len();
    permute(items, k, &mut visit)
}

fn permute<T, B, F>(items: &mut [T], k: usize, visit: &mut F) -> ControlFlow<B>
where
    F: FnMut(&[T]) -> ControlFlow<B>,
{
    if k <= 1 {
        return visit(items);
    }
    for i in 0..k {
        permute(items, k - 1, visit)?;
        if k % 2 == 0 {
            items.swap(i, k - 1);
        } else {
            items.swap(0, k - 1);
        }
    }
    ControlFlow::Continue(())
}

/// Number of permutations of `n` items, or `None` on `u64` overflow.
///
/// ```
/// use u_tour::permutation::permutation_count;
///
/// assert_eq!(permutation_count(0), Some(1));
/// assert_eq!(permutation_count(5), Some(120));
/// assert_eq!(permutation_count(21), None);
/// ```
pub fn permutation_count(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn collect(n: usize) -> Vec<Vec<usize>> {
        let mut items: Vec<usize> = (0..n).collect();
        let mut out = Vec::new();
        let _: ControlFlow<()> = for_each_permutation(&mut items, |p| {
            out.push(p.to_vec());
            ControlFlow::Continue(())
        });
        out
    }

    #[test]
    fn test_empty_has_one_permutation() {
        assert_eq!(collect(0), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_single() {
        assert_eq!(collect(1), vec![vec![0]]);
    }

    #[test]
    fn test_counts_and_distinct() {
        for n in 0..=6 {
            let perms = collect(n);
            let expected = permutation_count(n).expect("small") as usize;
            assert_eq!(perms.len(), expected, "n = {n}");
            let distinct: HashSet<_> = perms.iter().collect();
            assert_eq!(distinct.len(), expected, "n = {n}");
        }
    }

    #[test]
    fn test_order_three() {
        let expected = vec![
            vec![0, 1, 2],
            vec![1, 0, 2],
            vec![2, 0, 1],
            vec![0, 2, 1],
            vec![1, 2, 0],
            vec![2, 1, 0],
        ];
        assert_eq!(collect(3), expected);
    }

    #[test]
    fn test_order_four() {
        let rendered: Vec<String> = collect(4)
            .iter()
            .map(|p| p.iter().map(|d| d.to_string()).collect())
            .collect();
        let expected = [
            "0123", "1023", "2013", "0213", "1203", "2103", "3120", "1320", "2310", "3210",
            "1230", "2130", "3021", "0321", "2301", "3201", "0231", "2031", "3012", "0312",
            "1302", "3102", "0132", "1032",
        ];
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_first_permutation_is_input_order() {
        let mut items = ["x", "y", "z", "w"];
        let mut first = None;
        let _: ControlFlow<()> = for_each_permutation(&mut items, |p| {
            first.get_or_insert_with(|| p.to_vec());
            ControlFlow::Continue(())
        });
        assert_eq!(first, Some(vec!["x", "y", "z", "w"]));
    }

    #[test]
    fn test_break_stops_early() {
        let mut items = [0, 1, 2, 3];
        let mut visits = 0;
        let flow = for_each_permutation(&mut items, |p| {
            visits += 1;
            if p == [2, 0, 1, 3] {
                ControlFlow::Break(visits)
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(flow, ControlFlow::Break(3));
        assert_eq!(visits, 3);
    }

    #[test]
    fn test_permutation_count() {
        assert_eq!(permutation_count(1), Some(1));
        assert_eq!(permutation_count(4), Some(24));
        assert_eq!(permutation_count(20), Some(2_432_902_008_176_640_000));
        assert_eq!(permutation_count(21), None);
    }
}
