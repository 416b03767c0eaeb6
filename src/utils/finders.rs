use log::trace;
use std::fmt::Debug;

/// Return the first element of `items` that satisfies `predicate`.
///
/// The scan stops at the first match, so the predicate is never called on
/// later elements. Returns `None` when no element matches.
pub fn find_element<T, F>(items: &[T], mut predicate: F) -> Option<&T>
where
    T: Debug,
    F: FnMut(&T) -> bool,
{
    items.iter().find(|item| {
        let matched = predicate(*item);
        trace!("find_element: {:?} -> {}", item, matched);
        matched
    })
}
