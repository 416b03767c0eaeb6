//! Copy-then-modify list helpers.
//!
//! Both functions take the caller's list by slice and build a fresh `Vec`,
//! so the input is never mutated and the result shares no storage with it.

/// Return a new list with `item` appended.
pub fn add<T: Clone>(list: &[T], item: T) -> Vec<T> {
    let mut updated = Vec::with_capacity(list.len() + 1);
    updated.extend_from_slice(list);
    updated.push(item);
    updated
}

/// Return a new list with the first occurrence of `item` removed.
///
/// Returns `None` when `item` is not in the list rather than an unchanged
/// copy. Callers that want the list back regardless can use
/// `remove(list, item).unwrap_or_else(|| list.to_vec())`.
pub fn remove<T, Q>(list: &[T], item: &Q) -> Option<Vec<T>>
where
    T: Clone + PartialEq<Q>,
    Q: ?Sized,
{
    let index = list.iter().position(|existing| existing == item)?;
    let mut updated = list.to_vec();
    updated.remove(index);
    Some(updated)
}
