//! Play order bookkeeping
//!
//! The play order is a permutation of canonical track identities (positions
//! in the track list). Structural changes to the track list are expressed as
//! a partial mapping from old identity to new identity and applied with
//! [`remap`], which keeps the relative playback sequence intact.

/// Identity permutation `[0, 1, .., n-1]`
pub fn identity(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Apply an old-identity -> new-identity mapping to a play order
///
/// `mapping[old]` holds the new identity, or `None` when the identity was
/// removed. Identities past the end of the table are treated as removed.
/// Surviving entries keep their relative order.
pub fn remap(order: &[usize], mapping: &[Option<usize>]) -> Vec<usize> {
    order
        .iter()
        .filter_map(|&old| mapping.get(old).copied().flatten())
        .collect()
}

/// Mapping for deleting canonical position `removed` from a list of `len_before`
///
/// Identities below `removed` keep their number, identities above it shift
/// down by one, `removed` itself is dropped.
pub fn removal_mapping(len_before: usize, removed: usize) -> Vec<Option<usize>> {
    (0..len_before)
        .map(|old| match old.cmp(&removed) {
            std::cmp::Ordering::Less => Some(old),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(old - 1),
        })
        .collect()
}

/// Mapping induced by relocating canonical position `src` to `dst`
///
/// Splice semantics: remove at `src`, then insert at `dst`; everything in
/// between shifts by one toward `src`.
pub fn move_mapping(len: usize, src: usize, dst: usize) -> Vec<Option<usize>> {
    let mut relocated = identity(len);
    let moved = relocated.remove(src);
    relocated.insert(dst, moved);

    let mut mapping = vec![None; len];
    for (new_id, old_id) in relocated.into_iter().enumerate() {
        mapping[old_id] = Some(new_id);
    }
    mapping
}

/// Check that `order` is exactly a permutation of `0..len`
pub fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &id in order {
        match seen.get_mut(id) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
