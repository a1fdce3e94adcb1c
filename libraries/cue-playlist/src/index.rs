//! Position normalization and selectors
//!
//! Every position-based operation goes through [`normalize_index`], so
//! negative positions (counted from the end) and bounds errors behave the
//! same for `get`, `remove` and `move`.

use crate::error::{PlaylistError, Result};
use std::str::FromStr;

/// Normalize a possibly negative position against `len`
///
/// Returns the non-negative position in `[0, len)`.
///
/// # Errors
/// * `Empty` - `len` is zero
/// * `IndexOutOfRange` - `pos` is outside `[-len, len)`
pub fn normalize_index(pos: isize, len: usize) -> Result<usize> {
    if len == 0 {
        return Err(PlaylistError::Empty);
    }

    let out_of_range = PlaylistError::IndexOutOfRange { index: pos, len };
    let signed_len = isize::try_from(len).map_err(|_| out_of_range.clone())?;

    if !(-signed_len..signed_len).contains(&pos) {
        return Err(out_of_range);
    }

    let normalized = if pos < 0 { pos + signed_len } else { pos };
    usize::try_from(normalized).map_err(|_| out_of_range)
}

/// Canonical-order access key
///
/// Parsed from text as either an integer (`3`, `-1`) or a range in
/// `start:stop:step` form where every part is optional (`1:3`, `:2`, `::-1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Single position, negative counts from the end
    Index(isize),

    /// Stepped range with clamped bounds
    Range {
        start: Option<isize>,
        stop: Option<isize>,
        step: isize,
    },
}

impl Selector {
    /// Range covering every position
    pub fn full() -> Self {
        Selector::Range {
            start: None,
            stop: None,
            step: 1,
        }
    }

    /// Build a range selector, rejecting a zero step
    pub fn range(start: Option<isize>, stop: Option<isize>, step: isize) -> Result<Self> {
        if step == 0 {
            return Err(PlaylistError::InvalidSelector(
                "range step cannot be zero".to_string(),
            ));
        }
        Ok(Selector::Range { start, stop, step })
    }
}

impl From<isize> for Selector {
    fn from(pos: isize) -> Self {
        Selector::Index(pos)
    }
}

impl FromStr for Selector {
    type Err = PlaylistError;

    fn from_str(text: &str) -> Result<Self> {
        let text = text.trim();
        let invalid = || PlaylistError::InvalidSelector(text.to_string());

        if !text.contains(':') {
            return text.parse::<isize>().map(Selector::Index).map_err(|_| invalid());
        }

        let parts: Vec<&str> = text.split(':').collect();
        if parts.len() > 3 {
            return Err(invalid());
        }

        let bound = |part: &str| -> Result<Option<isize>> {
            let part = part.trim();
            if part.is_empty() {
                Ok(None)
            } else {
                part.parse::<isize>().map(Some).map_err(|_| invalid())
            }
        };

        let start = bound(parts[0])?;
        let stop = bound(parts[1])?;
        let step = match parts.get(2) {
            Some(part) => bound(part)?.unwrap_or(1),
            None => 1,
        };

        Selector::range(start, stop, step)
    }
}

/// Resolve a range against `len` into concrete positions
///
/// Bounds are clamped rather than rejected; a negative step walks backwards.
pub(crate) fn resolve_range(
    start: Option<isize>,
    stop: Option<isize>,
    step: isize,
    len: usize,
) -> Vec<usize> {
    let Ok(len) = isize::try_from(len) else {
        return Vec::new();
    };
    if step == 0 {
        return Vec::new();
    }

    let clamp = |value: isize, low: isize, high: isize| {
        let value = if value < 0 { value + len } else { value };
        value.clamp(low, high)
    };

    let mut positions = Vec::new();
    if step > 0 {
        let start = start.map_or(0, |s| clamp(s, 0, len));
        let stop = stop.map_or(len, |s| clamp(s, 0, len));
        let mut i = start;
        while i < stop {
            positions.push(i.unsigned_abs());
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
    } else {
        let start = start.map_or(len - 1, |s| clamp(s, -1, len - 1));
        let stop = stop.map_or(-1, |s| clamp(s, -1, len - 1));
        let mut i = start;
        while i > stop {
            positions.push(i.unsigned_abs());
            match i.checked_add(step) {
                Some(next) => i = next,
                None => break,
            }
        }
    }
    positions
}
