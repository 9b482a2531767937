//! Leading-padding removal and reference coordinate computation.

use crate::read::AlignedBase;
use crate::symbol::{count_blanks, present};

/// A read with its leading padding removed, paired with the matching reference suffix.
#[derive(Debug, PartialEq)]
pub struct Normalized<'a> {
    /// Number of leading blank columns dropped from the read
    pub offset: usize,
    /// 1-based leftmost reference position of the read
    pub position: usize,
    pub read: &'a [AlignedBase],
    pub reference: &'a [u8],
}

/// Strip the leading padding of `read` and locate it on `reference`.
///
/// Blank reference columns before the read start are insertions contributed by
/// other reads and do not advance the reference coordinate.
/// Returns `None` if the read has no present symbol at all.
pub fn normalize<'a>(
    read: &'a [AlignedBase],
    reference: &'a [u8],
    blank: u8,
) -> Option<Normalized<'a>> {
    let offset = read
        .iter()
        .position(|base| present(base.symbol, blank))?;

    let shift = offset.min(reference.len());
    let reference_insertions = count_blanks(&reference[..shift], blank);
    let position = (offset + 1).saturating_sub(reference_insertions).max(1);

    Some(Normalized {
        offset,
        position,
        read: &read[offset..],
        reference: &reference[shift..],
    })
}
