//! Base symbols and the blank (gap) symbol.

use crate::config::Config;

/// True iff `symbol` is an aligned base rather than the blank.
#[inline]
pub fn present(symbol: u8, blank: u8) -> bool {
    symbol != blank
}

#[inline]
pub fn missing(symbol: u8, blank: u8) -> bool {
    !present(symbol, blank)
}

/// True for alphabet symbols and the blank.
pub fn is_legal(symbol: u8, config: &Config) -> bool {
    symbol == config.blank || config.alphabet.contains(&symbol)
}

pub fn remove_blanks(sequence: &[u8], blank: u8) -> Vec<u8> {
    sequence
        .iter()
        .copied()
        .filter(|&symbol| present(symbol, blank))
        .collect()
}

pub fn count_blanks(sequence: &[u8], blank: u8) -> usize {
    sequence
        .iter()
        .filter(|&&symbol| missing(symbol, blank))
        .count()
}

/// Drop trailing blanks; they never contribute reference coordinates.
pub fn trim_trailing_blanks(sequence: &[u8], blank: u8) -> &[u8] {
    let end = sequence
        .iter()
        .rposition(|&symbol| present(symbol, blank))
        .map_or(0, |pos| pos + 1);
    &sequence[..end]
}
