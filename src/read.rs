/// One column of a read: its symbol and the quality it was annotated with, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedBase {
    pub symbol: u8,
    pub quality: Option<u8>,
}

impl AlignedBase {
    pub fn new(symbol: u8, quality: Option<u8>) -> Self {
        Self { symbol, quality }
    }

    pub fn unqualified(symbol: u8) -> Self {
        Self {
            symbol,
            quality: None,
        }
    }
}

/// A read in alignment column space, with its 1-based input index.
#[derive(Debug, Clone, PartialEq)]
pub struct Read {
    pub index: usize,
    pub bases: Vec<AlignedBase>,
}

impl Read {
    pub fn new(index: usize, bases: Vec<AlignedBase>) -> Self {
        Self { index, bases }
    }

    pub fn symbols(&self) -> Vec<u8> {
        symbols(&self.bases)
    }
}

#[cfg(test)]
impl Read {
    /// Build an unqualified read from a gapped string such as `-CGTACCT`.
    pub fn from_symbols(index: usize, symbols: &[u8]) -> Self {
        Self::new(
            index,
            symbols.iter().copied().map(AlignedBase::unqualified).collect(),
        )
    }
}

pub fn symbols(bases: &[AlignedBase]) -> Vec<u8> {
    bases.iter().map(|base| base.symbol).collect()
}
