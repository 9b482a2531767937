//! Column classification and run-length CIGAR encoding.

use crate::symbol::present;
use std::fmt;

/// Alignment operation emitted for a single column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Match,
    Insert,
    Delete,
}

impl Operation {
    pub fn letter(&self) -> char {
        match self {
            Operation::Match => 'M',
            Operation::Insert => 'I',
            Operation::Delete => 'D',
        }
    }

    pub fn consumes_read(&self) -> bool {
        matches!(self, Operation::Match | Operation::Insert)
    }

    pub fn consumes_reference(&self) -> bool {
        matches!(self, Operation::Match | Operation::Delete)
    }
}

/// Classify one (read, reference) column.
///
/// Returns `None` for a column that is blank on both sides; such columns are
/// skipped and never produce CIGAR output.
pub fn classify(read_symbol: u8, reference_symbol: u8, blank: u8) -> Option<Operation> {
    match (present(read_symbol, blank), present(reference_symbol, blank)) {
        (true, true) => Some(Operation::Match),
        (true, false) => Some(Operation::Insert),
        (false, true) => Some(Operation::Delete),
        (false, false) => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CigarRun {
    len: u32,
    op: Operation,
}

impl CigarRun {
    pub fn new(len: u32, op: Operation) -> Self {
        debug_assert!(len > 0, "CIGAR runs cannot be empty");
        Self { len, op }
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn op(&self) -> Operation {
        self.op
    }

    pub fn read_delta(&self) -> u32 {
        if self.op.consumes_read() {
            self.len
        } else {
            0
        }
    }

    pub fn reference_delta(&self) -> u32 {
        if self.op.consumes_reference() {
            self.len
        } else {
            0
        }
    }
}

impl fmt::Display for CigarRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.len, self.op.letter())
    }
}

/// Run-length encode the operations of a read against the reference.
///
/// Columns are visited in lockstep over the common length of the two
/// sequences. Skipped columns are removed before grouping, so runs of the same
/// operation separated only by blank/blank columns collapse into one run.
pub fn encode(read: &[u8], reference: &[u8], blank: u8) -> Vec<CigarRun> {
    let mut runs: Vec<CigarRun> = Vec::new();
    let operations = read
        .iter()
        .zip(reference.iter())
        .filter_map(|(&read_symbol, &reference_symbol)| {
            classify(read_symbol, reference_symbol, blank)
        });

    for op in operations {
        match runs.last_mut() {
            Some(last) if last.op == op => last.len += 1,
            _ => runs.push(CigarRun::new(1, op)),
        }
    }

    runs
}

pub fn format_cigar(runs: &[CigarRun]) -> String {
    runs.iter().map(|run| run.to_string()).collect()
}

/// CIGAR string of a read against the reference; empty when nothing aligns.
pub fn cigar_string(read: &[u8], reference: &[u8], blank: u8) -> String {
    format_cigar(&encode(read, reference, blank))
}
