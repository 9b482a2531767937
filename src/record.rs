use crate::cigar::{encode, format_cigar};
use crate::config::Config;
use crate::error::{Result, SammockError};
use crate::normalize::normalize;
use crate::read::{symbols, Read};
use crate::symbol::remove_blanks;
use log::{debug, warn};
use std::fmt;

/// Phred+33 offset used for the SAM quality column
pub const PHRED_OFFSET: u8 = 33;

/// Highest quality that stays printable after Phred+33 encoding (`~`)
pub const MAX_QUALITY: u8 = 93;

/// One SAM alignment line, before serialization
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentRecord {
    /// 1-based input index of the read, used as QNAME
    pub index: usize,
    pub reference_name: String,
    /// 1-based leftmost reference position
    pub position: usize,
    pub mapping_quality: u8,
    pub cigar: String,
    /// Read sequence with all blanks removed
    pub sequence: String,
    /// Phred+33 qualities of the bases that carried one
    pub quality: Option<String>,
}

impl AlignmentRecord {
    /// Flag field; every record is an unpaired forward-strand primary alignment.
    pub const FLAG: u16 = 0;
}

impl fmt::Display for AlignmentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cigar = if self.cigar.is_empty() {
            "*"
        } else {
            self.cigar.as_str()
        };
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t*\t0\t0\t{}\t{}",
            self.index,
            Self::FLAG,
            self.reference_name,
            self.position,
            self.mapping_quality,
            cigar,
            self.sequence,
            self.quality.as_deref().unwrap_or("*")
        )
    }
}

/// Phred+33 encode the qualities that are present, in order.
///
/// Every quality must be at most [`MAX_QUALITY`].
pub fn encode_qualities<I>(qualities: I) -> Option<String>
where
    I: IntoIterator<Item = Option<u8>>,
{
    let encoded: String = qualities
        .into_iter()
        .flatten()
        .map(|quality| char::from(quality + PHRED_OFFSET))
        .collect();
    if encoded.is_empty() {
        None
    } else {
        Some(encoded)
    }
}

/// Build the alignment record of `read` against the gapped `reference`.
pub fn build_record(read: &Read, reference: &[u8], config: &Config) -> Result<AlignmentRecord> {
    let normalized = normalize(&read.bases, reference, config.blank).ok_or_else(|| {
        SammockError::Structural(format!(
            "Read {} contains no aligned bases",
            read.index
        ))
    })?;

    if let Some(quality) = normalized
        .read
        .iter()
        .filter_map(|base| base.quality)
        .find(|&quality| quality > MAX_QUALITY)
    {
        return Err(SammockError::Structural(format!(
            "Read {} has quality {} outside 0..={}",
            read.index, quality, MAX_QUALITY
        )));
    }

    let shifted_symbols = symbols(normalized.read);
    let runs = encode(&shifted_symbols, normalized.reference, config.blank);
    let cigar = format_cigar(&runs);
    let sequence = String::from_utf8_lossy(&remove_blanks(&shifted_symbols, config.blank))
        .into_owned();
    let quality = encode_qualities(normalized.read.iter().map(|base| base.quality));

    let aligned_bases: u32 = runs.iter().map(|run| run.read_delta()).sum();
    let reference_span: u32 = runs.iter().map(|run| run.reference_delta()).sum();
    if normalized.reference.is_empty() {
        warn!(
            "Read {} starts past the end of the reference (column {})",
            read.index,
            normalized.offset + 1
        );
    } else if (aligned_bases as usize) < sequence.len() {
        warn!(
            "Read {} has {} bases beyond the end of the reference",
            read.index,
            sequence.len() - aligned_bases as usize
        );
    }
    debug!(
        "Read {}: position {}, CIGAR {}, {} reference bases",
        read.index, normalized.position, cigar, reference_span
    );

    Ok(AlignmentRecord {
        index: read.index,
        reference_name: config.reference_name.clone(),
        position: normalized.position,
        mapping_quality: config.mapping_quality,
        cigar,
        sequence,
        quality,
    })
}

/// Stable sort by (reference name, position); ties keep their input order.
pub fn collate(mut records: Vec<AlignmentRecord>) -> Vec<AlignmentRecord> {
    records.sort_by(|a, b| {
        a.reference_name
            .cmp(&b.reference_name)
            .then(a.position.cmp(&b.position))
    });
    records
}
