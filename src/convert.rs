use crate::config::Config;
use crate::document::{parse_document, Document};
use crate::error::Result;
use crate::record::{build_record, collate, AlignmentRecord};
use crate::sam;
use crate::symbol::remove_blanks;
use log::info;

/// Both output artifacts of one conversion, fully rendered.
#[derive(Debug, PartialEq)]
pub struct Conversion {
    /// FASTA text of the ungapped reference
    pub reference: String,
    /// SAM text: header and collated alignment lines
    pub alignments: String,
    pub records: Vec<AlignmentRecord>,
}

/// Convert an already parsed document.
pub fn convert_document(document: &Document, config: &Config) -> Result<Conversion> {
    let ungapped = String::from_utf8_lossy(&remove_blanks(&document.reference, config.blank))
        .into_owned();

    let records = document
        .reads
        .iter()
        .map(|read| build_record(read, &document.reference, config))
        .collect::<Result<Vec<_>>>()?;
    let records = collate(records);

    info!(
        "Built {} alignment records against a reference of {} bp",
        records.len(),
        ungapped.len()
    );

    Ok(Conversion {
        reference: sam::reference_record(&ungapped, config),
        alignments: sam::alignments(&records, ungapped.len(), config),
        records,
    })
}

/// Parse and convert a symbolic alignment document.
///
/// Nothing is returned unless every read converts, so callers can write both
/// outputs or neither.
pub fn convert(text: &str, config: &Config) -> Result<Conversion> {
    let document = parse_document(text, config)?;
    convert_document(&document, config)
}
