//! Text rendering of the FASTA reference record and the SAM alignment file.

use crate::config::Config;
use crate::record::AlignmentRecord;

pub const ROW_DELIMITER: &str = "\n";
pub const COL_DELIMITER: &str = "\t";

/// Two-line FASTA record of the ungapped reference.
pub fn reference_record(ungapped_reference: &str, config: &Config) -> String {
    format!(
        ">{}{ROW_DELIMITER}{}{ROW_DELIMITER}",
        config.reference_name, ungapped_reference
    )
}

/// `@HD` and `@SQ` header lines, each terminated by a newline.
pub fn header(reference_length: usize, config: &Config) -> String {
    let hd = [
        "@HD".to_string(),
        format!("VN:{}", config.sam_version),
        format!("SO:{}", config.sort_order),
    ]
    .join(COL_DELIMITER);
    let sq = [
        "@SQ".to_string(),
        format!("SN:{}", config.reference_name),
        format!("LN:{reference_length}"),
    ]
    .join(COL_DELIMITER);
    format!("{hd}{ROW_DELIMITER}{sq}{ROW_DELIMITER}")
}

/// Full SAM text: header followed by one line per record, in the given order.
pub fn alignments(records: &[AlignmentRecord], reference_length: usize, config: &Config) -> String {
    let mut sam = header(reference_length, config);
    for record in records {
        sam.push_str(&record.to_string());
        sam.push_str(ROW_DELIMITER);
    }
    sam
}
