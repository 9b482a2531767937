/// Immutable settings shared by every stage of the conversion.
///
/// Nothing in the crate reads global state: the alphabet, the blank symbol and
/// the fixed SAM field values all travel through this value.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Legal base symbols, case-sensitive
    pub alphabet: Vec<u8>,
    /// Reserved symbol meaning "no base at this column"
    pub blank: u8,
    /// Name of the single reference sequence
    pub reference_name: String,
    /// Mapping quality written to every record
    pub mapping_quality: u8,
    /// Value of the `VN` tag in the `@HD` header line
    pub sam_version: String,
    /// Value of the `SO` tag in the `@HD` header line
    pub sort_order: String,
    /// Require every base of a read to carry a quality, or none of them
    pub strict_qualities: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alphabet: b"ACGT".to_vec(),
            blank: b'-',
            reference_name: "ref".to_string(),
            mapping_quality: 60,
            sam_version: "1.4".to_string(),
            sort_order: "coordinate".to_string(),
            strict_qualities: false,
        }
    }
}

impl Config {
    pub fn with_reference_name(mut self, name: &str) -> Self {
        self.reference_name = name.to_string();
        self
    }

    pub fn with_mapping_quality(mut self, mapping_quality: u8) -> Self {
        self.mapping_quality = mapping_quality;
        self
    }

    pub fn with_strict_qualities(mut self, strict: bool) -> Self {
        self.strict_qualities = strict;
        self
    }

    pub fn with_alphabet(mut self, alphabet: &[u8], blank: u8) -> Self {
        self.alphabet = alphabet.to_vec();
        self.blank = blank;
        self
    }
}
