//! Input document parsing and validation.
//!
//! A document is a sequence of lines. Every non-blank line except the last is a
//! read line: whitespace-separated tokens, each a base symbol with an optional
//! `:<quality>` suffix, or a bare blank symbol. The last non-blank line is the
//! reference, a gapped base string without qualities. Lines are numbered from 1
//! as they appear in the input, including blank lines.

use crate::config::Config;
use crate::error::{Result, SammockError};
use crate::read::{AlignedBase, Read};
use crate::record::MAX_QUALITY;
use crate::symbol::{is_legal, present, trim_trailing_blanks};
use log::debug;
use regex::Regex;

#[derive(Debug, PartialEq)]
pub struct Document {
    pub reads: Vec<Read>,
    /// Gapped reference with trailing blanks removed
    pub reference: Vec<u8>,
}

/// Matches a single read token against the configured alphabet.
pub struct TokenGrammar {
    pattern: Regex,
}

impl TokenGrammar {
    pub fn new(config: &Config) -> Result<Self> {
        // Tokens are matched as text, so every symbol must be a single-byte character
        if let Some(&symbol) = config
            .alphabet
            .iter()
            .chain(std::iter::once(&config.blank))
            .find(|symbol| !symbol.is_ascii())
        {
            return Err(SammockError::Structural(format!(
                "Alphabet symbol 0x{symbol:02X} is not an ASCII character"
            )));
        }

        let bases = config
            .alphabet
            .iter()
            .map(|&symbol| regex::escape(&char::from(symbol).to_string()))
            .collect::<Vec<_>>()
            .join("|");
        let blank = regex::escape(&char::from(config.blank).to_string());
        let pattern = Regex::new(&format!(r"^(?:({bases})(?::([0-9]+))?|({blank}))$"))
            .map_err(|e| SammockError::Structural(format!("Invalid alphabet: {e}")))?;
        Ok(Self { pattern })
    }

    /// Parse one token, returning `None` if it does not follow the grammar.
    /// The quality, if any, is returned unvalidated.
    fn parse_token<'t>(&self, token: &'t str) -> Option<(u8, Option<&'t str>)> {
        let captures = self.pattern.captures(token)?;
        if let Some(base) = captures.get(1) {
            Some((base.as_str().as_bytes()[0], captures.get(2).map(|q| q.as_str())))
        } else {
            let blank = captures.get(3)?;
            Some((blank.as_str().as_bytes()[0], None))
        }
    }

    pub fn parse_read_line(
        &self,
        line: &str,
        line_number: usize,
        index: usize,
        config: &Config,
    ) -> Result<Read> {
        let mut bases = Vec::new();
        for token in line.split_whitespace() {
            let (symbol, quality) =
                self.parse_token(token)
                    .ok_or_else(|| SammockError::Validation {
                        line: line_number,
                        message: format!("malformed read token '{token}'"),
                    })?;
            let quality = quality
                .map(|digits| parse_quality(digits, line_number))
                .transpose()?;
            bases.push(AlignedBase::new(symbol, quality));
        }

        if config.strict_qualities {
            check_consistent_qualities(&bases, line_number, config.blank)?;
        }

        Ok(Read::new(index, bases))
    }
}

fn parse_quality(digits: &str, line_number: usize) -> Result<u8> {
    match digits.parse::<u32>() {
        Ok(quality) if quality <= u32::from(MAX_QUALITY) => Ok(quality as u8),
        _ => Err(SammockError::Validation {
            line: line_number,
            message: format!("quality {digits} is outside 0..={MAX_QUALITY}"),
        }),
    }
}

/// Either every present base carries a quality, or none does.
fn check_consistent_qualities(bases: &[AlignedBase], line_number: usize, blank: u8) -> Result<()> {
    let mut present_bases = bases.iter().filter(|base| present(base.symbol, blank));
    if let Some(first) = present_bases.next() {
        let qualified = first.quality.is_some();
        if present_bases.any(|base| base.quality.is_some() != qualified) {
            return Err(SammockError::Validation {
                line: line_number,
                message: "read mixes bases with and without qualities".to_string(),
            });
        }
    }
    Ok(())
}

/// Validate the reference line and return it with whitespace and trailing blanks removed.
pub fn parse_reference_line(line: &str, line_number: usize, config: &Config) -> Result<Vec<u8>> {
    let mut reference = Vec::with_capacity(line.len());
    for c in line.chars().filter(|c| !c.is_whitespace()) {
        let symbol = u8::try_from(c).ok().filter(|&s| is_legal(s, config));
        match symbol {
            Some(symbol) => reference.push(symbol),
            None => {
                return Err(SammockError::Validation {
                    line: line_number,
                    message: format!("illegal reference character '{c}'"),
                })
            }
        }
    }

    let trimmed = trim_trailing_blanks(&reference, config.blank);
    if trimmed.is_empty() {
        return Err(SammockError::Structural(format!(
            "Reference on line {line_number} contains no bases"
        )));
    }
    Ok(trimmed.to_vec())
}

pub fn parse_document(text: &str, config: &Config) -> Result<Document> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();

    let Some((&(reference_line_number, reference_line), read_lines)) = lines.split_last() else {
        return Err(SammockError::Structural(
            "Provide at least one read and a reference".to_string(),
        ));
    };
    if read_lines.is_empty() {
        return Err(SammockError::Structural(
            "Provide at least one read and a reference".to_string(),
        ));
    }

    let grammar = TokenGrammar::new(config)?;
    let reads = read_lines
        .iter()
        .enumerate()
        .map(|(i, &(line_number, line))| grammar.parse_read_line(line, line_number, i + 1, config))
        .collect::<Result<Vec<_>>>()?;
    let reference = parse_reference_line(reference_line, reference_line_number, config)?;

    debug!(
        "Parsed {} reads and a reference of {} columns",
        reads.len(),
        reference.len()
    );

    Ok(Document { reads, reference })
}
