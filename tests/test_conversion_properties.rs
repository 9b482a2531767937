//! Invariants of the conversion checked over randomly generated alignments

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sammock::config::Config;
use sammock::convert::convert;

const BASES: &[u8] = b"ACGT";

/// Split a CIGAR string into (length, operation) runs.
fn cigar_runs(cigar: &str) -> Vec<(u32, char)> {
    let mut runs = Vec::new();
    let mut len = 0u32;
    for c in cigar.chars() {
        match c.to_digit(10) {
            Some(digit) => len = len * 10 + digit,
            None => {
                assert!(len > 0 && "MID".contains(c), "malformed CIGAR {}", cigar);
                runs.push((len, c));
                len = 0;
            }
        }
    }
    assert_eq!(len, 0, "trailing digits in CIGAR {}", cigar);
    runs
}

struct Generated {
    text: String,
    reference: Vec<u8>,
    reads: Vec<Vec<(u8, Option<u8>)>>,
}

fn generate(rng: &mut StdRng) -> Generated {
    let columns = rng.gen_range(1..40);
    let mut reference: Vec<u8> = (0..columns)
        .map(|_| {
            if rng.gen_bool(0.2) {
                b'-'
            } else {
                BASES[rng.gen_range(0..BASES.len())]
            }
        })
        .collect();
    // The reference line never ends in a blank after trimming
    let last = reference.len() - 1;
    reference[last] = BASES[rng.gen_range(0..BASES.len())];

    let num_reads = rng.gen_range(1..8);
    let mut reads = Vec::new();
    for _ in 0..num_reads {
        let start = rng.gen_range(0..columns);
        let len = rng.gen_range(1..=columns - start);
        let mut read: Vec<(u8, Option<u8>)> = vec![(b'-', None); start];
        for i in 0..len {
            let symbol = if i > 0 && rng.gen_bool(0.25) {
                b'-'
            } else {
                BASES[rng.gen_range(0..BASES.len())]
            };
            let quality = if symbol != b'-' && rng.gen_bool(0.5) {
                Some(rng.gen_range(0..=93))
            } else {
                None
            };
            read.push((symbol, quality));
        }
        reads.push(read);
    }

    let mut text = String::new();
    for read in &reads {
        let tokens: Vec<String> = read
            .iter()
            .map(|&(symbol, quality)| match quality {
                Some(q) => format!("{}:{}", symbol as char, q),
                None => (symbol as char).to_string(),
            })
            .collect();
        text.push_str(&tokens.join(" "));
        text.push('\n');
    }
    text.push_str(std::str::from_utf8(&reference).unwrap());
    text.push('\n');

    Generated {
        text,
        reference,
        reads,
    }
}

#[test]
fn test_random_alignments_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5a4d);
    let config = Config::default();

    for _ in 0..500 {
        let generated = generate(&mut rng);
        let conversion = convert(&generated.text, &config).unwrap();
        let ungapped_len = generated.reference.iter().filter(|&&s| s != b'-').count();

        assert_eq!(conversion.records.len(), generated.reads.len());
        for pair in conversion.records.windows(2) {
            assert!(
                (pair[0].position, pair[0].index) < (pair[1].position, pair[1].index),
                "records out of order"
            );
        }

        for record in &conversion.records {
            let read = &generated.reads[record.index - 1];
            let offset = read.iter().take_while(|(s, _)| *s == b'-').count();
            let runs = cigar_runs(&record.cigar);

            // Run lengths cover every column that is not blank on both sides
            let covered = read[offset..]
                .iter()
                .zip(&generated.reference[offset..])
                .filter(|&(&(r, _), &g)| r != b'-' || g != b'-')
                .count() as u32;
            assert_eq!(runs.iter().map(|&(len, _)| len).sum::<u32>(), covered);

            let read_bases: u32 = runs
                .iter()
                .filter(|&&(_, op)| op != 'D')
                .map(|&(len, _)| len)
                .sum();
            assert_eq!(read_bases as usize, record.sequence.len());

            let reference_bases: u32 = runs
                .iter()
                .filter(|&&(_, op)| op != 'I')
                .map(|&(len, _)| len)
                .sum();
            assert!(record.position >= 1);
            assert!(record.position - 1 + reference_bases as usize <= ungapped_len);

            let expected_qualities: Vec<u8> = read.iter().filter_map(|&(_, q)| q).collect();
            match &record.quality {
                Some(quality) => {
                    let decoded: Vec<u8> = quality.bytes().map(|c| c - 33).collect();
                    assert_eq!(decoded, expected_qualities);
                }
                None => assert!(expected_qualities.is_empty()),
            }
        }
    }
}

#[test]
fn test_reads_at_same_position_keep_input_order() {
    let text = "C G T\nA C G\n- - G\nA C G\nACG\n";
    let conversion = convert(text, &Config::default()).unwrap();
    let order: Vec<(usize, usize)> = conversion
        .records
        .iter()
        .map(|r| (r.index, r.position))
        .collect();
    assert_eq!(order, vec![(1, 1), (2, 1), (4, 1), (3, 3)]);
}
