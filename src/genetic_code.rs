// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

//! Translation with the vertebrate mitochondrial genetic code (NCBI table 2).
//!
//! Codons made of concrete bases are looked up directly. Codons containing IUPAC ambiguity
//! codes are expanded to every concrete codon they stand for, and the results are merged:
//!
//! * all expansions are stops: `*`
//! * some, but not all, expansions are stops: `X`
//! * a single amino acid: that amino acid
//! * {D, N}: `B`, {E, Q}: `Z`, {I, L}: `J`
//! * anything else: `X`
//!
//! A trailing partial codon is ignored. Case is ignored, and `U` reads as `T`.

use crate::errors::MitoError;

pub const NCBI_TABLE_ID: u8 = 2;
pub const TABLE_NAME: &str = "Vertebrate Mitochondrial";

pub const STOP: u8 = b'*';
pub const UNKNOWN: u8 = b'X';

// Codon order: AAA, AAC, AAG, AAT, ACA, ACC, ACG, ACT, AGA, AGC, AGG, AGT,
//              ATA, ATC, ATG, ATT, CAA, CAC, CAG, CAT, CCA, CCC, CCG, CCT,
//              CGA, CGC, CGG, CGT, CTA, CTC, CTG, CTT, GAA, GAC, GAG, GAT,
//              GCA, GCC, GCG, GCT, GGA, GGC, GGG, GGT, GTA, GTC, GTG, GTT,
//              TAA, TAC, TAG, TAT, TCA, TCC, TCG, TCT, TGA, TGC, TGG, TGT,
//              TTA, TTC, TTG, TTT
//
// Differs from the standard code at TGA=W, AGA=*, AGG=*, ATA=M.
const TABLE2_AA: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'*', b'S', b'*', b'S',
    b'M', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'*', b'Y', b'*', b'Y', b'S', b'S', b'S', b'S', b'W', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

// A=0, C=1, G=2, T/U=3
fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' | b'U' => Some(3),
        _ => None,
    }
}

/// Concrete bases an (upper-case) IUPAC nucleotide code stands for.
fn expand_base(b: u8) -> Option<&'static [u8]> {
    let bases: &'static [u8] = match b {
        b'A' => b"A",
        b'C' => b"C",
        b'G' => b"G",
        b'T' | b'U' => b"T",
        b'R' => b"AG",
        b'Y' => b"CT",
        b'S' => b"CG",
        b'W' => b"AT",
        b'K' => b"GT",
        b'M' => b"AC",
        b'B' => b"CGT",
        b'D' => b"AGT",
        b'H' => b"ACT",
        b'V' => b"ACG",
        b'N' => b"ACGT",
        _ => return None,
    };
    Some(bases)
}

fn aa_bit(aa: u8) -> u32 {
    1 << (aa - b'A')
}

fn lookup(b1: u8, b2: u8, b3: u8) -> Option<u8> {
    let idx = base_index(b1)? * 16 + base_index(b2)? * 4 + base_index(b3)?;
    Some(TABLE2_AA[idx])
}

fn merge_ambiguous(seen_stop: bool, aas: u32) -> u8 {
    let dn = aa_bit(b'D') | aa_bit(b'N');
    let eq = aa_bit(b'E') | aa_bit(b'Q');
    let il = aa_bit(b'I') | aa_bit(b'L');
    match (seen_stop, aas) {
        (true, 0) => STOP,
        (true, _) => UNKNOWN,
        (false, m) if m.count_ones() == 1 => b'A' + m.trailing_zeros() as u8,
        (false, m) if m == dn => b'B',
        (false, m) if m == eq => b'Z',
        (false, m) if m == il => b'J',
        _ => UNKNOWN,
    }
}

/// Translates one codon (exactly three bases). Returns `*` for stops.
pub fn translate_codon(codon: &[u8]) -> Result<u8, MitoError> {
    let invalid = || {
        MitoError::Translation(format!(
            "Codon '{}' is invalid",
            String::from_utf8_lossy(codon)
        ))
    };
    let &[b1, b2, b3] = codon else {
        return Err(invalid());
    };
    let [b1, b2, b3] = [b1, b2, b3].map(|b| b.to_ascii_uppercase());
    if let Some(aa) = lookup(b1, b2, b3) {
        return Ok(aa);
    }

    let (e1, e2, e3) = (
        expand_base(b1).ok_or_else(invalid)?,
        expand_base(b2).ok_or_else(invalid)?,
        expand_base(b3).ok_or_else(invalid)?,
    );
    let mut seen_stop = false;
    let mut aas: u32 = 0;
    for &x in e1 {
        for &y in e2 {
            for &z in e3 {
                match lookup(x, y, z) {
                    Some(STOP) => seen_stop = true,
                    Some(aa) => aas |= aa_bit(aa),
                    None => return Err(invalid()),
                }
            }
        }
    }
    Ok(merge_ambiguous(seen_stop, aas))
}

/// Translates `seq` in frame 0. With `to_stop`, translation halts at the first stop codon, which
/// is not included. Otherwise stops are kept as `*`.
pub fn translate(seq: &str, to_stop: bool) -> Result<String, MitoError> {
    let mut protein = String::with_capacity(seq.len() / 3);
    for codon in seq.as_bytes().chunks_exact(3) {
        let aa = translate_codon(codon)?;
        if to_stop && aa == STOP {
            break;
        }
        protein.push(aa as char);
    }
    Ok(protein)
}

pub fn count_stops(protein: &str) -> usize {
    protein.bytes().filter(|&aa| aa == STOP).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aa(codon: &str) -> char {
        translate_codon(codon.as_bytes()).unwrap() as char
    }

    #[test]
    fn test_table_2_differences() {
        assert_eq!(aa("TGA"), 'W');
        assert_eq!(aa("AGA"), '*');
        assert_eq!(aa("AGG"), '*');
        assert_eq!(aa("ATA"), 'M');
        // Shared with the standard code
        assert_eq!(aa("TAA"), '*');
        assert_eq!(aa("TAG"), '*');
        assert_eq!(aa("ATG"), 'M');
        assert_eq!(aa("TTT"), 'F');
    }

    #[test]
    fn test_table_2_has_four_stops() {
        let bases = ["A", "C", "G", "T"];
        let mut stops = Vec::new();
        for x in bases {
            for y in bases {
                for z in bases {
                    let codon = format!("{}{}{}", x, y, z);
                    if aa(&codon) == '*' {
                        stops.push(codon);
                    }
                }
            }
        }
        assert_eq!(stops, vec!["AGA", "AGG", "TAA", "TAG"]);
    }

    #[test]
    fn test_case_and_uracil() {
        assert_eq!(aa("atg"), 'M');
        assert_eq!(aa("UGA"), 'W');
        assert_eq!(aa("uaa"), '*');
    }

    #[test]
    fn test_ambiguous_codons() {
        assert_eq!(aa("GCN"), 'A');
        assert_eq!(aa("YTA"), 'L');
        assert_eq!(aa("TAR"), '*');
        assert_eq!(aa("AGR"), '*');
        assert_eq!(aa("NNN"), 'X');
        assert_eq!(aa("TRA"), 'X'); // TAA stop, TGA Trp
        assert_eq!(aa("RAY"), 'B');
        assert_eq!(aa("SAR"), 'Z');
        assert_eq!(aa("MTT"), 'J');
        assert_eq!(aa("ATH"), 'X'); // Met or Ile
    }

    #[test]
    fn test_invalid_codon() {
        assert!(translate_codon(b"A-G").is_err());
        assert!(translate_codon(b"AT").is_err());
        assert!(translate("ATGXYZ", false).is_err());
    }

    #[test]
    fn test_translate_full_and_to_stop() {
        assert_eq!(translate("ATGGGGTAA", false).unwrap(), "MG*");
        assert_eq!(translate("ATGGGGTAA", true).unwrap(), "MG");
        assert_eq!(translate("ATGAGACCCTAACCC", false).unwrap(), "M*P*P");
        assert_eq!(translate("ATGAGACCCTAACCC", true).unwrap(), "M");
        assert_eq!(translate("TAAATG", true).unwrap(), "");
    }

    #[test]
    fn test_translate_drops_partial_codon() {
        assert_eq!(translate("ATGGG", false).unwrap(), "M");
        assert_eq!(translate("ATGGGGT", false).unwrap(), "MG");
        assert_eq!(translate("AT", false).unwrap(), "");
        assert_eq!(translate("", false).unwrap(), "");
    }

    #[test]
    fn test_count_stops() {
        assert_eq!(count_stops("M*P*P"), 2);
        assert_eq!(count_stops("MG"), 0);
        assert_eq!(count_stops(""), 0);
    }
}
