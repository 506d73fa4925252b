//! Amino-acid to codon expansion.
//!
//! The table is the standard DNA codon table: one entry per single-letter
//! amino-acid code plus `*` for stop, 21 symbols in total. Codon order
//! within an entry follows the canonical table and is part of the contract.

/// Placeholder set for characters outside the amino-acid alphabet.
pub const UNKNOWN_CODONS: &[&str] = &["Unknown"];

/// Codons encoding one amino acid, in canonical order, or `None` for a
/// character outside the 21-symbol alphabet. Case-insensitive.
pub fn codons_for(amino_acid: char) -> Option<&'static [&'static str]> {
    let codons: &'static [&'static str] = match amino_acid.to_ascii_uppercase() {
        'A' => &["GCT", "GCC", "GCA", "GCG"],
        'C' => &["TGT", "TGC"],
        'D' => &["GAT", "GAC"],
        'E' => &["GAA", "GAG"],
        'F' => &["TTT", "TTC"],
        'G' => &["GGT", "GGC", "GGA", "GGG"],
        'H' => &["CAT", "CAC"],
        'I' => &["ATT", "ATC", "ATA"],
        'K' => &["AAA", "AAG"],
        'L' => &["TTA", "TTG", "CTT", "CTC", "CTA", "CTG"],
        'M' => &["ATG"],
        'N' => &["AAT", "AAC"],
        'P' => &["CCT", "CCC", "CCA", "CCG"],
        'Q' => &["CAA", "CAG"],
        'R' => &["CGT", "CGC", "CGA", "CGG", "AGA", "AGG"],
        'S' => &["TCT", "TCC", "TCA", "TCG", "AGT", "AGC"],
        'T' => &["ACT", "ACC", "ACA", "ACG"],
        'V' => &["GTT", "GTC", "GTA", "GTG"],
        'W' => &["TGG"],
        'Y' => &["TAT", "TAC"],
        '*' => &["TAA", "TAG", "TGA"],
        _ => return None,
    };
    Some(codons)
}

/// Expand each character of `sequence` to its codon set, in input order.
///
/// Total over any input: a character with no codon entry maps to
/// [`UNKNOWN_CODONS`] instead of failing the whole sequence.
pub fn expand_amino_acids(sequence: &str) -> Vec<&'static [&'static str]> {
    sequence
        .chars()
        .map(|c| codons_for(c).unwrap_or(UNKNOWN_CODONS))
        .collect()
}
