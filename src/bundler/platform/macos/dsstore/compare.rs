//! HFS+ `FastUnicodeCompare` ordering.
//!
//! Finder keeps `.DS_Store` records in the same order an HFS+ catalog keeps
//! directory entries: names are compared one UTF-16 unit at a time after
//! folding each unit through a case table. Ignorable formatting characters
//! are skipped entirely and NUL sorts after everything else.
//!
//! Names are stored decomposed, so the case table only folds characters that
//! have no canonical decomposition. A precomposed `É` is left alone; its
//! decomposed form (`E` + U+0301) folds through the base letter instead.

use std::cmp::Ordering;
use unicode_normalization::char::decompose_canonical;

/// Compares two names the way an HFS+ catalog orders them.
///
/// A name that is a strict prefix of another sorts first. Names that differ
/// only by ASCII or Unicode letter case compare equal.
pub fn fast_unicode_compare(a: &str, b: &str) -> Ordering {
    let mut left = a.encode_utf16().map(fold_unit);
    let mut right = b.encode_utf16().map(fold_unit);

    loop {
        let c1 = next_significant(&mut left);
        let c2 = next_significant(&mut right);

        if c1 != c2 {
            return c1.cmp(&c2);
        }
        if c1 == 0 {
            return Ordering::Equal;
        }
    }
}

/// Skips ignorable units; 0 marks the end of the name.
fn next_significant(units: &mut impl Iterator<Item = u16>) -> u16 {
    units.find(|&u| u != 0).unwrap_or(0)
}

/// Maps one UTF-16 unit through the HFS+ case table.
///
/// Returns 0 for ignorable units.
fn fold_unit(unit: u16) -> u16 {
    match unit {
        0x0000 => 0xFFFF,
        0x0041..=0x005A => unit + 0x20,
        0x0001..=0x007F => unit,
        0x200C..=0x200F | 0x202A..=0x202E | 0x206A..=0x206F | 0xFEFF => 0,
        0xD800..=0xDFFF => unit,
        _ => char::from_u32(u32::from(unit)).map_or(unit, fold_char),
    }
}

fn fold_char(c: char) -> u16 {
    let original = c as u16;
    if has_decomposition(c) {
        return original;
    }

    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) if (l as u32) <= 0xFFFF && l != c => l as u16,
        _ => original,
    }
}

fn has_decomposition(c: char) -> bool {
    let mut decomposed = false;
    decompose_canonical(c, |d| decomposed |= d != c);
    decomposed
}
