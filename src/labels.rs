// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Hint label allocation.
//!
//! Labels are derived purely from `(index, total)`: re-deriving after a
//! rescan is index-only, with no stored history. For up to 26 targets every
//! label is the single letter at its index. Above that, labels mix one- and
//! two-letter codes such that no one-letter label is also the first letter of
//! a two-letter label, so typing a one-letter label activates immediately
//! instead of waiting for a second key.
//!
//! The boundary branches below (exact multiples of 26, the final index of a
//! group) are reproduced from observed behavior, not from a closed form. The
//! tests brute-force every `total` in range against the invariants that
//! actually matter: uniqueness, prefix-freedom, and the small-total
//! bijection.

use std::fmt;

use smol_str::SmolStr;

use crate::model::MAX_TARGETS;

/// A 1-or-2 uppercase-letter hint code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(SmolStr);

impl Label {
    fn single(letter: char) -> Self {
        let mut buf = [0u8; 4];
        Label(SmolStr::new(letter.encode_utf8(&mut buf)))
    }

    fn pair(first: char, second: char) -> Self {
        let mut text = String::with_capacity(2);
        text.push(first);
        text.push(second);
        Label(SmolStr::new(text))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Label length in letters. Labels are ASCII, so bytes equal letters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn letter(index: usize) -> char {
    debug_assert!(index < 26);
    (b'A' + index as u8) as char
}

/// Label for slot `index` out of `total` slots.
///
/// Pure and order-preserving in `index`; the code space shifts whenever
/// `total` changes, which is why callers re-derive all labels after every
/// reconciliation instead of caching them.
pub fn label(index: usize, total: usize) -> Label {
    debug_assert!(index < total, "label index {index} out of range for total {total}");
    debug_assert!(total <= MAX_TARGETS);
    if total < 27 || (index < 26 && index > total / 26) {
        return Label::single(letter(index));
    }
    if index + 1 == total && index % 26 == 0 {
        return Label::single(letter(index / 26));
    }
    if index % 26 == total / 26 && index < 26 && total % 26 == 0 {
        return Label::single(letter(index % 26));
    }
    Label::pair(letter(index / 26), letter(index % 26))
}

/// All labels for a list of `total` slots, in index order.
pub fn labels_for(total: usize) -> Vec<Label> {
    (0..total).map(|index| label(index, total)).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    #[test]
    fn small_totals_are_a_bijection_onto_leading_letters() {
        for total in 1..=26 {
            let labels = labels_for(total);
            for (index, lab) in labels.iter().enumerate() {
                assert_eq!(lab.len(), 1, "total {total} index {index}");
                assert_eq!(lab.as_str(), letter(index).to_string(), "total {total}");
            }
        }
    }

    #[test]
    fn every_total_in_range_is_unique_and_prefix_free() {
        for total in 1..=MAX_TARGETS {
            let labels = labels_for(total);
            assert_eq!(labels.len(), total);

            let mut seen = HashSet::new();
            let mut singles = HashSet::new();
            let mut pair_firsts = HashSet::new();
            for lab in &labels {
                assert!(
                    lab.len() == 1 || lab.len() == 2,
                    "total {total}: unexpected label {lab}"
                );
                assert!(
                    lab.as_str().chars().all(|c| c.is_ascii_uppercase()),
                    "total {total}: non-letter in {lab}"
                );
                assert!(seen.insert(lab.as_str().to_string()), "total {total}: duplicate {lab}");
                let first = lab.as_str().chars().next().unwrap();
                if lab.len() == 1 {
                    singles.insert(first);
                } else {
                    pair_firsts.insert(first);
                }
            }
            assert!(
                singles.is_disjoint(&pair_firsts),
                "total {total}: one-letter label shadows a two-letter prefix: \
                 singles {singles:?}, pair firsts {pair_firsts:?}"
            );
        }
    }

    #[test]
    fn relabeling_is_derived_only_from_index_and_total() {
        for total in [1, 26, 27, 52, 53, 300, 675, 676] {
            let batch = labels_for(total);
            for (index, lab) in batch.iter().enumerate() {
                assert_eq!(*lab, label(index, total));
            }
        }
    }

    #[rstest]
    #[case(27, 0, "AA")]
    #[case(27, 1, "AB")]
    #[case(27, 2, "C")]
    #[case(27, 25, "Z")]
    #[case(27, 26, "B")]
    #[case(30, 2, "C")]
    #[case(30, 25, "Z")]
    #[case(30, 26, "BA")]
    #[case(30, 29, "BD")]
    #[case(52, 0, "AA")]
    #[case(52, 2, "C")]
    #[case(52, 26, "BA")]
    #[case(52, 51, "BZ")]
    #[case(53, 2, "AC")]
    #[case(53, 3, "D")]
    #[case(53, 52, "C")]
    #[case(676, 0, "AA")]
    #[case(676, 675, "ZZ")]
    fn boundary_cases_match_observed_codes(
        #[case] total: usize,
        #[case] index: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(label(index, total).as_str(), expected);
    }

    #[test]
    fn the_full_code_space_uses_every_two_letter_pair() {
        let labels = labels_for(MAX_TARGETS);
        assert!(labels.iter().all(|lab| lab.len() == 2));
        let distinct: HashSet<&str> = labels.iter().map(Label::as_str).collect();
        assert_eq!(distinct.len(), MAX_TARGETS);
    }

    #[test]
    fn empty_list_allocates_nothing() {
        assert!(labels_for(0).is_empty());
    }
}
