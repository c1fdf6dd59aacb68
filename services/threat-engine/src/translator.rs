//! Risk code translation
//!
//! Maps the outlook's integer categorical code to a risk category.
//! The table is exhaustive: gaps such as 7 belong to the external coding
//! scheme and translate to `NONE` like any other unknown code.

use types::risk::{RiskCategory, RiskCode};

/// Translate an optional risk code into its category.
///
/// Absent or unrecognized codes yield `RiskCategory::NONE`; this never fails.
pub fn translate(code: Option<RiskCode>) -> RiskCategory {
    match code.map(|c| c.value()) {
        Some(2) => RiskCategory::TSTM,
        Some(3) => RiskCategory::MRGL,
        Some(4) => RiskCategory::SLGT,
        Some(5) => RiskCategory::ENH,
        Some(6) => RiskCategory::MDT,
        Some(8) => RiskCategory::HIGH,
        Some(_) | None => RiskCategory::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const KNOWN: [i64; 6] = [2, 3, 4, 5, 6, 8];

    #[test]
    fn test_known_codes() {
        let expected = [
            (2, RiskCategory::TSTM),
            (3, RiskCategory::MRGL),
            (4, RiskCategory::SLGT),
            (5, RiskCategory::ENH),
            (6, RiskCategory::MDT),
            (8, RiskCategory::HIGH),
        ];
        for (code, category) in expected {
            assert_eq!(translate(Some(RiskCode::new(code))), category);
        }
    }

    #[test]
    fn test_mapping_is_injective() {
        let categories: HashSet<_> = KNOWN
            .iter()
            .map(|c| translate(Some(RiskCode::new(*c))))
            .collect();
        assert_eq!(categories.len(), KNOWN.len());
        assert!(!categories.contains(&RiskCategory::NONE));
    }

    #[test]
    fn test_absent_and_unknown_codes() {
        assert_eq!(translate(None), RiskCategory::NONE);
        for code in [0, 1, 7, 9, 999, -5] {
            assert_eq!(translate(Some(RiskCode::new(code))), RiskCategory::NONE);
        }
    }

    proptest! {
        #[test]
        fn prop_unknown_codes_translate_to_none(code in any::<i64>()) {
            prop_assume!(!KNOWN.contains(&code));
            prop_assert_eq!(translate(Some(RiskCode::new(code))), RiskCategory::NONE);
        }
    }
}
