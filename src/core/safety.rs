//! Safety predicates over a single report.
//!
//! A report is *safe* when every consecutive difference lies within the
//! step bounds and all differences point the same way. It is
//! *tolerant-safe* when some single removal leaves a safe report.

use crate::domain::model::SafetyRules;

/// Safe under the default rules: every step is 1..=3 and the direction never flips.
pub fn is_safe(levels: &[i64]) -> bool {
    is_safe_with(levels, &SafetyRules::default())
}

pub fn is_safe_with(levels: &[i64], rules: &SafetyRules) -> bool {
    let mut last_rising: Option<bool> = None;

    for pair in levels.windows(2) {
        let step = i64::try_from(pair[1].abs_diff(pair[0])).unwrap_or(i64::MAX);
        if step < rules.min_step || step > rules.max_step {
            return false;
        }

        // zero already failed the bound check when min_step >= 1
        let rising = pair[1] > pair[0];
        if last_rising.is_some_and(|last| last != rising) {
            return false;
        }
        last_rising = Some(rising);
    }

    true
}

/// Safe after removing exactly one level, under the default rules.
///
/// Only the shortened reports are checked, never the report itself. An
/// empty report has nothing to remove and is never tolerant-safe.
pub fn is_safe_2(levels: &[i64]) -> bool {
    is_safe_2_with(levels, &SafetyRules::default())
}

pub fn is_safe_2_with(levels: &[i64], rules: &SafetyRules) -> bool {
    (0..levels.len()).any(|skip| {
        let mut shortened = levels.to_vec();
        shortened.remove(skip);
        is_safe_with(&shortened, rules)
    })
}
