//! lazy replacements for `any` and `all`
//!
//! evaluates a condition list strictly in order with short-circuit
//! semantics, so expensive deferred checks are never invoked once the
//! result is already determined

use crate::types::Condition;

/// check that every condition in the list holds
///
/// stops at the first falsy condition; entries after it are not evaluated.
/// returns `true` only if at least one condition was actually evaluated,
/// so an empty list (or a list of only skipped entries) yields `false`
pub fn lazy_all(conditions: &[Condition]) -> bool {
    let mut evaluated = false;
    for condition in conditions {
        let holds = match condition.evaluate() {
            Some(v) => v,
            None => continue,
        };
        evaluated = true;
        if !holds {
            return false;
        }
    }
    evaluated
}

/// check that at least one condition in the list holds
///
/// stops at the first truthy condition; entries after it are not evaluated.
/// an empty list (or a list of only skipped entries) yields `false`
pub fn lazy_any(conditions: &[Condition]) -> bool {
    for condition in conditions {
        let holds = match condition.evaluate() {
            Some(v) => v,
            None => continue,
        };
        if holds {
            return true;
        }
    }
    false
}
