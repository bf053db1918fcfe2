//! lazy replacements for `any` and `all`
//!
//! combines short-circuit evaluation with the convenience of `any`/`all`
//! over a single list that mixes eager booleans and deferred checks:
//! - [`lazy_all`]: every condition holds, stops at the first falsy one
//! - [`lazy_any`]: at least one condition holds, stops at the first truthy one
//!
//! deferred conditions are zero-argument closures producing a [`Value`],
//! interpreted by truthiness. non-condition values are skipped, not rejected.
//!
//! ```
//! use laa::{lazy_all, Condition};
//!
//! let expensive_check = || {
//!     // only runs if the earlier conditions all held
//!     true
//! };
//!
//! assert!(lazy_all(&[
//!     Condition::Bool(1 == 1),
//!     Condition::lazy(expensive_check),
//! ]));
//! ```

mod eval;
mod types;

pub use eval::{lazy_all, lazy_any};
pub use types::{Condition, Thunk, Value};
