//! Natural-order string comparators used by sorting-based shift executors
//!
//! Two algorithms are exposed because callers rely on their differing
//! tie-break semantics: separated lists and paths sort with the
//! [`alphanumeric`] comparator, multi-line selections sort with the
//! [`natural`] comparator.

pub mod alphanumeric;
pub mod natural;
