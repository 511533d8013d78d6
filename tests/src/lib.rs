//! Cross-crate tests: state document in, rendered inventory out.

mod fixtures;
mod fold;
mod parity;
