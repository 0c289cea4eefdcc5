//! Test helpers shared across the envstruct workspace.
//!
//! Loading configuration reads process-wide state, so tests that set
//! variables must not interleave. The [`env`] module serialises those
//! mutations and restores prior values when its guards drop.

pub mod env;
