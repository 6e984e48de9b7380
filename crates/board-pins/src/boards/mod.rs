//! Board revision tables.
//!
//! Each supported revision contributes one `PinTable` constant behind its
//! own cargo feature; the build selects the board, not runtime code. Adding
//! a revision means adding a module with a new table and a feature gate —
//! no accessor code changes.

#[cfg(feature = "lyratd-msc-v2-1")]
pub mod lyratd_msc_v2_1;

/// The pin table for the board revision selected at build time.
#[cfg(feature = "lyratd-msc-v2-1")]
#[must_use]
pub const fn active() -> &'static crate::table::PinTable {
    &lyratd_msc_v2_1::PINS
}
