//! API types for disasterscope-web JSON serialization.
//!
//! Chart payloads are the `charts` types themselves (they derive `ToSchema`
//! under this feature); this module adds the control schema clients use to
//! build their dropdowns and the year slider.

pub mod schema;
