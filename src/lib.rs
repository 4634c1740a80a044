// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Tick-driven follow camera for a target moving through a 3D world.
//!
//! Vantage keeps a camera behind a tracked entity: five modes (first person,
//! fixed follow, tracking follow, interactive orbit, free look), orbit
//! rotation with a clamped pitch, linear or proportional zoom, and
//! line-of-sight correction that snaps in front of walls and eases back out.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - one camera, advanced with `tick`
//! - [`camera::CameraRig`] - independent cameras keyed by target
//! - [`camera::obstruction::GeometryOracle`] - the only view of the physics
//!   world the camera needs
//! - [`options::Options`] - runtime tuning with TOML presets
//! - [`world::BoxWorld`] - box-collider oracle for tests and tools
//!
//! # Tick order
//!
//! Rotation, zoom, one obstruction query, composition, smoothing. Input is
//! gathered at any rate through [`camera::InputLatch`] and handed out once
//! per tick; [`util::tick_clock::TickClock`] turns frame time into ticks.

pub mod camera;
pub mod error;
pub mod options;
pub mod util;
pub mod world;
