//! Boundary clamping for floating element positioning.
//!
//! Keeps a popper (tooltip, dropdown, ...) inside a boundary region by moving
//! it one side at a time, in a configurable priority order, unless an escape
//! policy lets it follow its reference out.
//!
//! Pure geometry: no element lookups of its own, `no_std` compatible. The
//! host engine supplies element handles and rects through
//! [`LayoutEnvironment`].
//!
//! # Modules
//!
//! - [`geometry`] — `Rect` and `Offsets`, padding inset
//! - [`placement`] — sides, placements, opposite lookup, axis equivalence
//! - [`overflow`] — the clamp itself, escape policy, step trace
//! - [`options`] — priority order and modifier options (`alloc`)
//! - [`modifier`] — layout pass state and the modifier entry point (`alloc`)
//!
//! # Example
//!
//! ```
//! use popclamp::{LayoutEnvironment, LayoutPass, Offsets, Placement, PreventOverflow, Rect};
//!
//! struct Viewport;
//!
//! impl LayoutEnvironment for Viewport {
//!     type Element = ();
//!     fn offset_parent(&self, _popper: &()) {}
//!     fn boundaries(&self, _popper: &(), padding: f64, _container: &()) -> Rect {
//!         Rect::new(0.0, 0.0, 800.0, 600.0).inset(padding)
//!     }
//! }
//!
//! let pass = LayoutPass::new((), Offsets::new(780.0, 20.0, 100.0, 40.0), Placement::BOTTOM);
//! let pass = PreventOverflow::new().apply(pass, &Viewport)?;
//!
//! assert_eq!(pass.offsets, Offsets::new(695.0, 20.0, 100.0, 40.0));
//! # Ok::<(), popclamp::OverflowError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod geometry;
#[cfg(feature = "alloc")]
pub mod modifier;
#[cfg(feature = "alloc")]
pub mod options;
pub mod overflow;
pub mod placement;

pub use geometry::{Offsets, Rect};
#[cfg(feature = "alloc")]
pub use modifier::{LayoutEnvironment, LayoutPass};
#[cfg(feature = "alloc")]
pub use options::{PreventOverflow, Priority};
pub use overflow::{
    ClampStep, Escape, EscapePolicy, OverflowError, Steps, clamp, clamp_side, steps,
};
pub use placement::{Alignment, Axis, Placement, Side};
