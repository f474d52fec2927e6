//! Boundary clamping for a popper rectangle.
//!
//! Moves a popper back inside a boundary region, one side at a time, in a
//! caller-chosen priority order. Each check reads the rectangle produced by
//! the previous one, so later sides can undo earlier ones. An escape policy
//! lets the popper leave the boundary to stay attached to its reference.
//!
//! Pure geometry: no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use popclamp::{Escape, Placement, Rect, Side, clamp};
//!
//! let popper = Rect::new(-10.0, 0.0, 100.0, 40.0);
//! let boundaries = Rect::new(0.0, 0.0, 200.0, 200.0);
//! let escape = Escape::new(Placement::BOTTOM);
//!
//! let out = clamp(popper, &boundaries, &[Side::Left], &escape);
//! assert_eq!(out.left, 0.0);
//! assert_eq!(out.width, 100.0);
//! ```

use core::fmt;

use num_traits::Float;

use crate::geometry::Rect;
use crate::placement::{Placement, Side};

/// How [`Escape::should_overflow`] decides once escaping is enabled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum EscapePolicy {
    /// Every side escapes. Turning on `escape_with_reference` disables
    /// clamping entirely.
    #[default]
    Always,
    /// A side escapes when it is off-axis from the original placement, or
    /// on-axis after a flip. An on-axis side of an unflipped popper is still
    /// clamped.
    AxisAware,
}

/// Escape-with-reference inputs for one layout pass.
///
/// `original_placement` and `flipped` are owned by the pass; the clamp only
/// reads them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Escape {
    pub with_reference: bool,
    pub policy: EscapePolicy,
    /// Placement chosen before any flip this pass.
    pub original_placement: Placement,
    /// Whether a flip already happened this pass.
    pub flipped: bool,
}

impl Escape {
    /// Escaping disabled, unflipped.
    pub const fn new(original_placement: Placement) -> Self {
        Self {
            with_reference: false,
            policy: EscapePolicy::Always,
            original_placement,
            flipped: false,
        }
    }

    pub const fn with_reference(mut self, with_reference: bool) -> Self {
        self.with_reference = with_reference;
        self
    }

    pub const fn policy(mut self, policy: EscapePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub const fn flipped(mut self, flipped: bool) -> Self {
        self.flipped = flipped;
        self
    }

    /// Whether the popper may overflow the boundary on `side`.
    pub fn should_overflow(&self, side: Side) -> bool {
        if !self.with_reference {
            return false;
        }
        match self.policy {
            EscapePolicy::Always => true,
            EscapePolicy::AxisAware => {
                let same_axis = self.original_placement.is_same_axis(side);
                !same_axis || self.flipped
            }
        }
    }
}

/// Record of one priority entry applied to the working rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClampStep<T = f64> {
    pub side: Side,
    /// Working rectangle this check read.
    pub before: Rect<T>,
    /// Working rectangle handed to the next check.
    pub after: Rect<T>,
    /// The popper crossed the boundary on `side`.
    pub violated: bool,
    /// The crossing was allowed by the escape policy.
    pub escaped: bool,
}

impl<T: Float> ClampStep<T> {
    /// Whether this step moved the rectangle.
    pub fn moved(&self) -> bool {
        self.before.left != self.after.left || self.before.top != self.after.top
    }
}

/// Apply one side's rule to `rect`.
///
/// Only `left` (horizontal sides) or `top` (vertical sides) is written.
/// `right`/`bottom` are read as given, even when an earlier step moved the
/// origin.
pub fn clamp_side<T: Float>(
    rect: Rect<T>,
    boundaries: &Rect<T>,
    side: Side,
    escape: &Escape,
) -> ClampStep<T> {
    let violated = match side {
        Side::Left => rect.left < boundaries.left,
        Side::Right => rect.right > boundaries.right,
        Side::Top => rect.top < boundaries.top,
        Side::Bottom => rect.bottom > boundaries.bottom,
    };
    let escaped = violated && escape.should_overflow(side);

    let mut after = rect;
    if violated && !escaped {
        match side {
            Side::Left => after.left = rect.left.max(boundaries.left),
            Side::Right => after.left = rect.left.min(boundaries.right - rect.width),
            Side::Top => after.top = rect.top.max(boundaries.top),
            Side::Bottom => after.top = rect.top.min(boundaries.bottom - rect.height),
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        side = side.as_str(),
        violated,
        escaped,
        left = ?after.left.to_f64(),
        top = ?after.top.to_f64(),
        "clamp step"
    );

    ClampStep {
        side,
        before: rect,
        after,
        violated,
        escaped,
    }
}

/// Clamp `rect` into `boundaries`, checking sides in `order`.
///
/// Width and height are never changed. An empty order returns `rect`.
/// Clamping the result again with the same inputs changes nothing.
///
/// When the popper is larger than the boundary the result can still cross
/// it; which edge wins depends on `order`.
pub fn clamp<T: Float>(
    rect: Rect<T>,
    boundaries: &Rect<T>,
    order: &[Side],
    escape: &Escape,
) -> Rect<T> {
    order.iter().fold(rect, |r, &side| {
        clamp_side(r, boundaries, side, escape).after
    })
}

/// Like [`clamp`], but yields every intermediate step.
///
/// ```
/// use popclamp::{Escape, Placement, Rect, Side, steps};
///
/// let popper = Rect::new(0.0, 0.0, 200.0, 10.0);
/// let boundaries = Rect::new(50.0, 0.0, 100.0, 100.0);
/// let escape = Escape::new(Placement::TOP);
///
/// let lefts: Vec<f64> = steps(popper, &boundaries, &[Side::Left, Side::Right], &escape)
///     .map(|s| s.after.left)
///     .collect();
/// assert_eq!(lefts, [50.0, -50.0]);
/// ```
pub fn steps<'a, T: Float>(
    rect: Rect<T>,
    boundaries: &Rect<T>,
    order: &'a [Side],
    escape: &Escape,
) -> Steps<'a, T> {
    Steps {
        current: rect,
        boundaries: *boundaries,
        order: order.iter(),
        escape: *escape,
    }
}

/// Iterator returned by [`steps`].
#[derive(Clone, Debug)]
pub struct Steps<'a, T = f64> {
    current: Rect<T>,
    boundaries: Rect<T>,
    order: core::slice::Iter<'a, Side>,
    escape: Escape,
}

impl<T: Float> Steps<'_, T> {
    /// Working rectangle after the steps yielded so far.
    pub fn current(&self) -> Rect<T> {
        self.current
    }
}

impl<T: Float> Iterator for Steps<'_, T> {
    type Item = ClampStep<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let side = *self.order.next()?;
        let step = clamp_side(self.current, &self.boundaries, side, &self.escape);
        self.current = step.after;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T: Float> ExactSizeIterator for Steps<'_, T> {}

/// Configuration or input error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OverflowError {
    /// A direction token is not one of `top`, `right`, `bottom`, `left`.
    UnknownSide,
    /// A placement string is not `side` or `side-start`/`side-end`.
    UnknownPlacement,
    /// The priority order has no entries.
    EmptyPriority,
    /// Padding is NaN or infinite.
    InvalidPadding,
}

impl fmt::Display for OverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnknownSide => "unknown side (expected top, right, bottom or left)",
            Self::UnknownPlacement => "unknown placement (expected side or side-start/side-end)",
            Self::EmptyPriority => "priority order is empty",
            Self::InvalidPadding => "padding must be finite",
        })
    }
}

impl core::error::Error for OverflowError {}
