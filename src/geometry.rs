//! Rectangles and popper offsets.
//!
//! Coordinates are generic over a floating type (`f64` by default) and live in
//! whatever shared space the caller picked (viewport, offset parent, ...).
//!
//! # Example
//!
//! ```
//! use popclamp::{Offsets, Rect};
//!
//! let popper = Offsets::new(-10.0, 0.0, 100.0, 40.0).client_rect();
//! assert_eq!(popper, Rect::new(-10.0, 0.0, 100.0, 40.0));
//! assert_eq!(popper.right, 90.0);
//! ```

use num_traits::Float;

/// Axis-aligned rectangle with all four edges and its size.
///
/// Built through [`Rect::new`] or [`Offsets::client_rect`], the edges satisfy
/// `right == left + width` and `bottom == top + height`. The clamp in
/// [`crate::overflow`] only moves `left`/`top` and leaves `right`/`bottom` as
/// they came in; call [`normalized`](Self::normalized) to re-derive them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T = f64> {
    pub top: T,
    pub left: T,
    pub right: T,
    pub bottom: T,
    pub width: T,
    pub height: T,
}

impl<T: Float> Rect<T> {
    /// Create a rect from its top-left corner and size.
    pub fn new(left: T, top: T, width: T, height: T) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Create a rect from its four edges. Width and height are derived.
    pub fn from_edges(left: T, top: T, right: T, bottom: T) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Re-derive `right` and `bottom` from `left`/`top` and the size.
    pub fn normalized(self) -> Self {
        Self::new(self.left, self.top, self.width, self.height)
    }

    /// Whether `right`/`bottom` agree with `left + width`/`top + height`.
    pub fn is_consistent(&self) -> bool {
        self.right == self.left + self.width && self.bottom == self.top + self.height
    }

    /// Shrink by `padding` on every side.
    ///
    /// This is the padding rule boundary resolvers apply before handing a
    /// region to the clamp. Negative padding grows the rect. Size never goes
    /// below zero: an over-padded rect collapses onto its center line.
    pub fn inset(self, padding: T) -> Self {
        let two = T::one() + T::one();
        let width = (self.width - two * padding).max(T::zero());
        let height = (self.height - two * padding).max(T::zero());
        let left = if width > T::zero() {
            self.left + padding
        } else {
            self.left + self.width / two
        };
        let top = if height > T::zero() {
            self.top + padding
        } else {
            self.top + self.height / two
        };
        Self::new(left, top, width, height)
    }

    /// Whether this rect lies entirely within `outer` (edges may touch).
    pub fn is_within(&self, outer: &Self) -> bool {
        self.left >= outer.left
            && self.top >= outer.top
            && self.right <= outer.right
            && self.bottom <= outer.bottom
    }

    /// Whether this rect's size fits inside `outer`'s size.
    pub fn fits_in(&self, outer: &Self) -> bool {
        self.width <= outer.width && self.height <= outer.height
    }
}

/// Popper position as produced by the offsets stage: origin and size only.
///
/// Offsets carry no derived edges, so they can never disagree with
/// themselves. [`client_rect`](Self::client_rect) expands them into a full
/// [`Rect`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offsets<T = f64> {
    pub left: T,
    pub top: T,
    pub width: T,
    pub height: T,
}

impl<T: Float> Offsets<T> {
    /// Create offsets.
    pub const fn new(left: T, top: T, width: T, height: T) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Expand into a rect with `right`/`bottom` derived.
    pub fn client_rect(self) -> Rect<T> {
        Rect::new(self.left, self.top, self.width, self.height)
    }
}

impl<T: Float> From<Rect<T>> for Offsets<T> {
    fn from(r: Rect<T>) -> Self {
        Self::new(r.left, r.top, r.width, r.height)
    }
}

impl<T: Float> From<Offsets<T>> for Rect<T> {
    fn from(o: Offsets<T>) -> Self {
        o.client_rect()
    }
}
