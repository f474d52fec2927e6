//! The prevent-overflow modifier: one stage of a positioning pass.
//!
//! Upstream stages compute the popper's offsets and may flip its placement.
//! This stage resolves the boundary region through a [`LayoutEnvironment`],
//! clamps the offsets into it, and hands the pass on.
//!
//! A reference that has itself left the boundary is said to have "escaped".
//! The popper then either stays trapped inside the boundary, detached from
//! its reference, or, with `escape_with_reference`, follows the reference
//! out.

use num_traits::Float;

use crate::geometry::{Offsets, Rect};
use crate::options::PreventOverflow;
use crate::overflow::{Escape, OverflowError, clamp};
use crate::placement::Placement;

/// Element lookups the modifier needs from the host layout engine.
pub trait LayoutEnvironment<T: Float = f64> {
    /// Handle to an element in the host tree.
    type Element;

    /// Nearest positioned ancestor of `popper`. Bounds the popper when no
    /// boundaries element is configured.
    fn offset_parent(&self, popper: &Self::Element) -> Self::Element;

    /// Region `popper` may occupy inside `container`, already shrunk by
    /// `padding` on every side (see [`Rect::inset`]).
    fn boundaries(&self, popper: &Self::Element, padding: T, container: &Self::Element) -> Rect<T>;
}

/// State of one positioning pass, as seen by this modifier.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPass<T = f64, E = ()> {
    /// The popper element.
    pub popper: E,
    /// Popper position computed so far.
    pub offsets: Offsets<T>,
    /// Current placement, after any flip.
    pub placement: Placement,
    /// Placement requested before any flip.
    pub original_placement: Placement,
    /// Whether a flip already happened this pass.
    pub flipped: bool,
    /// Boundary region used by the last prevent-overflow run.
    pub boundaries: Option<Rect<T>>,
}

impl<T: Float, E> LayoutPass<T, E> {
    /// Fresh pass: unflipped, original placement equal to `placement`.
    pub fn new(popper: E, offsets: Offsets<T>, placement: Placement) -> Self {
        Self {
            popper,
            offsets,
            placement,
            original_placement: placement,
            flipped: false,
            boundaries: None,
        }
    }

    /// Record a flip to `placement`. The original placement is kept.
    pub fn flip_to(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self.flipped = true;
        self
    }

    /// Escape inputs for this pass under `options`.
    pub fn escape<O>(&self, options: &PreventOverflow<T, O>) -> Escape {
        Escape::new(self.original_placement)
            .with_reference(options.escape_with_reference)
            .policy(options.escape_policy)
            .flipped(self.flipped)
    }
}

impl<T: Float, E> PreventOverflow<T, E> {
    /// Run the modifier on `pass`.
    ///
    /// The container is `boundaries_element`, or the popper's offset parent.
    /// The resolved boundaries are stored in `pass.boundaries`; the clamped
    /// position replaces `pass.offsets`. Size is never changed.
    ///
    /// Options rejected by [`validate`](Self::validate) are returned as an
    /// error before the environment is consulted; `pass` is dropped.
    pub fn apply<Env>(
        &self,
        mut pass: LayoutPass<T, E>,
        env: &Env,
    ) -> Result<LayoutPass<T, E>, OverflowError>
    where
        Env: LayoutEnvironment<T, Element = E>,
    {
        self.validate()?;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "prevent_overflow",
            placement = %pass.placement,
            original = %pass.original_placement,
            flipped = pass.flipped,
            escape = self.escape_with_reference,
        )
        .entered();

        let offset_parent;
        let container = match &self.boundaries_element {
            Some(element) => element,
            None => {
                offset_parent = env.offset_parent(&pass.popper);
                &offset_parent
            }
        };
        let boundaries = env.boundaries(&pass.popper, self.padding, container);

        let popper = pass.offsets.client_rect();
        let escape = pass.escape(self);
        let clamped = clamp(popper, &boundaries, self.priority.as_slice(), &escape);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            dx = ?(clamped.left - popper.left).to_f64(),
            dy = ?(clamped.top - popper.top).to_f64(),
            "popper clamped"
        );

        pass.offsets = Offsets::from(clamped);
        pass.boundaries = Some(boundaries);
        Ok(pass)
    }
}
