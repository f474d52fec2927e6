//! Property-based invariant tests for the boundary clamp.
//!
//! These must hold for any popper, boundary, priority order, and escape
//! setting:
//!
//! 1. Width and height are never changed.
//! 2. Clamping is deterministic.
//! 3. Clamping its own output changes nothing.
//! 4. With escape off, a popper that fits ends inside the boundary once all
//!    four sides are checked.
//! 5. With escape on and the default policy, nothing moves.
//! 6. Each step only writes the coordinate of its own axis.
//! 7. The step trace ends where `clamp` ends.
//! 8. Any escape setting moves the popper no further than escape off would,
//!    side by side.

use popclamp::*;
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![
        Just(Side::Top),
        Just(Side::Right),
        Just(Side::Bottom),
        Just(Side::Left),
    ]
}

fn order_strategy() -> impl Strategy<Value = Vec<Side>> {
    proptest::collection::vec(side_strategy(), 1..=8)
}

fn placement_strategy() -> impl Strategy<Value = Placement> {
    (
        side_strategy(),
        prop_oneof![
            Just(None),
            Just(Some(Alignment::Start)),
            Just(Some(Alignment::End)),
        ],
    )
        .prop_map(|(side, alignment)| Placement { side, alignment })
}

fn escape_strategy() -> impl Strategy<Value = Escape> {
    (
        placement_strategy(),
        any::<bool>(),
        any::<bool>(),
        prop_oneof![Just(EscapePolicy::Always), Just(EscapePolicy::AxisAware)],
    )
        .prop_map(|(placement, with_reference, flipped, policy)| {
            Escape::new(placement)
                .with_reference(with_reference)
                .flipped(flipped)
                .policy(policy)
        })
}

// Integer-valued coordinates keep the arithmetic exact.
fn rect_strategy() -> impl Strategy<Value = Rect> {
    (-500i32..=500, -500i32..=500, 0i32..=400, 0i32..=400)
        .prop_map(|(x, y, w, h)| {
            Rect::new(x as f64, y as f64, w as f64, h as f64)
        })
}

fn boundary_strategy() -> impl Strategy<Value = Rect> {
    (-100i32..=100, -100i32..=100, 1i32..=600, 1i32..=600)
        .prop_map(|(x, y, w, h)| {
            Rect::new(x as f64, y as f64, w as f64, h as f64)
        })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Size is preserved
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn size_is_preserved(
        popper in rect_strategy(),
        boundaries in boundary_strategy(),
        order in order_strategy(),
        escape in escape_strategy(),
    ) {
        let out = clamp(popper, &boundaries, &order, &escape);
        prop_assert_eq!(out.width, popper.width);
        prop_assert_eq!(out.height, popper.height);
        prop_assert_eq!(out.right, popper.right);
        prop_assert_eq!(out.bottom, popper.bottom);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn clamp_is_deterministic(
        popper in rect_strategy(),
        boundaries in boundary_strategy(),
        order in order_strategy(),
        escape in escape_strategy(),
    ) {
        prop_assert_eq!(
            clamp(popper, &boundaries, &order, &escape),
            clamp(popper, &boundaries, &order, &escape)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn clamp_is_idempotent(
        popper in rect_strategy(),
        boundaries in boundary_strategy(),
        order in order_strategy(),
        escape in escape_strategy(),
    ) {
        let once = clamp(popper, &boundaries, &order, &escape);
        let twice = clamp(once, &boundaries, &order, &escape);
        prop_assert_eq!(once, twice, "order={:?}", order);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Containment with escape off
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fitting_popper_ends_inside(
        popper in rect_strategy(),
        boundaries in boundary_strategy(),
        extra in order_strategy(),
        placement in placement_strategy(),
    ) {
        prop_assume!(popper.fits_in(&boundaries));

        // Every side at least once, after a random prefix.
        let mut order = extra;
        order.extend(Side::ALL);

        let out = clamp(popper, &boundaries, &order, &Escape::new(placement));
        prop_assert!(
            out.normalized().is_within(&boundaries),
            "out={:?} boundaries={:?} order={:?}",
            out,
            boundaries,
            order
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Default escape policy disables clamping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn always_escape_is_identity(
        popper in rect_strategy(),
        boundaries in boundary_strategy(),
        order in order_strategy(),
        placement in placement_strategy(),
        flipped in any::<bool>(),
    ) {
        let escape = Escape::new(placement).with_reference(true).flipped(flipped);
        prop_assert_eq!(clamp(popper, &boundaries, &order, &escape), popper);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Steps write only their own axis
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn step_writes_own_axis(
        popper in rect_strategy(),
        boundaries in boundary_strategy(),
        side in side_strategy(),
        escape in escape_strategy(),
    ) {
        let step = clamp_side(popper, &boundaries, side, &escape);
        match side.axis() {
            Axis::Horizontal => prop_assert_eq!(step.after.top, popper.top),
            Axis::Vertical => prop_assert_eq!(step.after.left, popper.left),
        }
        if !step.violated || step.escaped {
            prop_assert!(!step.moved());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Trace agrees with clamp
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn trace_ends_at_clamp(
        popper in rect_strategy(),
        boundaries in boundary_strategy(),
        order in order_strategy(),
        escape in escape_strategy(),
    ) {
        let trace: Vec<ClampStep> = steps(popper, &boundaries, &order, &escape).collect();
        prop_assert_eq!(trace.len(), order.len());
        prop_assert_eq!(trace[0].before, popper);
        for (step, side) in trace.iter().zip(&order) {
            prop_assert_eq!(step.side, *side);
        }
        let last = trace.last().map(|s| s.after);
        prop_assert_eq!(last, Some(clamp(popper, &boundaries, &order, &escape)));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Escaping only ever suppresses moves
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn escape_only_suppresses(
        popper in rect_strategy(),
        boundaries in boundary_strategy(),
        side in side_strategy(),
        escape in escape_strategy(),
    ) {
        let trapped_escape = Escape::new(escape.original_placement);
        let trapped = clamp_side(popper, &boundaries, side, &trapped_escape);
        let step = clamp_side(popper, &boundaries, side, &escape);
        prop_assert_eq!(step.violated, trapped.violated);
        if !step.escaped {
            prop_assert_eq!(step.after, trapped.after);
        } else {
            prop_assert_eq!(step.after, popper);
        }
    }
}
