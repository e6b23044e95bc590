//! Landing resolution
//!
//! The one interesting computation in Stack Drop: when the falling box
//! reaches the stack top, decide survive-vs-game-over from the horizontal
//! offset, trim the surviving geometry, and produce the debris fragment.

use super::state::{Debris, StackBox};

/// Result of resolving a landing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LandingOutcome {
    /// No overlap with the stack top; the run ends and no geometry changes
    Miss,
    /// Enough overlap to survive: the trimmed geometry plus the cut-off slice
    Stacked { x: f32, width: f32, debris: Debris },
}

/// Resolve the landing of `current` on top of `previous`.
///
/// `difference` is the signed horizontal offset between the two boxes.
/// A full miss (`|difference| >= width`) ends the run. Otherwise the
/// surviving box keeps only the overlapping span:
/// - overhang on the right: keep `x`, shrink the width by the overhang;
/// - overhang on the left: snap `x` to the box beneath and shrink likewise.
///
/// The debris covers exactly the overhang span at the landing height, with
/// a positive width (a zero-width debris means a perfect landing).
pub fn resolve_landing(current: &StackBox, previous: &StackBox) -> LandingOutcome {
    let difference = current.x - previous.x;

    if difference.abs() >= current.width {
        return LandingOutcome::Miss;
    }

    if difference > 0.0 {
        let width = current.width - difference;
        LandingOutcome::Stacked {
            x: current.x,
            width,
            debris: Debris {
                x: current.x + width,
                y: current.y,
                width: difference,
            },
        }
    } else {
        // difference <= 0: the slice sticks out to the left of the stack,
        // starting at the pre-snap x.
        LandingOutcome::Stacked {
            x: previous.x,
            width: current.width + difference,
            debris: Debris {
                x: current.x,
                y: current.y,
                width: -difference,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BOX_HEIGHT;
    use crate::sim::state::Color;

    fn boxed(x: f32, y: f32, width: f32) -> StackBox {
        StackBox {
            x,
            y,
            width,
            color: Color::WHITE,
        }
    }

    #[test]
    fn test_perfect_alignment_keeps_width() {
        let previous = boxed(60.0, 200.0, 200.0);
        let current = boxed(60.0, 250.0, 200.0);

        match resolve_landing(&current, &previous) {
            LandingOutcome::Stacked { x, width, debris } => {
                assert_eq!(x, 60.0);
                assert_eq!(width, 200.0);
                assert_eq!(debris.width, 0.0);
            }
            LandingOutcome::Miss => panic!("perfect landing must not miss"),
        }
    }

    #[test]
    fn test_right_overhang_trims_and_slices() {
        // x=250 w=200 against x=60: difference 190 < 200, a 10-wide sliver survives
        let previous = boxed(60.0, 200.0, 200.0);
        let current = boxed(250.0, 250.0, 200.0);

        match resolve_landing(&current, &previous) {
            LandingOutcome::Stacked { x, width, debris } => {
                assert_eq!(x, 250.0);
                assert_eq!(width, 10.0);
                // Debris covers the overhang beyond the trimmed right edge
                assert_eq!(debris.x, 260.0);
                assert_eq!(debris.width, 190.0);
                assert_eq!(debris.y, 250.0);
            }
            LandingOutcome::Miss => panic!("overlap of 10 must survive"),
        }
    }

    #[test]
    fn test_left_overhang_snaps_x() {
        let previous = boxed(60.0, 200.0, 200.0);
        let current = boxed(10.0, 250.0, 200.0);

        match resolve_landing(&current, &previous) {
            LandingOutcome::Stacked { x, width, debris } => {
                assert_eq!(x, 60.0);
                assert_eq!(width, 150.0);
                // Debris starts at the pre-snap x and spans the overhang
                assert_eq!(debris.x, 10.0);
                assert_eq!(debris.width, 50.0);
            }
            LandingOutcome::Miss => panic!("overlap of 150 must survive"),
        }
    }

    #[test]
    fn test_total_miss() {
        // x=300 w=50 against x=60 w=50: difference 240 >= 50, no overlap at all
        let previous = boxed(60.0, 200.0, 50.0);
        let current = boxed(300.0, 250.0, 50.0);
        assert_eq!(resolve_landing(&current, &previous), LandingOutcome::Miss);
    }

    #[test]
    fn test_miss_boundary_is_inclusive() {
        let previous = boxed(60.0, 200.0, 100.0);

        // |difference| == width on either side is a miss
        let right = boxed(160.0, 250.0, 100.0);
        assert_eq!(resolve_landing(&right, &previous), LandingOutcome::Miss);
        let left = boxed(-40.0, 250.0, 100.0);
        assert_eq!(resolve_landing(&left, &previous), LandingOutcome::Miss);

        // One unit inside the boundary survives with a sliver
        let sliver = boxed(159.0, 250.0, 100.0);
        match resolve_landing(&sliver, &previous) {
            LandingOutcome::Stacked { width, debris, .. } => {
                assert_eq!(width, 1.0);
                assert_eq!(debris.width, 99.0);
            }
            LandingOutcome::Miss => panic!("overlap of 1 must survive"),
        }
    }

    #[test]
    fn test_debris_height_matches_landing_plane() {
        let previous = boxed(60.0, 450.0, 200.0);
        let current = boxed(100.0, 450.0 + BOX_HEIGHT, 200.0);
        match resolve_landing(&current, &previous) {
            LandingOutcome::Stacked { debris, .. } => {
                assert_eq!(debris.y, current.y);
            }
            LandingOutcome::Miss => panic!("overlap of 160 must survive"),
        }
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The outcome is fully determined by the signed offset: at or
            /// past the box width it misses; inside it, the surviving box
            /// loses exactly |difference| of width, the debris has exactly
            /// |difference| of width, and x snaps to the rightmost left edge.
            #[test]
            fn resolution_matches_offset(
                prev_x in 0.0_f32..320.0,
                cur_x in -400.0_f32..720.0,
                width in 1.0_f32..200.0,
            ) {
                let previous = boxed(prev_x, 200.0, width);
                let current = boxed(cur_x, 250.0, width);
                let difference = cur_x - prev_x;

                match resolve_landing(&current, &previous) {
                    LandingOutcome::Miss => prop_assert!(difference.abs() >= width),
                    LandingOutcome::Stacked { x, width: new_width, debris } => {
                        prop_assert!(difference.abs() < width);
                        prop_assert_eq!(new_width, width - difference.abs());
                        prop_assert!(new_width > 0.0);
                        prop_assert_eq!(debris.width, difference.abs());
                        prop_assert_eq!(x, prev_x.max(cur_x));
                    }
                }
            }
        }
    }
}
