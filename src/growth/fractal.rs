//! Recursive fractal tree
//!
//! Every branch splits into a left, a right and a shorter centre branch
//! until the depth runs out. The whole tree is scaled by a single growth
//! factor, so the same shape is reproduced at every frame of the growth
//! phase and only its size changes.

use std::f32::consts::FRAC_PI_2;

use crate::data::TreeConfig;
use crate::math::{SeededRng, Vec2};

/// Below this growth scale no branch is produced
const MIN_SCALE: f32 = 0.1;
/// Branches deeper than this are woody
const BARK_DEPTH: u32 = 4;
/// Branches at or below this depth carry leaves once the tree is half grown
const LEAF_DEPTH: u32 = 3;
const LEAF_MIN_SCALE: f32 = 0.5;
const LEAVES_PER_BRANCH: usize = 3;
/// Branch ends at or below this depth can hold a flower
const FLOWER_DEPTH: u32 = 2;

/// Shape parameters for the branch fractal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchParams {
    pub trunk_length: f32,
    pub depth: u32,
    pub spread: f32,
    pub length_decay: f32,
    pub centre_decay: f32,
}

impl Default for BranchParams {
    fn default() -> Self {
        Self::from_config(&TreeConfig::default())
    }
}

impl BranchParams {
    pub fn from_config(tree: &TreeConfig) -> Self {
        Self {
            trunk_length: tree.trunk_length,
            depth: tree.depth,
            spread: tree.spread,
            length_decay: tree.length_decay,
            centre_decay: tree.centre_decay,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    /// Thick brown wood near the trunk
    Bark,
    /// Thin green outer branches
    Twig,
}

/// One drawable piece of the tree, in painter's order
#[derive(Debug, Clone, PartialEq)]
pub enum TreeElement {
    Branch {
        start: Vec2,
        end: Vec2,
        depth: u32,
        width: f32,
        kind: BranchKind,
    },
    Leaf {
        center: Vec2,
        radius: f32,
    },
    /// A branch tip where a flower may bloom
    FlowerSite(Vec2),
}

/// Grow the tree from `origin` at growth `scale`, returning its elements
/// depth first (each branch, its leaves and flower site, then its children).
///
/// Leaf placement draws from `rng`; pass a generator with the same seed on
/// every frame to keep the foliage steady.
pub fn grow_tree(
    origin: Vec2,
    scale: f32,
    params: &BranchParams,
    rng: &mut SeededRng,
) -> Vec<TreeElement> {
    let mut elements = Vec::new();
    grow_branch(
        &mut elements,
        rng,
        params,
        origin,
        params.trunk_length,
        FRAC_PI_2,
        params.depth,
        scale,
    );
    elements
}

#[allow(clippy::too_many_arguments)]
fn grow_branch(
    out: &mut Vec<TreeElement>,
    rng: &mut SeededRng,
    params: &BranchParams,
    start: Vec2,
    length: f32,
    angle: f32,
    depth: u32,
    scale: f32,
) {
    if depth == 0 || scale <= MIN_SCALE {
        return;
    }

    let scaled_length = length * scale;
    let end = start + (Vec2::from_angle(angle) * scaled_length).trunc();

    let thickness = (depth as f32 * scale).trunc();
    let (kind, width) = if depth > BARK_DEPTH {
        (BranchKind::Bark, thickness + 1.0)
    } else {
        (BranchKind::Twig, thickness.max(1.0))
    };

    out.push(TreeElement::Branch {
        start,
        end,
        depth,
        width,
        kind,
    });

    if depth <= LEAF_DEPTH && scale > LEAF_MIN_SCALE {
        let radius = (3.0 * scale).trunc();
        for _ in 0..LEAVES_PER_BRANCH {
            let jitter = Vec2::new(rng.range(-5, 5) as f32, rng.range(-5, 5) as f32);
            out.push(TreeElement::Leaf {
                center: end + jitter,
                radius,
            });
        }
    }

    if depth <= FLOWER_DEPTH {
        out.push(TreeElement::FlowerSite(end));
    }

    let child_length = length * params.length_decay;
    let next = depth - 1;
    grow_branch(out, rng, params, end, child_length, angle - params.spread, next, scale);
    grow_branch(out, rng, params, end, child_length, angle + params.spread, next, scale);
    grow_branch(
        out,
        rng,
        params,
        end,
        child_length * params.centre_decay,
        angle,
        next,
        scale,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grow(scale: f32) -> Vec<TreeElement> {
        let mut rng = SeededRng::new(42);
        grow_tree(Vec2::new(400.0, 510.0), scale, &BranchParams::default(), &mut rng)
    }

    fn count_branches(elements: &[TreeElement]) -> usize {
        elements
            .iter()
            .filter(|e| matches!(e, TreeElement::Branch { .. }))
            .count()
    }

    #[test]
    fn test_nothing_below_min_scale() {
        assert!(grow(0.1).is_empty());
        assert!(grow(0.0).is_empty());
    }

    #[test]
    fn test_full_tree_counts() {
        let elements = grow(1.0);

        // 3^0 + 3^1 + ... + 3^7
        assert_eq!(count_branches(&elements), 3280);

        let leaves = elements
            .iter()
            .filter(|e| matches!(e, TreeElement::Leaf { .. }))
            .count();
        // Depths 3, 2, 1 hold 3^5 + 3^6 + 3^7 branches, three leaves each
        assert_eq!(leaves, 3 * (243 + 729 + 2187));

        let sites = elements
            .iter()
            .filter(|e| matches!(e, TreeElement::FlowerSite(_)))
            .count();
        assert_eq!(sites, 729 + 2187);
    }

    #[test]
    fn test_trunk_geometry() {
        let elements = grow(1.0);
        match &elements[0] {
            TreeElement::Branch { start, end, depth, width, kind } => {
                assert_eq!(*start, Vec2::new(400.0, 510.0));
                // Straight up by the full trunk length (cos(pi/2) truncates to 0)
                assert_eq!(*end, Vec2::new(400.0, 360.0));
                assert_eq!(*depth, 8);
                assert_eq!(*width, 9.0);
                assert_eq!(*kind, BranchKind::Bark);
            }
            other => panic!("expected trunk, got {:?}", other),
        }
    }

    #[test]
    fn test_scaled_trunk() {
        let elements = grow(0.5);
        match &elements[0] {
            TreeElement::Branch { end, width, .. } => {
                assert_eq!(*end, Vec2::new(400.0, 435.0));
                assert_eq!(*width, 5.0);
            }
            other => panic!("expected trunk, got {:?}", other),
        }
    }

    #[test]
    fn test_no_leaves_on_young_tree() {
        let elements = grow(0.5);
        assert!(!elements.iter().any(|e| matches!(e, TreeElement::Leaf { .. })));
        assert_eq!(count_branches(&elements), 3280);
    }

    #[test]
    fn test_twigs_are_thin_and_green() {
        for element in grow(0.15) {
            if let TreeElement::Branch { depth, width, kind, .. } = element {
                assert!(width >= 1.0);
                if depth > 4 {
                    assert_eq!(kind, BranchKind::Bark);
                } else {
                    assert_eq!(kind, BranchKind::Twig);
                    assert_eq!(width, 1.0);
                }
            }
        }
    }

    #[test]
    fn test_leaves_stay_near_tips() {
        let elements = grow(1.0);
        let mut last_end = Vec2::ZERO;
        for element in &elements {
            match element {
                TreeElement::Branch { end, .. } => last_end = *end,
                TreeElement::Leaf { center, radius } => {
                    assert!((center.x - last_end.x).abs() <= 5.0);
                    assert!((center.y - last_end.y).abs() <= 5.0);
                    assert_eq!(*radius, 3.0);
                }
                TreeElement::FlowerSite(site) => assert_eq!(*site, last_end),
            }
        }
    }

    #[test]
    fn test_same_seed_same_tree() {
        assert_eq!(grow(0.9), grow(0.9));
    }

    #[test]
    fn test_shallow_tree() {
        let params = BranchParams {
            depth: 2,
            ..Default::default()
        };
        let mut rng = SeededRng::new(1);
        let elements = grow_tree(Vec2::ZERO, 1.0, &params, &mut rng);
        assert_eq!(count_branches(&elements), 4);
    }
}
