//! Expectations for frames in each phase
//!
//! Criteria describe frames settled inside a phase; the single frame on
//! which a transition happens still shows the previous phase's scales.

use std::ops::RangeInclusive;

use crate::animation::Phase;
use super::metrics::FrameMetrics;

pub struct FrameCriteria {
    pub title_prefix: String,
    /// Whether a tree must be drawn; `None` allows either
    pub tree: Option<bool>,
    /// Whether flowers must be showing; `None` allows either
    pub flowers: Option<bool>,
    pub seeds: RangeInclusive<usize>,
}

impl FrameCriteria {
    pub fn for_phase(phase: Phase) -> Self {
        let (tree, flowers, seeds) = match phase {
            Phase::Germination => (Some(false), Some(false), 1..=1),
            Phase::Seedling => (Some(true), Some(false), 1..=1),
            Phase::Growth => (Some(true), Some(false), 0..=0),
            // Petals are too small to draw for the first few frames
            Phase::Flowering => (Some(true), None, 0..=0),
            Phase::Dispersal => (Some(true), Some(true), 1..=1),
            // The tree shrinks away and its flowers close
            Phase::Reset => (None, None, 1..=1),
        };
        Self {
            title_prefix: format!("Phase {}:", phase.number()),
            tree,
            flowers,
            seeds,
        }
    }
}

/// Check metrics against criteria, returning a description of each failure
pub fn check_frame(metrics: &FrameMetrics, criteria: &FrameCriteria) -> Vec<String> {
    let mut failures = Vec::new();

    if !metrics.presented {
        failures.push("Frame was never presented".to_string());
    }

    match &metrics.title {
        Some(title) if title.starts_with(&criteria.title_prefix) => {}
        Some(title) => failures.push(format!(
            "Title {:?} does not start with {:?}",
            title, criteria.title_prefix
        )),
        None => failures.push("No phase title drawn".to_string()),
    }

    if let Some(expected) = criteria.tree {
        if metrics.has_tree() != expected {
            failures.push(format!(
                "Tree {} but {} expected",
                if metrics.has_tree() { "drawn" } else { "missing" },
                if expected { "one was" } else { "none was" }
            ));
        }
    }

    if let Some(expected) = criteria.flowers {
        let blooming = metrics.flowers() > 0;
        if blooming != expected {
            failures.push(format!(
                "{} flowers drawn, expected {}",
                metrics.flowers(),
                if expected { "some" } else { "none" }
            ));
        }
    }

    if !criteria.seeds.contains(&metrics.seeds) {
        failures.push(format!(
            "{} seeds drawn, expected {:?}",
            metrics.seeds, criteria.seeds
        ));
    }

    failures
}

/// Human-readable summary of a frame
pub fn generate_frame_report(metrics: &FrameMetrics) -> String {
    format!(
        r#"Frame Report
============
Title:         {}
Primitives:    {} lines / {} ellipses / {} rects
Branches:      {} bark / {} twig
Canopy top:    {}
Widest stroke: {:.1}px
Leaves:        {}
Flowers:       {} ({} petals)
Seeds:         {}
Grass blades:  {}
"#,
        metrics.title.as_deref().unwrap_or("-"),
        metrics.lines,
        metrics.ellipses,
        metrics.rects,
        metrics.bark_strokes,
        metrics.twig_strokes,
        metrics
            .canopy_top
            .map_or_else(|| "-".to_string(), |y| format!("y={:.0}", y)),
        metrics.widest_stroke,
        metrics.leaves,
        metrics.flowers(),
        metrics.petals,
        metrics.seeds,
        metrics.grass_blades,
    )
}
