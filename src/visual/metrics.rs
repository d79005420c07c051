use crate::render::{Color, DrawCommand};

/// Counts of what was drawn in one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameMetrics {
    pub lines: usize,
    pub ellipses: usize,
    pub rects: usize,
    /// Woody branch strokes
    pub bark_strokes: usize,
    /// Green outer branch strokes
    pub twig_strokes: usize,
    pub grass_blades: usize,
    /// Leaf dots and seedling leaves
    pub leaves: usize,
    pub petals: usize,
    /// Buried, falling and landed seeds
    pub seeds: usize,
    pub widest_stroke: f32,
    /// Highest (smallest y) point reached by any branch
    pub canopy_top: Option<f32>,
    /// First text drawn, i.e. the phase title
    pub title: Option<String>,
    pub presented: bool,
}

impl FrameMetrics {
    /// Each flower has five petals
    pub fn flowers(&self) -> usize {
        self.petals / 5
    }

    pub fn has_tree(&self) -> bool {
        self.bark_strokes + self.twig_strokes > 0
    }
}

/// Summarise a frame's commands (see `RecordingCanvas::last_frame`)
pub fn analyze_commands(commands: &[DrawCommand]) -> FrameMetrics {
    let mut metrics = FrameMetrics::default();

    for command in commands {
        match command {
            DrawCommand::Line { from, to, color, width } => {
                metrics.lines += 1;
                metrics.widest_stroke = metrics.widest_stroke.max(*width);
                let is_branch = match *color {
                    Color::BARK => {
                        metrics.bark_strokes += 1;
                        true
                    }
                    Color::LEAF_GREEN => {
                        metrics.twig_strokes += 1;
                        true
                    }
                    Color::GRASS => {
                        metrics.grass_blades += 1;
                        false
                    }
                    _ => false,
                };
                if is_branch {
                    let top = from.y.min(to.y);
                    metrics.canopy_top = Some(metrics.canopy_top.map_or(top, |t| t.min(top)));
                }
            }
            DrawCommand::Ellipse { color, .. } => {
                metrics.ellipses += 1;
                match *color {
                    Color::LIGHT_GREEN => metrics.leaves += 1,
                    Color::PETAL => metrics.petals += 1,
                    Color::SEED => metrics.seeds += 1,
                    _ => {}
                }
            }
            DrawCommand::Rect { .. } => metrics.rects += 1,
            DrawCommand::Text { text, .. } => {
                if metrics.title.is_none() {
                    metrics.title = Some(text.clone());
                }
            }
            DrawCommand::Present => metrics.presented = true,
            DrawCommand::Clear(_) => {}
        }
    }

    metrics
}
