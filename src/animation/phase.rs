use std::fmt;

/// Stage of the tree's life cycle, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Germination,
    Seedling,
    Growth,
    Flowering,
    Dispersal,
    Reset,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Phase::Germination,
        Phase::Seedling,
        Phase::Growth,
        Phase::Flowering,
        Phase::Dispersal,
        Phase::Reset,
    ];

    /// Following phase; the cycle wraps from Reset back to Germination
    pub fn next(self) -> Phase {
        match self {
            Phase::Germination => Phase::Seedling,
            Phase::Seedling => Phase::Growth,
            Phase::Growth => Phase::Flowering,
            Phase::Flowering => Phase::Dispersal,
            Phase::Dispersal => Phase::Reset,
            Phase::Reset => Phase::Germination,
        }
    }

    /// 1-based position shown to the viewer
    pub fn number(self) -> u32 {
        match self {
            Phase::Germination => 1,
            Phase::Seedling => 2,
            Phase::Growth => 3,
            Phase::Flowering => 4,
            Phase::Dispersal => 5,
            Phase::Reset => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::Germination => "Seed Germination",
            Phase::Seedling => "Seedling (Leaves)",
            Phase::Growth => "Tree Growth",
            Phase::Flowering => "Flowering",
            Phase::Dispersal => "Seed Dispersal",
            Phase::Reset => "Cycle Reset",
        }
    }

    /// The seed is still underground and visible
    pub fn shows_buried_seed(self) -> bool {
        matches!(self, Phase::Germination | Phase::Seedling)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phase {}: {}", self.number(), self.name())
    }
}
