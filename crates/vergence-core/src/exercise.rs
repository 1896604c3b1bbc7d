use crate::engine::EngineConfig;

/// The available exercises and their per-exercise movement step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExerciseKind {
    #[default]
    Triangle,
    PulsingDots,
    Car3d,
    NeonRings,
    RainbowCubes,
    FloatingSpheres,
    DiamondPrisms,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 7] = [
        ExerciseKind::Triangle,
        ExerciseKind::PulsingDots,
        ExerciseKind::Car3d,
        ExerciseKind::NeonRings,
        ExerciseKind::RainbowCubes,
        ExerciseKind::FloatingSpheres,
        ExerciseKind::DiamondPrisms,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ExerciseKind::Triangle => "Triangle Exercise",
            ExerciseKind::PulsingDots => "Pulsing Dots",
            ExerciseKind::Car3d => "3D Car Exercise",
            ExerciseKind::NeonRings => "Neon Rings",
            ExerciseKind::RainbowCubes => "Rainbow Cubes",
            ExerciseKind::FloatingSpheres => "Floating Spheres",
            ExerciseKind::DiamondPrisms => "Diamond Prisms",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ExerciseKind::Triangle => "triangle",
            ExerciseKind::PulsingDots => "pulsing-dots",
            ExerciseKind::Car3d => "3d-car",
            ExerciseKind::NeonRings => "neon-rings",
            ExerciseKind::RainbowCubes => "rainbow-cubes",
            ExerciseKind::FloatingSpheres => "floating-spheres",
            ExerciseKind::DiamondPrisms => "diamond-prisms",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }

    #[inline]
    pub fn base_step(self) -> i32 {
        match self {
            ExerciseKind::Triangle => 5,
            ExerciseKind::PulsingDots | ExerciseKind::Car3d | ExerciseKind::RainbowCubes => 4,
            ExerciseKind::NeonRings => 7,
            ExerciseKind::FloatingSpheres => 6,
            ExerciseKind::DiamondPrisms => 3,
        }
    }

    /// Default engine configuration with this exercise's step.
    pub fn engine_config(self) -> EngineConfig {
        EngineConfig::default().with_base_step(self.base_step())
    }
}
