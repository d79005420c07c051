pub mod config;

pub use config::{
    CameraConfig, LifeCycleConfig, ScreenConfig, SeedConfig, TimingConfig, TreeConfig,
};
