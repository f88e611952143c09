// Domain layer - Core models and pure chart computation
pub mod report;
pub mod scale;
pub mod scene;
