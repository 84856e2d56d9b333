pub mod classifier;

pub use classifier::SoilClassifier;
