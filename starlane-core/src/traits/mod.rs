pub mod weight_factor;

pub use weight_factor::IWeightFactor;
