/// Domain services
pub mod supply_normalizer;

pub use supply_normalizer::SupplyNormalizer;
