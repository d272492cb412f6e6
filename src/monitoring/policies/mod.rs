/// Business rules for supply classification and sweep scheduling
pub mod refresh_policy;
pub mod supply_color;

pub use refresh_policy::{RefreshPolicy, SweepTrigger, DEFAULT_REFRESH_INTERVAL};
pub use supply_color::SupplyColorRule;
