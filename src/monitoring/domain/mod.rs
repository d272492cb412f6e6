pub mod description;
pub mod device;
pub mod outcome;
pub mod snapshot;

pub use description::{DeviceDescription, Marker};
pub use device::{Device, DeviceId};
pub use outcome::{Outcome, StatusReport};
pub use snapshot::{
    ConnectivityStatus, Snapshot, SupplyBucket, SupplyLevels, NOT_CHECKED, NO_RESPONSE,
    PROTOCOL_UNRESPONSIVE, SENTINEL, STATUS_UNAVAILABLE,
};
