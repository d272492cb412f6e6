use crate::monitoring::domain::{
    DeviceDescription, StatusReport, SupplyLevels, SENTINEL, STATUS_UNAVAILABLE,
};
use crate::monitoring::policies::SupplyColorRule;

/// SupplyNormalizer turns a raw device description into a [`StatusReport`]
///
/// Markers with a negative level or a non-consumable type are skipped.
/// When several markers land in the same bucket the last one wins; no
/// attempt is made to prefer a hex match over a name match.
pub struct SupplyNormalizer;

impl SupplyNormalizer {
    pub fn normalize(description: &DeviceDescription) -> StatusReport {
        let detailed_status = description
            .state_message
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .unwrap_or(STATUS_UNAVAILABLE)
            .to_string();

        let page_count = description
            .sheets_completed
            .filter(|count| *count >= 0)
            .unwrap_or(i64::from(SENTINEL));

        let mut supplies = SupplyLevels::UNREADABLE;
        for marker in &description.markers {
            if marker.level < 0 || !marker.is_consumable() {
                continue;
            }
            if let Some(bucket) = SupplyColorRule::classify(marker) {
                supplies.set(bucket, marker.level);
            }
        }

        StatusReport {
            detailed_status,
            page_count,
            supplies,
        }
    }
}
