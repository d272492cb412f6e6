use crate::monitoring::domain::{ConnectivityStatus, Device};

/// PrinterFilter - Dashboard filter by unit and connectivity status
#[derive(Debug, Clone, Default)]
pub struct PrinterFilter {
    pub unit: Option<String>,
    pub status: Option<ConnectivityStatus>,
}

impl PrinterFilter {
    pub fn new(unit: Option<String>, status: Option<ConnectivityStatus>) -> Self {
        Self { unit, status }
    }

    pub fn matches(&self, device: &Device) -> bool {
        let unit_matches = match &self.unit {
            Some(unit) => device.unit.as_deref() == Some(unit.as_str()),
            None => true,
        };
        let status_matches = match self.status {
            Some(status) => device.snapshot.status == status,
            None => true,
        };
        unit_matches && status_matches
    }
}
