/// One supply/marker entry as reported by the device
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub name: String,
    /// Hex colour such as `#00FFFF`, when reported
    pub color: Option<String>,
    /// Percent remaining; negative values are device-specific "unknown" codes
    pub level: i32,
    /// IPP marker type keyword, e.g. `toner`, `ink-cartridge`, `waste-toner`
    pub marker_type: String,
}

impl Marker {
    pub fn new(
        name: impl Into<String>,
        color: Option<&str>,
        level: i32,
        marker_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.map(str::to_string),
            level,
            marker_type: marker_type.into(),
        }
    }

    /// Whether the marker is an ink or toner consumable
    pub fn is_consumable(&self) -> bool {
        let marker_type = self.marker_type.to_lowercase();
        marker_type.contains("toner") || marker_type.contains("ink")
    }
}

/// Raw, un-normalized status description returned by a device
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceDescription {
    pub state_message: Option<String>,
    pub sheets_completed: Option<i64>,
    pub markers: Vec<Marker>,
}
