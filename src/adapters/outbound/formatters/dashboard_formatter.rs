use crate::monitoring::domain::{ConnectivityStatus, Device, SupplyLevels};
use crate::ports::outbound::InventoryFormatter;
use crate::shared::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Supply level at or below which a cell is highlighted as critical
const CRITICAL_LEVEL: i32 = 10;
/// Supply level at or below which a cell is highlighted as low
const LOW_LEVEL: i32 = 25;

const PLACEHOLDER: &str = "-";

/// Column widths: name, asset, ip, place, status, K, C, M, Y, pages, checked
const WIDTHS: [usize; 11] = [24, 10, 15, 22, 8, 5, 5, 5, 5, 9, 11];
const HEADERS: [&str; 11] = [
    "Name", "Asset", "IP", "Location", "Status", "K", "C", "M", "Y", "Pages", "Checked",
];

/// DashboardFormatter adapter rendering the inventory as a text table
///
/// Supply levels are only shown for online devices and only when readable.
/// Colours are optional so the output stays clean when piped.
pub struct DashboardFormatter {
    color: bool,
}

impl DashboardFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn status_cell(&self, status: ConnectivityStatus, width: usize) -> String {
        let padded = format!("{:<width$}", status.as_str(), width = width);
        if !self.color {
            return padded;
        }
        match status {
            ConnectivityStatus::Online => padded.green().to_string(),
            ConnectivityStatus::Offline => padded.red().to_string(),
            ConnectivityStatus::Unknown => padded.dimmed().to_string(),
        }
    }

    fn level_cell(&self, level: i32, online: bool, width: usize) -> String {
        if !online || level < 0 {
            return format!("{:>width$}", PLACEHOLDER, width = width);
        }
        let padded = format!("{:>width$}", format!("{}%", level), width = width);
        if !self.color {
            padded
        } else if level <= CRITICAL_LEVEL {
            padded.red().bold().to_string()
        } else if level <= LOW_LEVEL {
            padded.yellow().to_string()
        } else {
            padded
        }
    }

    fn supply_cells(&self, supplies: &SupplyLevels, online: bool) -> [String; 4] {
        [
            self.level_cell(supplies.black, online, WIDTHS[5]),
            self.level_cell(supplies.cyan, online, WIDTHS[6]),
            self.level_cell(supplies.magenta, online, WIDTHS[7]),
            self.level_cell(supplies.yellow, online, WIDTHS[8]),
        ]
    }

    fn header(&self) -> String {
        let line = HEADERS
            .iter()
            .zip(WIDTHS.iter())
            .map(|(h, w)| format!("{:<width$}", h, width = *w))
            .collect::<Vec<_>>()
            .join(" ");
        let line = line.trim_end().to_string();
        if self.color {
            line.bold().to_string()
        } else {
            line
        }
    }
}

impl Default for DashboardFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Cuts `text` to `width` characters, marking the cut with `~`
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return format!("{:<width$}", text, width = width);
    }
    let cut: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}~", cut)
}

fn place(device: &Device) -> String {
    match (device.location.as_deref(), device.sector.as_deref()) {
        (Some(location), Some(sector)) => format!("{} / {}", location, sector),
        (Some(location), None) => location.to_string(),
        (None, Some(sector)) => sector.to_string(),
        (None, None) => PLACEHOLDER.to_string(),
    }
}

impl InventoryFormatter for DashboardFormatter {
    fn format(&self, devices: &[Device]) -> Result<String> {
        let mut output = String::new();

        if devices.is_empty() {
            writeln!(output, "No printers to show.")?;
            return Ok(output);
        }

        writeln!(output, "{}", self.header())?;

        for device in devices {
            let snapshot = &device.snapshot;
            let online = snapshot.status == ConnectivityStatus::Online;
            let [k, c, m, y] = self.supply_cells(&snapshot.supplies, online);
            let pages = if snapshot.page_count >= 0 {
                snapshot.page_count.to_string()
            } else {
                PLACEHOLDER.to_string()
            };
            let checked = snapshot
                .last_checked
                .map(|at| at.with_timezone(&Local).format("%d/%m %H:%M").to_string())
                .unwrap_or_else(|| "never".to_string());

            let row = format!(
                "{} {} {} {} {} {} {} {} {} {:>pw$} {}",
                fit(&device.name, WIDTHS[0]),
                fit(&device.asset_tag, WIDTHS[1]),
                fit(&device.ip_address, WIDTHS[2]),
                fit(&place(device), WIDTHS[3]),
                self.status_cell(snapshot.status, WIDTHS[4]),
                k,
                c,
                m,
                y,
                pages,
                checked,
                pw = WIDTHS[9],
            );
            writeln!(output, "{}", row)?;

            if !snapshot.detailed_status.is_empty() {
                let detail = format!("  └ {}", snapshot.detailed_status);
                if self.color {
                    writeln!(output, "{}", detail.dimmed())?;
                } else {
                    writeln!(output, "{}", detail)?;
                }
            }
        }

        let online = devices
            .iter()
            .filter(|d| d.snapshot.status == ConnectivityStatus::Online)
            .count();
        writeln!(output)?;
        writeln!(
            output,
            "{} of {} printers online",
            online,
            devices.len()
        )?;

        Ok(output)
    }
}
