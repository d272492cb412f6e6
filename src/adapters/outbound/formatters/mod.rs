/// Formatter adapters for the inventory dashboard
mod dashboard_formatter;

pub use dashboard_formatter::DashboardFormatter;
