use crate::ports::outbound::ConnectivityProber;
use async_trait::async_trait;
use std::net::IpAddr;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

pub const DEFAULT_PING_PROGRAM: &str = "ping";
pub const DEFAULT_PING_TIMEOUT: Duration = Duration::from_secs(2);
pub const DEFAULT_PING_DEADLINE: Duration = Duration::from_secs(5);

/// SystemPingProber adapter checking reachability with one ICMP echo
///
/// Runs the platform `ping` utility with a single echo request. The device is
/// reachable only if the utility exits successfully within `deadline`; any
/// failure to launch, non-zero exit or overrun counts as unreachable.
pub struct SystemPingProber {
    program: String,
    timeout: Duration,
    deadline: Duration,
}

impl SystemPingProber {
    pub fn new(timeout: Duration, deadline: Duration) -> Self {
        Self {
            program: DEFAULT_PING_PROGRAM.to_string(),
            timeout,
            deadline,
        }
    }

    /// Uses a different executable in place of `ping`
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn arguments(&self, address: &str) -> Vec<String> {
        PingFlavor::current().arguments(self.timeout, address)
    }
}

/// Command-line dialect of the platform `ping`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PingFlavor {
    /// `-n 1 -w <ms>`
    Windows,
    /// macOS and the BSDs read `-W` as milliseconds; `-t <secs>` bounds the run
    Bsd,
    /// iputils and busybox: `-W <secs>`
    Linux,
}

impl PingFlavor {
    fn current() -> Self {
        if cfg!(windows) {
            PingFlavor::Windows
        } else if cfg!(any(
            target_os = "macos",
            target_os = "ios",
            target_os = "freebsd",
            target_os = "openbsd",
            target_os = "netbsd",
            target_os = "dragonfly"
        )) {
            PingFlavor::Bsd
        } else {
            PingFlavor::Linux
        }
    }

    fn arguments(self, timeout: Duration, address: &str) -> Vec<String> {
        let whole_secs = timeout.as_secs().max(1).to_string();
        let (count_flag, wait_flag, wait) = match self {
            PingFlavor::Windows => ("-n", "-w", timeout.as_millis().max(1).to_string()),
            PingFlavor::Bsd => ("-c", "-t", whole_secs),
            PingFlavor::Linux => ("-c", "-W", whole_secs),
        };
        vec![
            count_flag.to_string(),
            "1".to_string(),
            wait_flag.to_string(),
            wait,
            address.to_string(),
        ]
    }
}

impl Default for SystemPingProber {
    fn default() -> Self {
        Self::new(DEFAULT_PING_TIMEOUT, DEFAULT_PING_DEADLINE)
    }
}

/// Accepts IP literals and DNS-style host names only
///
/// Anything else, including values starting with `-` that `ping` would read
/// as an option, is rejected before a process is spawned.
pub fn is_probeable_address(address: &str) -> bool {
    if address.is_empty() || address.starts_with('-') {
        return false;
    }
    if address.parse::<IpAddr>().is_ok() {
        return true;
    }
    address.len() <= 253
        && address
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}

#[async_trait]
impl ConnectivityProber for SystemPingProber {
    async fn is_reachable(&self, address: &str) -> bool {
        let address = address.trim();
        if !is_probeable_address(address) {
            debug!(address, "address rejected before probing");
            return false;
        }

        let mut child = match Command::new(&self.program)
            .args(self.arguments(address))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                debug!(address, program = %self.program, error = %e, "could not launch ping");
                return false;
            }
        };

        match tokio::time::timeout(self.deadline, child.wait()).await {
            Ok(Ok(status)) => status.success(),
            Ok(Err(e)) => {
                debug!(address, error = %e, "ping did not complete");
                false
            }
            Err(_) => {
                debug!(address, "ping exceeded its deadline");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_validation() {
        assert!(is_probeable_address("192.168.1.20"));
        assert!(is_probeable_address("fe80::1"));
        assert!(is_probeable_address("printer-3.office.local"));
        assert!(!is_probeable_address(""));
        assert!(!is_probeable_address("-f"));
        assert!(!is_probeable_address("10.0.0.1; rm -rf /"));
        assert!(!is_probeable_address("host name"));
    }

    #[test]
    fn test_wait_units_per_platform() {
        let timeout = Duration::from_secs(2);
        assert_eq!(
            PingFlavor::Linux.arguments(timeout, "10.0.0.9"),
            vec!["-c", "1", "-W", "2", "10.0.0.9"]
        );
        assert_eq!(
            PingFlavor::Bsd.arguments(timeout, "10.0.0.9"),
            vec!["-c", "1", "-t", "2", "10.0.0.9"]
        );
        assert_eq!(
            PingFlavor::Windows.arguments(timeout, "10.0.0.9"),
            vec!["-n", "1", "-w", "2000", "10.0.0.9"]
        );
    }

    #[test]
    fn test_sub_second_timeout_rounds_up_to_one_second() {
        let args = PingFlavor::Linux.arguments(Duration::from_millis(300), "printer-1");
        assert_eq!(args[3], "1");
        let args = PingFlavor::Windows.arguments(Duration::from_millis(300), "printer-1");
        assert_eq!(args[3], "300");
    }

    #[test]
    fn test_arguments_end_with_address() {
        let prober = SystemPingProber::default();
        let args = prober.arguments("10.0.0.9");
        assert_eq!(args.last().map(String::as_str), Some("10.0.0.9"));
        assert_eq!(args.len(), 5);
    }

    #[tokio::test]
    async fn test_missing_program_is_unreachable() {
        let prober = SystemPingProber::default().with_program("printwatch-no-such-ping");
        assert!(!prober.is_reachable("127.0.0.1").await);
    }

    #[tokio::test]
    async fn test_invalid_address_is_unreachable() {
        let prober = SystemPingProber::default().with_program("true");
        assert!(!prober.is_reachable("").await);
        assert!(!prober.is_reachable("--help").await);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_exit_status_decides_reachability() {
        let ok = SystemPingProber::default().with_program("true");
        assert!(ok.is_reachable("10.0.0.1").await);

        let failing = SystemPingProber::default().with_program("false");
        assert!(!failing.is_reachable("10.0.0.1").await);
    }
}
