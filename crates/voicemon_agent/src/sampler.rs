//! System sampling and report composition.
//!
//! Gathers CPU, memory, disk, battery, network, and uptime readings and
//! shapes them into the report the responder ingests. A reading that cannot
//! be taken becomes an absent field, never an error.

use std::fs;
use std::path::Path;
use sysinfo::{Disks, Networks, System, MINIMUM_CPU_UPDATE_INTERVAL};
use voicemon_common::report::{
    BatteryStats, CpuStats, DiskStats, MemoryStats, NetworkStats, ReportPayload, ReportStats,
    SystemInfoStats,
};

const GB: f64 = 1024.0 * 1024.0 * 1024.0;
const MB: f64 = 1024.0 * 1024.0;

/// Sample the host and compose a full report.
pub async fn collect_report(disk_mount: &str) -> ReportPayload {
    let mut sys = System::new();

    // Two CPU refreshes with a pause in between give a real usage delta.
    sys.refresh_cpu();
    tokio::time::sleep(MINIMUM_CPU_UPDATE_INTERVAL).await;
    sys.refresh_cpu();
    sys.refresh_memory();

    let cpus = sys.cpus();
    let cpu_percent = if cpus.is_empty() {
        None
    } else {
        let total: f64 = cpus.iter().map(|cpu| cpu.cpu_usage() as f64).sum();
        Some(round1(total / cpus.len() as f64))
    };
    let cores = num_cpus::get();
    let frequency_mhz = cpus.first().map(|cpu| cpu.frequency() as f64);

    let total_memory = sys.total_memory() as f64;
    let memory_percent = if total_memory > 0.0 {
        Some(round1(sys.used_memory() as f64 / total_memory * 100.0))
    } else {
        None
    };

    let disk = sample_disk(disk_mount);
    let battery = sample_battery();
    let network = sample_network();

    let os = System::name().unwrap_or_else(|| "Unknown".to_string());
    let os_version = System::os_version().unwrap_or_default();
    let architecture = System::cpu_arch().unwrap_or_default();
    let uptime = format_uptime(System::uptime());

    let summary = compose_summary(
        &os,
        &os_version,
        cores,
        cpu_percent.unwrap_or(0.0),
        memory_percent.unwrap_or(0.0),
        disk.as_ref().and_then(|d| d.free_gb),
        &battery_sentence(battery.as_ref()),
        &uptime,
    );

    ReportPayload {
        summary: Some(summary),
        stats: Some(ReportStats {
            cpu: Some(CpuStats {
                usage_percent: cpu_percent,
                cores: Some(cores as u32),
                frequency_mhz,
            }),
            memory: Some(MemoryStats {
                total_gb: Some(round2(total_memory / GB)),
                available_gb: Some(round2(sys.available_memory() as f64 / GB)),
                used_percent: memory_percent,
            }),
            disk,
            battery: battery.as_ref().map(|b| BatteryStats {
                charging: Some(b.charging),
                percentage: Some(b.percent),
            }),
            network: Some(network),
            system: Some(SystemInfoStats {
                os: Some(os),
                os_version: Some(os_version),
                architecture: Some(architecture),
                uptime: Some(uptime),
            }),
        }),
    }
}

fn sample_disk(mount: &str) -> Option<DiskStats> {
    let disks = Disks::new_with_refreshed_list();
    for disk in disks.list() {
        if disk.mount_point().to_str() == Some(mount) {
            let total = disk.total_space() as f64;
            let free = disk.available_space() as f64;
            let used = total - free;
            let used_percent = if total > 0.0 {
                Some(round1(used / total * 100.0))
            } else {
                None
            };
            return Some(DiskStats {
                total_gb: Some(round2(total / GB)),
                used_gb: Some(round2(used / GB)),
                free_gb: Some(round2(free / GB)),
                used_percent,
            });
        }
    }
    None
}

struct BatterySample {
    percent: f64,
    charging: bool,
}

/// Read the first battery under /sys/class/power_supply, if any.
fn sample_battery() -> Option<BatterySample> {
    let entries = fs::read_dir("/sys/class/power_supply").ok()?;

    let mut battery: Option<BatterySample> = None;
    let mut mains_online = false;

    for entry in entries.flatten() {
        let path = entry.path();
        let read = |name: &str| -> Option<String> {
            fs::read_to_string(path.join(name))
                .ok()
                .map(|s| s.trim().to_string())
        };

        match read("type").as_deref() {
            Some("Mains") => {
                if read("online").as_deref() == Some("1") {
                    mains_online = true;
                }
            }
            Some("Battery") if battery.is_none() => {
                if let Some(percent) = read("capacity").and_then(|v| v.parse::<f64>().ok()) {
                    let status = read("status").unwrap_or_default();
                    battery = Some(BatterySample {
                        percent,
                        charging: status == "Charging" || status == "Full",
                    });
                }
            }
            _ => {}
        }
    }

    battery.map(|mut b| {
        b.charging = b.charging || mains_online;
        b
    })
}

fn battery_sentence(battery: Option<&BatterySample>) -> String {
    match battery {
        Some(b) => format!(
            "Battery is at {}% and {}.",
            b.percent,
            if b.charging { "charging" } else { "not charging" }
        ),
        None => "No battery detected.".to_string(),
    }
}

fn sample_network() -> NetworkStats {
    let networks = Networks::new_with_refreshed_list();
    let mut sent: u64 = 0;
    let mut received: u64 = 0;
    for (_name, data) in networks.list() {
        sent += data.total_transmitted();
        received += data.total_received();
    }
    NetworkStats {
        sent_mb: Some(round2(sent as f64 / MB)),
        received_mb: Some(round2(received as f64 / MB)),
    }
}

/// Format uptime the way a wall clock reads, e.g. "2 days, 3:04:05".
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;
    let clock = format!("{}:{:02}:{:02}", hours, minutes, seconds);
    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}

#[allow(clippy::too_many_arguments)]
fn compose_summary(
    os: &str,
    os_version: &str,
    cores: usize,
    cpu_percent: f64,
    memory_percent: f64,
    disk_free_gb: Option<f64>,
    battery_text: &str,
    uptime: &str,
) -> String {
    let disk_phrase = match disk_free_gb {
        Some(free) => format!("Disk has {} GB free.", free),
        None => "Disk information is unavailable.".to_string(),
    };
    format!(
        "Your system is running {} {} with {} CPU cores. \
         CPU is at {}% usage, and memory is {}% used. \
         {} {} The system has been running for {}.",
        os, os_version, cores, cpu_percent, memory_percent, disk_phrase, battery_text, uptime
    )
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Battery presence check used at startup logging.
pub fn has_battery() -> bool {
    Path::new("/sys/class/power_supply/BAT0").exists()
        || Path::new("/sys/class/power_supply/BAT1").exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_format_uptime_clock_only() {
        assert_eq!(format_uptime(0), "0:00:00");
        assert_eq!(format_uptime(3 * 3600 + 4 * 60 + 5), "3:04:05");
    }

    #[test]
    fn test_format_uptime_with_days() {
        assert_eq!(format_uptime(86_400 + 7), "1 day, 0:00:07");
        assert_eq!(
            format_uptime(2 * 86_400 + 3 * 3600 + 4 * 60 + 5),
            "2 days, 3:04:05"
        );
    }

    #[test]
    fn test_rounding_helpers() {
        assert_relative_eq!(round1(42.34), 42.3);
        assert_relative_eq!(round1(7.06), 7.1);
        assert_relative_eq!(round2(98.764), 98.76);
        assert_relative_eq!(round2(0.128), 0.13);
    }

    #[test]
    fn test_battery_sentence() {
        let charging = BatterySample {
            percent: 95.0,
            charging: true,
        };
        assert_eq!(
            battery_sentence(Some(&charging)),
            "Battery is at 95% and charging."
        );

        let draining = BatterySample {
            percent: 40.0,
            charging: false,
        };
        assert_eq!(
            battery_sentence(Some(&draining)),
            "Battery is at 40% and not charging."
        );

        assert_eq!(battery_sentence(None), "No battery detected.");
    }

    #[test]
    fn test_compose_summary_shape() {
        let summary = compose_summary(
            "Linux",
            "6.1",
            8,
            12.5,
            48.9,
            Some(123.45),
            "No battery detected.",
            "1 day, 2:03:04",
        );
        assert!(summary.starts_with("Your system is running Linux 6.1 with 8 CPU cores."));
        assert!(summary.contains("CPU is at 12.5% usage, and memory is 48.9% used."));
        assert!(summary.contains("Disk has 123.45 GB free."));
        assert!(summary.contains("No battery detected."));
        assert!(summary.ends_with("The system has been running for 1 day, 2:03:04."));
    }

    #[test]
    fn test_compose_summary_without_disk() {
        let summary = compose_summary(
            "Linux",
            "6.1",
            4,
            5.0,
            20.0,
            None,
            "No battery detected.",
            "0:10:00",
        );
        assert!(summary.contains("Disk information is unavailable."));
    }
}
