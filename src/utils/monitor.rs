#[cfg(feature = "cli")]
use std::sync::Mutex;
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessesToUpdate, System};

#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    pub elapsed_time: Duration,
    pub memory_usage_mb: Option<u64>,
    pub peak_memory_mb: Option<u64>,
}

impl RunStats {
    pub fn summary(&self, phase: &str) -> String {
        match (self.memory_usage_mb, self.peak_memory_mb) {
            (Some(memory), Some(peak)) => format!(
                "{} - Total elapsed time (seconds): {}, Memory: {}MB, Peak: {}MB",
                phase,
                self.elapsed_time.as_secs(),
                memory,
                peak
            ),
            _ => format!(
                "{} - Total elapsed time (seconds): {}",
                phase,
                self.elapsed_time.as_secs()
            ),
        }
    }
}

#[cfg(feature = "cli")]
struct MemoryProbe {
    system: Mutex<System>,
    pid: Pid,
    peak_memory: Mutex<u64>,
}

#[cfg(feature = "cli")]
impl MemoryProbe {
    fn new() -> Option<Self> {
        let pid = sysinfo::get_current_pid().ok()?;
        Some(Self {
            system: Mutex::new(System::new()),
            pid,
            peak_memory: Mutex::new(0),
        })
    }

    /// Returns (current, peak) resident memory in MB.
    fn sample(&self) -> Option<(u64, u64)> {
        let mut system = self.system.lock().ok()?;
        system.refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);
        let memory_mb = system.process(self.pid)?.memory() / 1024 / 1024;

        let mut peak = self.peak_memory.lock().ok()?;
        *peak = (*peak).max(memory_mb);
        Some((memory_mb, *peak))
    }
}

/// Tracks elapsed time since the run started and, with the `cli` feature,
/// process memory.
pub struct SystemMonitor {
    start_time: Instant,
    #[cfg(feature = "cli")]
    memory: Option<MemoryProbe>,
}

impl SystemMonitor {
    pub fn new(memory_enabled: bool) -> Self {
        #[cfg(not(feature = "cli"))]
        let _ = memory_enabled;

        Self {
            start_time: Instant::now(),
            #[cfg(feature = "cli")]
            memory: if memory_enabled { MemoryProbe::new() } else { None },
        }
    }

    pub fn stats(&self) -> RunStats {
        #[cfg(feature = "cli")]
        let sample = self.memory.as_ref().and_then(MemoryProbe::sample);
        #[cfg(not(feature = "cli"))]
        let sample: Option<(u64, u64)> = None;

        RunStats {
            elapsed_time: self.start_time.elapsed(),
            memory_usage_mb: sample.map(|(memory, _)| memory),
            peak_memory_mb: sample.map(|(_, peak)| peak),
        }
    }
}

impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}
