use std::thread;

use proctop::config::USER_WIDTH;
use proctop::system::source::{HostSource, MetricsSource};

#[test]
fn host_sample_is_well_formed() {
    let source = HostSource::new();
    thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    let snapshot = source.sample();

    assert!(!snapshot.processes.is_empty(), "no processes sampled");
    for process in &snapshot.processes {
        assert!(!process.name.is_empty(), "pid {} has an empty name", process.pid);
        assert!(process.user.chars().count() <= USER_WIDTH);
        assert!(process.cpu_percent >= 0.0 && process.cpu_percent.is_finite());
        assert!(process.mem_percent >= 0.0 && process.mem_percent.is_finite());
    }

    let own_pid = std::process::id();
    assert!(
        snapshot.processes.iter().any(|p| p.pid == own_pid),
        "own pid {own_pid} missing from sample"
    );

    for usage in &snapshot.cpu_usage_per_core {
        assert!(usage.is_finite());
    }
    if let Some(mem) = snapshot.memory {
        assert!(mem.total_bytes > 0);
        assert!(mem.used_bytes <= mem.total_bytes);
    }
}

#[test]
fn overlapping_samples_from_threads_complete() {
    let source = std::sync::Arc::new(HostSource::new());
    let handles: Vec<_> = (0..3)
        .map(|_| {
            let source = std::sync::Arc::clone(&source);
            thread::spawn(move || source.sample().processes.len())
        })
        .collect();

    for handle in handles {
        let count = handle.join().expect("sampling thread panicked");
        assert!(count > 0);
    }
}

#[test]
fn cpu_count_is_known_before_sampling() {
    let source = HostSource::new();
    let cpus = source.cpu_count();
    assert!(cpus > 0, "host reported no CPUs");
    assert_eq!(source.sample().cpu_usage_per_core.len(), cpus);
}
