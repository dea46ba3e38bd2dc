use std::process::Command;

/// Test that the simulation runs in headless mode without crashing
#[test]
fn test_headless_simulation_runs() {
    let output = Command::new(env!("CARGO_BIN_EXE_grid_traffic"))
        .args(["--ticks", "120", "--placement-seed", "7"])
        .env("RUST_LOG", "warn,grid_traffic=info")
        .output()
        .expect("Failed to execute simulation");

    assert!(
        output.status.success(),
        "Simulation failed to run in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SIMULATION COMPLETE"),
        "Simulation did not complete properly. stderr: {}",
        stderr
    );
}

/// Test that the summary statistics are logged
#[test]
fn test_simulation_statistics_logged() {
    let output = Command::new(env!("CARGO_BIN_EXE_grid_traffic"))
        .args(["--ticks", "60", "--placement-seed", "7"])
        .env("RUST_LOG", "warn,grid_traffic=info")
        .output()
        .expect("Failed to execute simulation");

    assert!(output.status.success(), "Simulation failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Total intersections: 12"),
        "Missing 'Total intersections' statistic"
    );
    // 2*3*3 horizontal + 2*4*2 vertical directed roads
    assert!(stderr.contains("Total roads: 34"), "Missing 'Total roads' statistic");
    assert!(stderr.contains("Route: (1, 1)"), "Missing route");
    assert!(stderr.contains("-> (4, 3)"), "Route does not end at the far corner");
}

/// Test that pause and resume frames are honoured
#[test]
fn test_pause_and_resume_flags() {
    let output = Command::new(env!("CARGO_BIN_EXE_grid_traffic"))
        .args([
            "--ticks",
            "90",
            "--pause-at",
            "30",
            "--resume-at",
            "60",
            "--report-every",
            "45",
        ])
        .env("RUST_LOG", "warn,grid_traffic=info")
        .output()
        .expect("Failed to execute simulation");

    assert!(output.status.success(), "Simulation failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Pausing at frame 30"));
    assert!(stderr.contains("Resuming at frame 60"));
    assert!(stderr.contains("--- Frame 45 (14 vehicles, paused) ---"));
    assert!(stderr.contains("--- Frame 90 (14 vehicles) ---"));
}

/// Test that a bad configuration is reported instead of silently degraded
#[test]
fn test_invalid_configuration_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_grid_traffic"))
        .args(["--vehicles", "14", "--vertical", "20"])
        .env("RUST_LOG", "warn,grid_traffic=info")
        .output()
        .expect("Failed to execute simulation");

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to initialize the simulation"),
        "Unexpected stderr: {}",
        stderr
    );
}
