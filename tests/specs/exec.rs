// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the remote batch execution surface.

use std::time::Duration;

use brix_rex::fake::{FakeSession, FakeTransport};
use brix_rex::{cmds, Executor, TargetContainer, TimeoutOptions};

fn target() -> TargetContainer {
    TargetContainer::new("storage", "glusterfs-7kx", "glusterfs")
}

/// A device setup sequence runs to completion and every step's output is
/// index-aligned with its command.
#[tokio::test(start_paused = true)]
async fn device_setup_batch_runs_in_order() {
    let transport = FakeTransport::new().script([
        FakeSession::ok(""),
        FakeSession::ok("  Physical volume \"/dev/sdb\" successfully created.\n"),
        FakeSession::ok("  Volume group \"vg_abc\" successfully created\n"),
    ]);
    let executor = Executor::new(transport);
    let commands = cmds([
        "pvcreate --metadatasize=128M /dev/sdb",
        "pvs /dev/sdb",
        "vgcreate vg_abc /dev/sdb",
    ]);
    let topts = TimeoutOptions {
        timeout_minutes: 10,
        use_timeout_prefix: true,
    };

    let results = executor.run(&target(), &commands, topts).await.unwrap();

    assert_eq!(results.len(), 3);
    assert!(results.ok());
    assert!(results[2].output.contains("vg_abc"));

    // Every invocation carries the in-target timeout guard.
    for call in executor.transport().calls() {
        assert_eq!(&call[..2], &["timeout", "10m"]);
    }
}

/// A failing teardown step stops the batch; the caller sees the failure in
/// the results, not as a function error.
#[tokio::test(start_paused = true)]
async fn teardown_stops_cleanly_at_the_failing_step() {
    let transport = FakeTransport::new().script([
        FakeSession::ok(""),
        FakeSession::fail("  Volume group \"vg_abc\" not found\n"),
        FakeSession::ok(""),
    ]);
    let executor = Executor::new(transport);
    let commands = cmds([
        "umount /mnt/brick1",
        "vgremove -f vg_abc",
        "pvremove /dev/sdb",
    ]);
    let topts = TimeoutOptions {
        timeout_minutes: 5,
        use_timeout_prefix: false,
    };

    let results = executor.run(&target(), &commands, topts).await.unwrap();

    let (index, failure) = results.first_error().unwrap();
    assert_eq!(index, 1);
    assert_eq!(failure.exit_status, 1);
    assert!(failure.err_output.contains("not found"));
    assert_eq!(results.len(), 2);
    assert_eq!(executor.transport().calls().len(), 2);
}

/// A hung command trips the watchdog and surfaces as the batch error.
#[tokio::test(start_paused = true)]
async fn hung_command_times_out_the_batch() {
    let transport = FakeTransport::new().script([
        FakeSession::ok(""),
        FakeSession::ok("").delayed(Duration::from_secs(600)),
    ]);
    let executor = Executor::new(transport);
    let commands = cmds(["gluster volume stop vol0", "gluster volume delete vol0"]);
    let topts = TimeoutOptions {
        timeout_minutes: 1,
        use_timeout_prefix: false,
    };

    let err = executor.run(&target(), &commands, topts).await.unwrap_err();

    assert_eq!(err.command, "gluster volume delete vol0");
    assert_eq!(err.results.len(), 1);
    assert!(err.results.ok());
}
