// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use hinterland::model::TargetList;
use hinterland::reconcile::reconcile;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group name in this file: `reconcile.merge`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `first_scan_676`, `rescan_churned_676`).
// - If implementations move/deduplicate, update the wiring but do not rename
//   group or case IDs.
fn checksum_list(list: &TargetList) -> u64 {
    let mut acc = 0u64;
    acc = acc.wrapping_mul(131).wrapping_add(list.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(list.present_count() as u64);
    for (slot, _) in list.iter_present() {
        acc = acc.wrapping_mul(131).wrapping_add(slot as u64);
    }
    acc
}

fn benches_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile.merge");

    for (case, count) in [("first_scan_100", 100usize), ("first_scan_676", 676)] {
        let scanned = fixtures::target_grid(count);
        let empty = TargetList::new();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(case, move |b| {
            b.iter(|| {
                let merged = reconcile(black_box(&empty), black_box(&scanned));
                black_box(checksum_list(&merged))
            })
        });
    }

    // Steady state: the page did not change between two scans.
    {
        let previous = fixtures::settled_list(676);
        let scanned = fixtures::target_grid(676);
        group.throughput(Throughput::Elements(676));
        group.bench_function("rescan_identical_676", move |b| {
            b.iter(|| {
                let merged = reconcile(black_box(&previous), black_box(&scanned));
                black_box(checksum_list(&merged))
            })
        });
    }

    // A quarter of the boxes moved, reading as vanish plus appear.
    {
        let previous = fixtures::settled_list(676);
        let scanned = fixtures::churned_grid(676, 4);
        group.throughput(Throughput::Elements(676));
        group.bench_function("rescan_churned_676", move |b| {
            b.iter(|| {
                let merged = reconcile(black_box(&previous), black_box(&scanned));
                black_box(checksum_list(&merged))
            })
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_reconcile
}
criterion_main!(benches);
