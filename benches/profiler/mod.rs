// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Hinterland-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Hinterland and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

fn env_parsed<T: FromStr + Copy>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok()).unwrap_or(default)
}

pub fn criterion() -> Criterion {
    let frequency = env_parsed("PROFILE_FREQ", 100i32).clamp(1, 1000);
    let sample_size = env_parsed("BENCH_SAMPLE_SIZE", 60usize).clamp(10, 200);
    let warmup_secs = env_parsed("BENCH_WARMUP_SECS", 3u64).clamp(1, 60);
    let measurement_secs = env_parsed("BENCH_MEASUREMENT_SECS", 5u64).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
