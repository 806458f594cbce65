// Copyright 2026 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmark-only crate; see the `benches/` directory.
