// ABOUTME: JSON output helpers for strength-cli
// ABOUTME: Every command prints one pretty-printed JSON document on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_strength::AppResult;
use serde::Serialize;

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
