// ABOUTME: Re-exports helper modules for strength-cli
// ABOUTME: Provides argument parsing, snapshot loading, and JSON output utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod input;
pub mod output;
