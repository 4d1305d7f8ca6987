// ABOUTME: Re-exports command modules for strength-cli
// ABOUTME: Provides access to analytics and program management commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analytics;
pub mod program;
