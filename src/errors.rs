// ABOUTME: Error types for measurement formatting re-exported from navfmt-core
// ABOUTME: Keeps crate::errors paths stable for library and binary callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use navfmt_core::errors::*;
