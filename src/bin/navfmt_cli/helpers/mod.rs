// ABOUTME: Helper modules for the navfmt CLI
// ABOUTME: Output rendering shared by all commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
