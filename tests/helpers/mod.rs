// ABOUTME: Shared helpers for integration tests
// ABOUTME: Currently just the Axum oneshot request harness
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod axum_test;
