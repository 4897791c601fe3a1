// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Shared geometry utilities.

pub mod geometry;
pub mod simplify;
