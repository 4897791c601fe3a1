// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for markup shapes and review comments.

pub mod comment;
pub mod shape;
