// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Markup editing: tools, undo history, viewport scaling and the
//! pointer-driven session that ties them together.

pub mod history;
pub mod session;
pub mod tools;
pub mod viewport;
