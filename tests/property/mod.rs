// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module

mod capacity;
mod tree_clone;
