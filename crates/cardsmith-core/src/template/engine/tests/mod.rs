//! Tests for template engine
//!
//! Organized into focused submodules by topic.

use super::*;

// Test helper functions
mod helpers;
