//! Test modules for the autocomplete library.
//!
//! This module contains the cross-component tests:
//! - Scenario tests for the prefix index over the real trie
//! - Property-based tests using proptest
//! - Configuration and error handling tests
//! - Loader tests against files on disk
//! - Test fixtures and utilities
