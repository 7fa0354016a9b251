//! Tests for deposit order service
