//! Tests for property service

#[cfg(test)]
mod mocks;
