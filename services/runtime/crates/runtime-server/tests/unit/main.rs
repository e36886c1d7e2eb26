//! Unit tests for the armada runtime server.
//!
//! These tests drive the application services through canned deployer port
//! implementations and run fast without external I/O.

mod instance_status_service;
