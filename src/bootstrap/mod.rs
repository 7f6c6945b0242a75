//! Node application bootstrapping.
//!
//! This module includes all the functions to build the application, its dependencies, and run the jobs.
//!
//! Jobs are tasks executed concurrently: the status API server and the
//! periodic cleanup of inactive peers. Each one can be disabled in the
//! configuration.
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;
