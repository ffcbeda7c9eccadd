// Library root
// -----------
// The binary (`main.rs`) wires these modules into the interactive harness.
//
// Module responsibilities:
// - `config`: read-only settings loaded from the environment at startup.
// - `api`: blocking SharpAPI client (submit, poll for results) behind the
//   `SharpApi` trait.
// - `requests`: typed payloads for each asynchronous job endpoint.
// - `samples`: randomized sample input for every job.
// - `catalog`: the closed set of operations and how each one is run.
// - `ui`: the menu loop, "Run All" batch and error reporting.
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod requests;
pub mod samples;
pub mod ui;
