//! Session layer tests
//!
//! - Table source resolution and input suggestion
//! - Request assembly and the no-send guarantee for malformed tables
//! - State machine transitions against collaborator doubles
//! - End-to-end sessions against the local server

mod tests_assembly;
mod tests_end_to_end;
mod tests_resolution;
mod tests_state_machine;
