//! Trace renderer tests
