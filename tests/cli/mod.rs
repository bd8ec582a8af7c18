//! Command-line front end tests

mod tests_lrtrace_cli;
