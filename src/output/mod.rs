//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_combination, print_groups_result, print_lookup_result, print_search_header,
    print_search_report, print_update_result,
};
