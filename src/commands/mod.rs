//! Command implementations

pub mod groups;
pub mod interactive;
pub mod lookup;
pub mod search;
pub mod update;

pub use groups::{GroupsReport, run_groups};
pub use interactive::run_interactive;
pub use lookup::{LookupReport, run_lookup};
pub use search::{SearchConfig, SearchReport, run_search};
pub use update::{UpdateReport, run_update};
