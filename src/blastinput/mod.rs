//! Command-line arguments
//!
//! - `blast_args` - report reading options shared by all commands
//! - one `*_args` module per subcommand

pub mod blast_args;
pub mod cover_args;
pub mod csv_args;
pub mod list_args;
pub mod ortho_args;
pub mod store_args;

pub use blast_args::ReadOptions;
pub use cover_args::CoverArgs;
pub use csv_args::CsvArgs;
pub use list_args::ListArgs;
pub use ortho_args::OrthoArgs;
pub use store_args::StoreArgs;
