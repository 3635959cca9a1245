pub mod core;

pub use core::{build_admin_pool, connect, orchestrate_migration, orchestrate_migration_internal};
