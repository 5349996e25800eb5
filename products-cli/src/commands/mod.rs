//! Command implementations for the products CLI

pub mod db_args;
pub mod init_db;
pub mod serve;

pub use db_args::DbArgs;
pub use init_db::{run_init_db, InitDbArgs};
pub use serve::{run_serve, ServeArgs};
