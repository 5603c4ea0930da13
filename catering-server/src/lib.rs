//! Catering Server - quote and booking service for caterers
//!
//! # Architecture
//!
//! ```text
//! catering-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── services/      # router assembly, quote resolution, booking
//! ├── db/            # SQLite pool, migrations, repositories
//! └── utils/         # errors, logging, validation
//! ```
//!
//! All pricing goes through `shared::pricing::compute_quote`; orders store
//! the result at booking time and are never re-priced.

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use services::build_router;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, prepare the work directory and start logging
pub fn setup_environment(config: &Config) -> std::io::Result<()> {
    std::fs::create_dir_all(&config.work_dir)?;
    std::fs::create_dir_all(&config.log_dir)?;
    init_logger_with_file(&config.log_level, Some(&config.log_dir));
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______      __            _
  / ____/___ _/ /____  _____(_)___  ____ _
 / /   / __ `/ __/ _ \/ ___/ / __ \/ __ `/
/ /___/ /_/ / /_/  __/ /  / / / / / /_/ /
\____/\__,_/\__/\___/_/  /_/_/ /_/\__, /
                                 /____/
    "#
    );
}
