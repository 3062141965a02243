//! Core library modules for studylog.
//!
//! - **Records**: `record` (model and row encoding), `duration` (duration text codec)
//! - **Persistence**: `store` (table contract and backends), `service` (CRUD and validation)
//! - **Presentation**: `view`, `stats`, `export`, `messages`
//! - **Infrastructure**: `config`, `data_storage`, `error`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studylog::libs::config::Config;
//! use studylog::libs::service::RecordService;
//! use studylog::libs::store::Backend;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let service = RecordService::new(Backend::from_config(&config)?);
//! for record in service.list().await? {
//!     println!("{} {}", record.id, record.duration);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod duration;
pub mod error;
pub mod export;
pub mod messages;
pub mod record;
pub mod service;
pub mod stats;
pub mod store;
pub mod view;
