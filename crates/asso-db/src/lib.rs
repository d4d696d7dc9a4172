//! # asso-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `asso-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives over the legacy
//!   French-named schema
//! - Model → entity mappers (the single place where legacy column values
//!   are normalized)
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use asso_db::pool::{create_pool, DatabaseConfig};
//! use asso_db::repositories::PgPublicationRepository;
//! use asso_core::traits::PublicationRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let repo = PgPublicationRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgAdminLogRepository, PgCategoryRepository, PgEventRepository, PgEventTypeRepository,
    PgMediaRepository, PgMessageRepository, PgParticipantRepository, PgPublicationRepository,
    PgSupportInfoRepository, PgTeamRepository,
};
