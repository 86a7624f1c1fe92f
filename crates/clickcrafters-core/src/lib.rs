//! # ClickCrafters Core
//!
//! Core types shared by every ClickCrafters crate:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`results`]: Write-operation results returned verbatim by handlers
//!
//! # Example
//!
//! ```ignore
//! use clickcrafters_core::{AppError, DeleteResult};
//!
//! let error = AppError::forbidden();
//! let result = DeleteResult::new(0);
//! ```

pub mod errors;
pub mod results;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
pub use results::{DeleteResult, InsertResult, MessageResponse, UpdateResult};
