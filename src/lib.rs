//! barb - LibInsult API client
//!
//! A client library and CLI for the LibInsult REST API
//! (<https://insult.mattbas.org/api/>): compose a validated request URL,
//! issue a single GET, and decode the response.
//!
//! ```no_run
//! use barb::{InsultClient, Language};
//!
//! # async fn demo() -> barb::Result<()> {
//! let client = InsultClient::new()?;
//! let insult = client
//!     .fetch_insult(Language::En, Some("The Kardashians"), true)
//!     .await?;
//! println!("{insult}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::client::InsultClient;
pub use crate::core::models::{InsultArgs, InsultPayload, RawInsult};
pub use crate::core::request::{BASE_URL, InsultRequest, Language, RequestKind, ResponseFormat};
pub use error::{BarbError, ExitCode, Result};
