//! Query cache layer between the views and the content provider.
//!
//! Results are keyed by [`QueryKey`], reused while fresh, fetched at most
//! once concurrently per key, and retried on transient failures. Errors
//! are folded into the [`QueryError`] taxonomy the views render.

mod cache;
mod client;
mod error;
mod key;
mod plan;
mod retry;

pub use cache::{Cached, QueryCache};
pub use client::{QueryClient, Resource};
pub use error::{QueryError, AUTH_REMEDIATION};
pub use key::{QueryKey, ResourceKind};
pub use plan::{FetchPlan, SearchRequest};
pub use retry::RetryPolicy;
