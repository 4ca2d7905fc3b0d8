//! Dynamic list queries.
//!
//! A [`FilterRequest`] is what a client asks for (exact matches, text search,
//! ranges, ordering and paging). [`build_query_predicate`] turns it into a
//! storage-agnostic [`QueryPredicate`] that repositories translate into SQL.

pub mod builder;
pub mod entities;
pub mod predicate;

pub use builder::build_query_predicate;
pub use entities::{FilterRequest, FilterValue, OrderDirection, RangedFilter, Scalar};
pub use predicate::{Condition, OrderBy, QueryPredicate, RangeBound};
