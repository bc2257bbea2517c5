//! GraphQL API definitions.

pub mod booking;
mod mutation;
mod query;

use juniper::EmptySubscription;

use crate::Context;

pub use self::{mutation::Mutation, query::Query};

/// GraphQL schema.
pub type Schema =
    juniper::RootNode<'static, Query, Mutation, EmptySubscription<Context>>;

/// Creates a new [`Schema`].
#[must_use]
pub fn schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
