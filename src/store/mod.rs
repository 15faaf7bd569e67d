//! Persistence layer: owner-scoped task storage and the credential store,
//! each a thin wrapper over the shared connection pool so handlers never
//! touch SQL directly and tests can construct stores against their own pool.

pub mod tasks;
pub mod users;

pub use tasks::TaskStore;
pub use users::UserStore;
