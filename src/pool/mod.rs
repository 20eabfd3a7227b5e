//! Object pooling for expensive-to-construct resources.
//!
//! A [`ResourcePool`] holds a bounded, insertion-ordered collection of
//! instances and hands them out for reuse instead of constructing and
//! destroying them every time. Reuse eligibility is delegated entirely to a
//! caller-supplied availability predicate, so the pool never needs to know
//! the resource's shape or track checked-out state itself.

mod error;
mod resource;

pub use error::PoolError;
pub use resource::ResourcePool;
