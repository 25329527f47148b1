//! Content use cases: listing the public collections, accepting inquiries
//! and seeding demo data.

pub mod seed;
pub mod service;
