//! Generic structures, independent of the details of a solve.

pub mod index_heap;
pub mod luby;
pub mod random;
pub mod restart;
