//! The two embedded identity sets.

mod canonical;
mod fork;

pub(crate) use canonical::CANONICAL;
pub(crate) use fork::FORK;
