//! # Defaulting
//!
//! Fills in fields the operator left out. Defaulters run only after the
//! matching validator has succeeded and never override a value that is
//! already set, so running one twice is a no-op.

mod eks;
mod globals;
mod ssh;

pub use eks::set_default_eks_values;
pub use globals::set_default_global_values;
pub use ssh::set_default_ssh_values;
