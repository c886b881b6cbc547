#[macro_use]
extern crate auto_ops;

mod r#impl;
mod models;

pub use models::*;
pub use r#impl::*;

#[cfg(test)]
mod test;
