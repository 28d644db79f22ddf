pub mod copy;
pub mod domain;
pub mod protocol;
