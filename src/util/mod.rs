//! Small helpers shared by the repositories and services.

pub mod id;
