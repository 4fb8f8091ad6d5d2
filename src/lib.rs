//! In-memory HTTP service for organising students into groups.
//!
//! Groups are created together with their members, can be listed or fetched
//! by id, and are deleted as a unit along with their students. Groups and
//! students are never edited after creation.

pub mod api;
pub mod models;
pub mod repository;
pub mod validation;
