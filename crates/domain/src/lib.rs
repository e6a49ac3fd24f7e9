//! # miniblog-domain
//!
//! Pure domain model for the miniblog blogging API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Posts** (blog entries referencing an author and a category)
//! - Define **Users** (authors)
//! - Define **Categories** (post groupings)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod category;
pub mod post;
pub mod user;
