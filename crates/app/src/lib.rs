//! # miniblog-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PostRepository` — CRUD for posts, with eager-loaded reads
//!   - `UserRepository` — create, get, list for users
//!   - `CategoryRepository` — create, get, list for categories
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PostService` — create, get, list, update (merge), delete
//!   - `UserService` / `CategoryService` — create, get, list
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `miniblog-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
