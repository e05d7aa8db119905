//! # Fibre Autowire
//!
//! A thread-safe Inversion of Control (IoC) container for Rust with
//! constructor-based auto-wiring.
//!
//! Contracts (trait objects such as `dyn Logger`) are bound to providers: either
//! a fixed instance shared by every resolution, or a factory that runs on every
//! resolution. Concrete types declare their constructors, and the container
//! builds them by resolving every constructor argument as a contract, recursively.
//!
//! ## Core Concepts
//!
//! - **Container**: An explicit value holding every registration. Create one with
//!   `Container::new()` and pass it to whoever needs it.
//! - **Contract**: An abstract capability, declared with [`contract!`].
//! - **Provider**: What a contract is bound to, via `register_instance` or
//!   `register_factory`.
//! - **Auto-wiring**: `create::<T>()` selects the last declared constructor of `T`
//!   whose parameters are all contracts, compiles it into a creator once, and
//!   reuses that creator on every later call.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_autowire::{bind, contract, Constructors, Container, Injectable};
//! use std::sync::Arc;
//!
//! trait Store: Send + Sync {
//!   fn url(&self) -> String;
//! }
//! trait Users: Send + Sync {
//!   fn describe(&self) -> String;
//! }
//! contract!(dyn Store, dyn Users);
//!
//! struct Postgres;
//! impl Store for Postgres {
//!   fn url(&self) -> String {
//!     "postgres://localhost/app".to_string()
//!   }
//! }
//!
//! struct UserService {
//!   store: Arc<dyn Store>,
//! }
//! impl Users for UserService {
//!   fn describe(&self) -> String {
//!     format!("users at {}", self.store.url())
//!   }
//! }
//! impl Injectable for UserService {
//!   fn constructors(ctors: &mut Constructors<Self>) {
//!     ctors.add(|(store,): (Arc<dyn Store>,)| UserService { store });
//!   }
//! }
//!
//! let container = Container::new();
//! container.register_instance::<dyn Store>(Arc::new(Postgres));
//! bind!(container, dyn Users => UserService);
//!
//! let users = container.resolve::<dyn Users>().unwrap();
//! assert_eq!(users.describe(), "users at postgres://localhost/app");
//! ```
//!
//! ## Cargo features
//!
//! - `cycle-detection` (default): resolving a contract that is already being
//!   resolved on the same thread fails with [`IocError::CircularDependency`].
//!   Without it, a cyclic graph recurses until the stack is exhausted.

mod constructor;
mod container;
mod core;
mod error;
mod injectable;
mod macros;
mod registry;

pub use crate::core::{TypeInfo, TypeKind};
pub use constructor::{Constructor, Constructors, Parameters};
pub use container::Container;
pub use error::{IocError, Result};
pub use injectable::Injectable;
