//! Core data structures shared by the registry and the resolution engine.

use crate::container::Container;
use crate::error::Result;
use crate::injectable::Injectable;
use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// The category a type belongs to, as far as the container is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
  /// An abstract capability (usually `dyn Trait`). Can be resolved, never created.
  Contract,
  /// A concrete class with declared constructors. Can be created, never resolved.
  Concrete,
  /// A class that cannot be instantiated.
  Abstract,
  /// A plain value type (numbers, strings, ...). Neither resolvable nor creatable.
  Value,
}

/// Identity and category of a type taking part in injection.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
  id: TypeId,
  name: &'static str,
  kind: TypeKind,
}

impl TypeInfo {
  pub fn of<T: ?Sized + Injectable>() -> Self {
    Self {
      id: TypeId::of::<T>(),
      name: type_name::<T>(),
      kind: T::KIND,
    }
  }

  pub fn id(&self) -> TypeId {
    self.id
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  pub fn kind(&self) -> TypeKind {
    self.kind
  }

  pub fn is_contract(&self) -> bool {
    self.kind == TypeKind::Contract
  }
}

impl fmt::Debug for TypeInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}({:?})", self.name, self.kind)
  }
}

/// A type-erased `Arc<T>` produced by a provider or a creator.
pub(crate) type Instance = Box<dyn Any + Send + Sync>;

/// Type-erased producer of a contract implementation.
pub(crate) type Provider = Arc<dyn Fn(&Container) -> Result<Instance> + Send + Sync>;

/// Type-erased producer of a concrete type, compiled from one of its constructors.
pub(crate) type Creator = Arc<dyn Fn(&Container) -> Result<Instance> + Send + Sync>;

#[cfg(feature = "cycle-detection")]
pub(crate) use guard::ResolutionGuard;

#[cfg(feature = "cycle-detection")]
mod guard {
  use super::TypeInfo;
  use crate::error::{IocError, Result};
  use std::any::TypeId;
  use std::cell::RefCell;
  use std::collections::HashSet;

  thread_local! {
    // Contracts currently being resolved on this thread, per container.
    static RESOLVING: RefCell<HashSet<(usize, TypeId)>> = RefCell::new(HashSet::new());
  }

  /// RAII marker for a contract that is being resolved.
  ///
  /// Entering a contract that is already on this thread's resolution stack of the
  /// same container means the dependency graph is cyclic. The entry is removed
  /// when the guard is dropped, including when resolution fails.
  pub(crate) struct ResolutionGuard {
    key: (usize, TypeId),
  }

  impl ResolutionGuard {
    pub(crate) fn enter(container: usize, contract: &TypeInfo) -> Result<Self> {
      let key = (container, contract.id());
      let inserted = RESOLVING.with(|stack| stack.borrow_mut().insert(key));
      if !inserted {
        return Err(IocError::CircularDependency(contract.name()));
      }
      Ok(Self { key })
    }
  }

  impl Drop for ResolutionGuard {
    fn drop(&mut self) {
      RESOLVING.with(|stack| {
        stack.borrow_mut().remove(&self.key);
      });
    }
  }
}
