//! Public macros for declaring injectable types and for ergonomic resolution.

/// Declares one or more trait-object types as contracts.
///
/// The traits must be `Send + Sync` (usually as supertraits).
///
/// # Examples
///
/// ```
/// use fibre_autowire::{contract, Container, IocError};
///
/// trait Mailer: Send + Sync {}
/// trait Storage: Send + Sync {}
/// contract!(dyn Mailer, dyn Storage);
///
/// let container = Container::new();
/// assert!(matches!(
///   container.resolve::<dyn Mailer>(),
///   Err(IocError::UnresolvedContract(_))
/// ));
/// ```
#[macro_export]
macro_rules! contract {
  ($($contract:ty),+ $(,)?) => {
    $(
      impl $crate::Injectable for $contract {
        const KIND: $crate::TypeKind = $crate::TypeKind::Contract;
      }
    )+
  };
}

/// Declares one or more types as abstract: they may be named where a class is
/// expected, but `create` refuses to instantiate them.
#[macro_export]
macro_rules! abstract_type {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl $crate::Injectable for $ty {
        const KIND: $crate::TypeKind = $crate::TypeKind::Abstract;
      }
    )+
  };
}

/// Binds a contract to a concrete type that is auto-wired on every resolution.
///
/// `bind!(container, dyn Contract => Concrete)` registers a factory that calls
/// `container.create::<Concrete>()` and hands the result out as the contract.
///
/// # Examples
///
/// ```
/// use fibre_autowire::{bind, contract, Constructors, Container, Injectable};
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync {
///   fn greet(&self) -> String;
/// }
/// contract!(dyn Greeter);
///
/// struct EnglishGreeter;
/// impl Greeter for EnglishGreeter {
///   fn greet(&self) -> String {
///     "Hello!".to_string()
///   }
/// }
/// impl Injectable for EnglishGreeter {
///   fn constructors(ctors: &mut Constructors<Self>) {
///     ctors.add(|(): ()| EnglishGreeter);
///   }
/// }
///
/// let container = Container::new();
/// bind!(container, dyn Greeter => EnglishGreeter);
///
/// assert_eq!(container.resolve::<dyn Greeter>().unwrap().greet(), "Hello!");
/// ```
#[macro_export]
macro_rules! bind {
  ($container:expr, $contract:ty => $concrete:ty) => {
    $container.register_factory::<$contract, _>(|container: &$crate::Container| {
      container
        .create::<$concrete>()
        .map(|instance| instance as ::std::sync::Arc<$contract>)
    })
  };
}

/// Resolves a contract from a container, panicking if it cannot be resolved.
///
/// # Panics
///
/// Panics with the error and the contract's type name on any resolution failure.
/// For a non-panicking version, use `Container::resolve` directly.
#[macro_export]
macro_rules! resolve {
  ($container:expr, $contract:ty) => {
    $container
      .resolve::<$contract>()
      .unwrap_or_else(|err| {
        panic!(
          "Failed to resolve required contract {}: {}",
          ::std::any::type_name::<$contract>(),
          err
        )
      })
  };
}

/// Creates a concrete type from a container, panicking if it cannot be created.
///
/// # Panics
///
/// Panics with the error and the type name on any creation failure.
/// For a non-panicking version, use `Container::create` directly.
#[macro_export]
macro_rules! create {
  ($container:expr, $concrete:ty) => {
    $container
      .create::<$concrete>()
      .unwrap_or_else(|err| {
        panic!(
          "Failed to create required type {}: {}",
          ::std::any::type_name::<$concrete>(),
          err
        )
      })
  };
}
