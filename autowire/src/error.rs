use thiserror::Error;

/// Errors raised while registering, resolving or creating services.
///
/// Every variant carries the name of the type that caused the failure, as
/// reported by `std::any::type_name`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IocError {
  /// `resolve` was called with a type that is not a contract.
  #[error("{0} is not a contract")]
  NotAContract(&'static str),

  /// No provider is registered for the contract.
  #[error("Unable to resolve contract {0}")]
  UnresolvedContract(&'static str),

  /// `create` was called with a type that is not a concrete class
  /// (a contract or a plain value type).
  #[error("{0} is not a class")]
  NotAClass(&'static str),

  /// `create` was called with an abstract type.
  #[error("{0} is abstract")]
  IsAbstract(&'static str),

  /// None of the type's declared constructors takes only contracts.
  #[error("Unable to create {0}: no constructor takes only contracts")]
  NoEligibleConstructor(&'static str),

  /// The contract was requested again while it was still being resolved.
  #[error("Circular dependency detected while resolving contract {0}")]
  CircularDependency(&'static str),

  /// A provider produced a value of a different type than the one it was
  /// registered for.
  #[error("Provider for {0} produced a value of the wrong type")]
  TypeMismatch(&'static str),
}

/// A specialized `Result` type for `fibre_autowire` operations.
pub type Result<T, E = IocError> = std::result::Result<T, E>;
