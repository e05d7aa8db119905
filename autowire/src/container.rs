//! The `Container` struct: registration, resolution and auto-wiring.

use crate::constructor::Constructors;
use crate::core::{Creator, Instance, Provider, TypeInfo, TypeKind};
use crate::error::{IocError, Result};
use crate::injectable::Injectable;
use crate::registry::Registry;
use std::sync::Arc;
use tracing::{debug, trace};

/// The Inversion of Control (IoC) container.
///
/// Contracts are bound to providers with [`register_instance`](Self::register_instance)
/// and [`register_factory`](Self::register_factory) and looked up with
/// [`resolve`](Self::resolve). Concrete types are built with [`create`](Self::create),
/// which picks one of their declared constructors and resolves every argument
/// from the container.
///
/// The container is thread-safe. Registration may happen at any time, also
/// from inside a provider.
#[derive(Default)]
pub struct Container {
  registry: Registry,
}

impl Container {
  /// Creates a new, empty `Container`.
  pub fn new() -> Self {
    Self::default()
  }

  // --- Registration ---

  /// Binds `I` to a fixed instance. Every resolution returns the same `Arc`.
  pub fn register_instance<I: ?Sized + Injectable>(&self, instance: Arc<I>) {
    let contract = TypeInfo::of::<I>();
    debug!(contract = contract.name(), "registering instance provider");
    let provider: Provider = Arc::new(move |_: &Container| {
      Ok::<_, IocError>(Box::new(Arc::clone(&instance)) as Instance)
    });
    self.registry.bind(&contract, provider);
  }

  /// Binds `I` to a factory. The factory runs on every resolution of `I`.
  ///
  /// The factory receives the resolving container, so it can resolve or create
  /// its own dependencies.
  pub fn register_factory<I, F>(&self, factory: F)
  where
    I: ?Sized + Injectable,
    F: Fn(&Container) -> Result<Arc<I>> + Send + Sync + 'static,
  {
    let contract = TypeInfo::of::<I>();
    debug!(contract = contract.name(), "registering factory provider");
    let provider: Provider = Arc::new(move |container: &Container| {
      factory(container).map(|instance| Box::new(instance) as Instance)
    });
    self.registry.bind(&contract, provider);
  }

  /// Removes every provider. Creators compiled by [`create`](Self::create) are kept.
  pub fn clear_providers(&self) {
    debug!("clearing all providers");
    self.registry.clear_providers();
  }

  /// Returns `true` if a provider is bound to `I`.
  pub fn contains<I: ?Sized + Injectable>(&self) -> bool {
    self.registry.contains(&TypeInfo::of::<I>())
  }

  /// Returns `true` if a creator for `T` has already been compiled.
  pub fn is_compiled<T: ?Sized + Injectable>(&self) -> bool {
    self.registry.has_creator(&TypeInfo::of::<T>())
  }

  // --- Resolution ---

  /// Resolves a contract by invoking its provider.
  ///
  /// # Errors
  ///
  /// - [`IocError::NotAContract`] if `I` is not a contract.
  /// - [`IocError::UnresolvedContract`] if no provider is bound to `I`.
  /// - [`IocError::CircularDependency`] if `I` is already being resolved on this
  ///   thread (with the `cycle-detection` feature).
  /// - Any error returned by the provider, unchanged.
  pub fn resolve<I: ?Sized + Injectable>(&self) -> Result<Arc<I>> {
    let contract = TypeInfo::of::<I>();
    if contract.kind() != TypeKind::Contract {
      return Err(IocError::NotAContract(contract.name()));
    }
    trace!(contract = contract.name(), "resolving");

    #[cfg(feature = "cycle-detection")]
    let _guard = crate::core::ResolutionGuard::enter(self.address(), &contract)?;

    let provider = self.registry.lookup(&contract)?;
    let instance = provider(self)?;
    downcast::<I>(instance, &contract)
  }

  /// Creates an instance of a concrete type, resolving its constructor arguments.
  ///
  /// The constructor is selected the first time `T` is created and reused
  /// afterwards: among the declared constructors whose parameters are all
  /// contracts, the last one declared wins.
  ///
  /// # Errors
  ///
  /// - [`IocError::NotAClass`] if `T` is a contract or a value type.
  /// - [`IocError::IsAbstract`] if `T` is abstract.
  /// - [`IocError::NoEligibleConstructor`] if no constructor takes only contracts.
  /// - Any error raised while resolving a constructor argument, unchanged.
  pub fn create<T: ?Sized + Injectable>(&self) -> Result<Arc<T>> {
    let concrete = TypeInfo::of::<T>();
    match concrete.kind() {
      TypeKind::Concrete => {}
      TypeKind::Abstract => return Err(IocError::IsAbstract(concrete.name())),
      TypeKind::Contract | TypeKind::Value => return Err(IocError::NotAClass(concrete.name())),
    }

    let creator = self
      .registry
      .get_or_compute_creator(&concrete, || self.compile_creator::<T>(&concrete))?;
    let instance = creator(self)?;
    downcast::<T>(instance, &concrete)
  }

  // --- PRIVATE HELPERS ---

  fn compile_creator<T: ?Sized + Injectable>(&self, concrete: &TypeInfo) -> Result<Creator> {
    let mut ctors = Constructors::<T>::new();
    T::constructors(&mut ctors);

    let mut selected = None;
    for (index, ctor) in ctors.iter().enumerate() {
      // Later eligible constructors replace earlier ones.
      if ctor.is_eligible() {
        selected = Some((index, ctor.clone()));
      }
    }

    let Some((index, ctor)) = selected else {
      debug!(
        concrete = concrete.name(),
        declared = ctors.len(),
        "no eligible constructor"
      );
      return Err(IocError::NoEligibleConstructor(concrete.name()));
    };

    debug!(
      concrete = concrete.name(),
      declared = ctors.len(),
      selected = index,
      arity = ctor.parameters().len(),
      "compiled creator"
    );
    Ok(Arc::new(move |container: &Container| {
      ctor
        .invoke(container)
        .map(|instance| Box::new(instance) as Instance)
    }))
  }

  #[cfg(feature = "cycle-detection")]
  fn address(&self) -> usize {
    self as *const Self as usize
  }
}

fn downcast<T: ?Sized + Injectable>(instance: Instance, info: &TypeInfo) -> Result<Arc<T>> {
  instance
    .downcast::<Arc<T>>()
    .map(|boxed| *boxed)
    .map_err(|_| IocError::TypeMismatch(info.name()))
}
