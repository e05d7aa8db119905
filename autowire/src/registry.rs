//! Type-keyed storage for providers and compiled creators.

use crate::core::{Creator, Provider, TypeInfo};
use crate::error::{IocError, Result};
use dashmap::DashMap;
use once_cell::sync::OnceCell;
use std::any::TypeId;
use std::sync::Arc;

/// Holds the contract → provider bindings and the concrete type → creator cache.
///
/// Handles are cloned out of the maps before they are returned, so no shard lock
/// is held while a provider or a creator runs.
#[derive(Default)]
pub(crate) struct Registry {
  providers: DashMap<TypeId, Provider>,
  // One cell per concrete type. A cell that failed to initialize stays empty.
  creators: DashMap<TypeId, Arc<OnceCell<Creator>>>,
}

impl Registry {
  /// Binds `contract` to `provider`, replacing any previous binding.
  pub(crate) fn bind(&self, contract: &TypeInfo, provider: Provider) {
    self.providers.insert(contract.id(), provider);
  }

  pub(crate) fn lookup(&self, contract: &TypeInfo) -> Result<Provider> {
    self
      .providers
      .get(&contract.id())
      .map(|entry| Arc::clone(entry.value()))
      .ok_or(IocError::UnresolvedContract(contract.name()))
  }

  pub(crate) fn contains(&self, contract: &TypeInfo) -> bool {
    self.providers.contains_key(&contract.id())
  }

  /// Drops every provider. Compiled creators are kept.
  pub(crate) fn clear_providers(&self) {
    self.providers.clear();
  }

  /// Returns the creator cached for `concrete`, computing it with `compute` on a miss.
  ///
  /// Concurrent callers for the same type wait for a single computation. An
  /// error from `compute` is returned to its caller and nothing is stored.
  pub(crate) fn get_or_compute_creator<F>(&self, concrete: &TypeInfo, compute: F) -> Result<Creator>
  where
    F: FnOnce() -> Result<Creator>,
  {
    if let Some(creator) = self
      .creators
      .get(&concrete.id())
      .and_then(|cell| cell.value().get().cloned())
    {
      return Ok(creator);
    }

    let cell = Arc::clone(self.creators.entry(concrete.id()).or_default().value());
    cell.get_or_try_init(compute).cloned()
  }

  pub(crate) fn has_creator(&self, concrete: &TypeInfo) -> bool {
    self
      .creators
      .get(&concrete.id())
      .map_or(false, |cell| cell.value().get().is_some())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::Instance;
  use crate::{Container, Injectable};

  trait Probe: Send + Sync {}
  crate::contract!(dyn Probe);

  struct Widget;
  impl Injectable for Widget {}

  fn provider(value: u32) -> Provider {
    Arc::new(move |_: &Container| Ok::<_, IocError>(Box::new(Arc::new(value)) as Instance))
  }

  fn creator() -> Creator {
    Arc::new(|_: &Container| Ok::<_, IocError>(Box::new(Arc::new(Widget)) as Instance))
  }

  #[test]
  fn test_lookup_unbound_contract_fails() {
    let registry = Registry::default();
    let err = registry.lookup(&TypeInfo::of::<dyn Probe>()).err();
    assert_eq!(
      err,
      Some(IocError::UnresolvedContract(std::any::type_name::<dyn Probe>()))
    );
  }

  #[test]
  fn test_rebinding_replaces_provider() {
    let registry = Registry::default();
    let contract = TypeInfo::of::<dyn Probe>();

    let first = provider(1);
    let second = provider(2);
    registry.bind(&contract, Arc::clone(&first));
    registry.bind(&contract, Arc::clone(&second));

    let bound = registry.lookup(&contract).unwrap();
    assert!(Arc::ptr_eq(&bound, &second));
    assert!(!Arc::ptr_eq(&bound, &first));
  }

  #[test]
  fn test_clear_providers_keeps_creators() {
    let registry = Registry::default();
    let contract = TypeInfo::of::<dyn Probe>();
    let concrete = TypeInfo::of::<Widget>();

    registry.bind(&contract, provider(7));
    registry.get_or_compute_creator(&concrete, || Ok(creator())).unwrap();

    registry.clear_providers();

    assert!(!registry.contains(&contract));
    assert!(registry.has_creator(&concrete));
  }

  #[test]
  fn test_creator_is_computed_once() {
    let registry = Registry::default();
    let concrete = TypeInfo::of::<Widget>();
    let mut computed = 0;

    let first = registry
      .get_or_compute_creator(&concrete, || {
        computed += 1;
        Ok(creator())
      })
      .unwrap();
    let second = registry
      .get_or_compute_creator(&concrete, || {
        computed += 1;
        Ok(creator())
      })
      .unwrap();

    assert_eq!(computed, 1);
    assert!(Arc::ptr_eq(&first, &second));
  }

  #[test]
  fn test_failed_computation_is_not_cached() {
    let registry = Registry::default();
    let concrete = TypeInfo::of::<Widget>();

    let failed = registry.get_or_compute_creator(&concrete, || {
      Err(IocError::NoEligibleConstructor(concrete.name()))
    });
    assert!(failed.is_err());
    assert!(!registry.has_creator(&concrete));

    let retried = registry.get_or_compute_creator(&concrete, || Ok(creator()));
    assert!(retried.is_ok());
    assert!(registry.has_creator(&concrete));
  }
}
