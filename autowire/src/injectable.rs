//! The `Injectable` trait, implemented by every type the container deals with.

use crate::constructor::Constructors;
use crate::core::TypeKind;

/// A type that can take part in resolution or auto-wiring.
///
/// Concrete classes implement this trait directly and declare their
/// constructors. Contracts and abstract types are usually declared with the
/// [`contract!`](crate::contract) and [`abstract_type!`](crate::abstract_type)
/// macros instead.
///
/// # Examples
///
/// ```
/// use fibre_autowire::{contract, Constructors, Container, Injectable};
/// use std::sync::Arc;
///
/// trait Clock: Send + Sync {
///   fn now(&self) -> u64;
/// }
/// contract!(dyn Clock);
///
/// struct FixedClock;
/// impl Clock for FixedClock {
///   fn now(&self) -> u64 {
///     42
///   }
/// }
///
/// struct Scheduler {
///   clock: Arc<dyn Clock>,
/// }
///
/// impl Injectable for Scheduler {
///   fn constructors(ctors: &mut Constructors<Self>) {
///     ctors.add(|(clock,): (Arc<dyn Clock>,)| Scheduler { clock });
///   }
/// }
///
/// let container = Container::new();
/// container.register_instance::<dyn Clock>(Arc::new(FixedClock));
///
/// let scheduler = container.create::<Scheduler>().unwrap();
/// assert_eq!(scheduler.clock.now(), 42);
/// ```
pub trait Injectable: Send + Sync + 'static {
  /// What the container may do with this type.
  const KIND: TypeKind = TypeKind::Concrete;

  /// Declares the constructors of this type, in declaration order.
  ///
  /// Only consulted by `Container::create`, and only once per container as
  /// long as a constructor could be selected.
  fn constructors(_ctors: &mut Constructors<Self>) {}
}

macro_rules! impl_value_types {
  ($($ty:ty),* $(,)?) => {
    $(
      impl Injectable for $ty {
        const KIND: TypeKind = TypeKind::Value;
      }
    )*
  };
}

impl_value_types!(
  (),
  bool,
  char,
  u8,
  u16,
  u32,
  u64,
  u128,
  usize,
  i8,
  i16,
  i32,
  i64,
  i128,
  isize,
  f32,
  f64,
  str,
  String,
  &'static str,
);
