//! Constructor descriptors used for auto-wiring.
//!
//! Rust has no runtime reflection over constructors, so concrete types declare
//! them explicitly through [`Injectable::constructors`](crate::Injectable::constructors).
//! Each declaration is a closure taking a tuple of `Arc<_>` arguments; the
//! parameter list the container inspects is derived from that tuple type.

use crate::container::Container;
use crate::core::TypeInfo;
use crate::error::Result;
use crate::injectable::Injectable;
use std::fmt;
use std::slice;
use std::sync::Arc;

/// An argument list a constructor can be declared with.
///
/// Implemented for `()` and for tuples of up to eight `Arc<P>` where every `P`
/// is [`Injectable`].
pub trait Parameters: Sized + 'static {
  /// The declared parameter types, left to right.
  fn describe() -> Vec<TypeInfo>;

  /// Resolves every parameter from `container`, left to right.
  fn resolve(container: &Container) -> Result<Self>;
}

impl Parameters for () {
  fn describe() -> Vec<TypeInfo> {
    Vec::new()
  }

  fn resolve(_container: &Container) -> Result<Self> {
    Ok(())
  }
}

macro_rules! impl_parameters {
  ($($param:ident),+) => {
    impl<$($param: ?Sized + Injectable),+> Parameters for ($(Arc<$param>,)+) {
      fn describe() -> Vec<TypeInfo> {
        vec![$(TypeInfo::of::<$param>()),+]
      }

      fn resolve(container: &Container) -> Result<Self> {
        // Tuple expressions evaluate left to right.
        Ok(($(container.resolve::<$param>()?,)+))
      }
    }
  };
}

impl_parameters!(A);
impl_parameters!(A, B);
impl_parameters!(A, B, C);
impl_parameters!(A, B, C, D);
impl_parameters!(A, B, C, D, E);
impl_parameters!(A, B, C, D, E, F);
impl_parameters!(A, B, C, D, E, F, G);
impl_parameters!(A, B, C, D, E, F, G, H);

type BuildFn<T> = Arc<dyn Fn(&Container) -> Result<Arc<T>> + Send + Sync>;

/// A single declared constructor of `T`.
pub struct Constructor<T: ?Sized> {
  parameters: Vec<TypeInfo>,
  build: BuildFn<T>,
}

impl<T: ?Sized> Constructor<T> {
  /// The declared parameter types, left to right.
  pub fn parameters(&self) -> &[TypeInfo] {
    &self.parameters
  }

  /// A constructor is eligible for auto-wiring when every parameter is a contract.
  pub fn is_eligible(&self) -> bool {
    self.parameters.iter().all(TypeInfo::is_contract)
  }

  /// Resolves the arguments from `container` and runs the constructor.
  pub(crate) fn invoke(&self, container: &Container) -> Result<Arc<T>> {
    (self.build)(container)
  }
}

impl<T: ?Sized> Clone for Constructor<T> {
  fn clone(&self) -> Self {
    Self {
      parameters: self.parameters.clone(),
      build: Arc::clone(&self.build),
    }
  }
}

impl<T: ?Sized> fmt::Debug for Constructor<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Constructor")
      .field("parameters", &self.parameters)
      .finish_non_exhaustive()
  }
}

/// The ordered set of constructors declared by a type.
pub struct Constructors<T: ?Sized> {
  declared: Vec<Constructor<T>>,
}

impl<T: ?Sized> Constructors<T> {
  pub(crate) fn new() -> Self {
    Self {
      declared: Vec::new(),
    }
  }

  /// Declares a constructor.
  ///
  /// The parameter list is taken from the closure's argument type, so the
  /// argument must be annotated:
  ///
  /// ```ignore
  /// ctors.add(|(): ()| Plain::new());
  /// ctors.add(|(repo, clock): (Arc<dyn Repository>, Arc<dyn Clock>)| Service::new(repo, clock));
  /// ```
  pub fn add<P, F>(&mut self, build: F) -> &mut Self
  where
    T: Sized + 'static,
    P: Parameters,
    F: Fn(P) -> T + Send + Sync + 'static,
  {
    self.declared.push(Constructor {
      parameters: P::describe(),
      build: Arc::new(move |container: &Container| -> Result<Arc<T>> {
        let args = P::resolve(container)?;
        Ok(Arc::new(build(args)))
      }),
    });
    self
  }

  pub fn len(&self) -> usize {
    self.declared.len()
  }

  pub fn is_empty(&self) -> bool {
    self.declared.is_empty()
  }

  /// Declared constructors, in declaration order.
  pub fn iter(&self) -> slice::Iter<'_, Constructor<T>> {
    self.declared.iter()
  }
}
