use fibre_autowire::{contract, resolve, Constructors, Container, Injectable, IocError};
use std::panic;
use std::sync::Arc;

trait Mailer: Send + Sync {}
contract!(dyn Mailer);

struct Newsletter {
  _mailer: Arc<dyn Mailer>,
}
impl Injectable for Newsletter {
  fn constructors(ctors: &mut Constructors<Self>) {
    ctors.add(|(mailer,): (Arc<dyn Mailer>,)| Newsletter { _mailer: mailer });
  }
}

fn main() {
  let container = Container::new();

  // --- Using the panicking `resolve!` macro ---
  println!("Attempting to resolve a contract that was never registered...");

  let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
    // This line will panic!
    let _mailer = resolve!(container, dyn Mailer);
  }));

  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Successfully caught the expected panic from resolve!.");

  // --- Using the fallible API ---
  println!("\nNow, attempting to create a type that depends on the missing contract...");

  match container.create::<Newsletter>() {
    Ok(_) => panic!("Should not have been able to create the newsletter!"),
    Err(IocError::UnresolvedContract(name)) => {
      println!("Correctly failed: no provider for {}.", name)
    }
    Err(other) => panic!("Unexpected error: {}", other),
  }
}
