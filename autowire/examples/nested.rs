use fibre_autowire::{bind, contract, create, resolve, Constructors, Container, Injectable};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// Three layers of services, each depending only on the abstraction below it.
trait Storage: Send + Sync {
  fn name(&self) -> &'static str;
}
trait Repository: Send + Sync {
  fn describe(&self) -> String;
}
trait Service: Send + Sync {
  fn run(&self);
}
contract!(dyn Storage, dyn Repository, dyn Service);

struct MemoryStorage;
impl Storage for MemoryStorage {
  fn name(&self) -> &'static str {
    "memory"
  }
}
impl Injectable for MemoryStorage {
  fn constructors(ctors: &mut Constructors<Self>) {
    ctors.add(|(): ()| {
      println!("MemoryStorage");
      MemoryStorage
    });
  }
}

struct UserRepository {
  storage: Arc<dyn Storage>,
}
impl Repository for UserRepository {
  fn describe(&self) -> String {
    format!("users in {}", self.storage.name())
  }
}
impl Injectable for UserRepository {
  fn constructors(ctors: &mut Constructors<Self>) {
    ctors.add(|(storage,): (Arc<dyn Storage>,)| {
      println!("UserRepository");
      UserRepository { storage }
    });
  }
}

struct ReportService {
  repository: Arc<dyn Repository>,
}
impl Service for ReportService {
  fn run(&self) {
    println!("Reporting on {}", self.repository.describe());
  }
}
impl Injectable for ReportService {
  fn constructors(ctors: &mut Constructors<Self>) {
    ctors.add(|(repository,): (Arc<dyn Repository>,)| {
      println!("ReportService");
      ReportService { repository }
    });
  }
}

fn main() {
  // RUST_LOG=fibre_autowire=trace shows every registration, compilation and resolution.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let container = Container::new();

  // --- Registration ---

  // A single shared storage instance, built once up front.
  container.register_instance::<dyn Storage>(create!(container, MemoryStorage));
  // The other layers are auto-wired from their constructors on every resolution.
  bind!(container, dyn Repository => UserRepository);
  bind!(container, dyn Service => ReportService);

  // --- Resolution ---

  // Prints the constructors innermost first: UserRepository, then ReportService.
  let service = resolve!(container, dyn Service);
  service.run();
}
