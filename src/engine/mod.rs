//! Query resolution and instrumented execution pipeline
//!
//! Free text flows through the components in order:
//! raw query -> Resolver -> Resolution -> Locator -> Executor -> ExecutionRecord

pub mod dispatcher;
pub mod executor;
pub mod locator;
pub mod resolver;

pub use dispatcher::Dispatcher;
pub use executor::{execute, ExecutionRecord, FaultRecord};
pub use locator::{locate, Located};
pub use resolver::{Resolution, Resolver};
