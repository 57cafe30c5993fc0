pub mod config;
pub mod invocation;
pub mod outcome;

pub use config::WrapperConfig;
pub use invocation::Invocation;
pub use outcome::Outcome;
