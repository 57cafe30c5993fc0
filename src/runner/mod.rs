pub mod optimizer;

pub use optimizer::OptimizerRunner;
