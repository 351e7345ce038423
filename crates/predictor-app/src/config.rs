mod constants;
mod defaults;
mod file;
mod load;
mod paths;
mod types;
mod util;

pub use types::PredictorConfig;
