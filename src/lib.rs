pub mod error;
pub mod fs;
pub mod graph;
pub mod progress;
pub mod run;
pub mod task;
pub mod work;
