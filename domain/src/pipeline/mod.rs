//! Pipeline vocabulary shared by agents, progress reporting and logs.

pub mod stage;

pub use stage::Stage;
