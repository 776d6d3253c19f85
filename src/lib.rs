// Library surface for the binary and integration tests.
pub mod config;
pub mod dispatch;
pub mod error;
pub mod info;
pub mod package;
pub mod training;
pub mod units;

pub use dispatch::{read_package, ActivityKind};
pub use error::{Result, WorkoutError};
pub use info::{InfoMessage, Locale};
pub use package::{sample_packages, Package};
pub use training::{Running, SportsWalking, Swimming, Training};
