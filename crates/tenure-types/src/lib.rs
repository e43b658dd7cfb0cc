pub mod activity;
pub mod duration;
pub mod error;
pub mod person;
pub mod window;

pub use activity::ActivityList;
pub use duration::Durations;
pub use error::{Error, Result};
pub use person::Person;
pub use window::TimeWindow;
