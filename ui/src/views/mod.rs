mod home;
pub use home::Home;

mod step_counter;
pub use step_counter::StepCounter;

mod analytics;
pub use analytics::Analytics;
