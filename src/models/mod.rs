pub mod attendance;
pub mod day_state;
pub mod identity;
pub mod preference;
pub mod training;
