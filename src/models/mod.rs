pub mod from_row;
pub mod user;
pub mod workout;
pub mod workout_collection;
pub mod workout_plan;
pub mod workout_session;

pub use from_row::FromSqliteRow;
pub use user::User;
pub use workout::Workout;
pub use workout_collection::WorkoutCollection;
pub use workout_plan::WorkoutPlan;
pub use workout_session::WorkoutSession;
