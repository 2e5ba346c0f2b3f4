pub mod colleges;
pub mod events;
pub mod leaderboard;
pub mod results;
pub mod users;
