pub mod college;
pub mod event;
pub mod score_record;
pub mod user;

pub use college::College;
pub use event::Event;
pub use score_record::ScoreRecord;
pub use user::User;
