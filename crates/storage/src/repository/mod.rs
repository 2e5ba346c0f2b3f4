pub mod college;
pub mod event;
pub mod score_record;
pub mod user;
