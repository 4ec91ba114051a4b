pub mod admin;
pub mod coaches;
pub mod users;

pub use self::coaches::model::Coach;
pub use self::users::model::UserRole;
