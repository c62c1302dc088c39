mod logger;
mod time;
mod uuid;

pub use logger::setup_logger;
pub use time::current_time_millis;
pub use self::uuid::UuidGenerator;
