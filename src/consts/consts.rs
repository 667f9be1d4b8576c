use serde::{Deserialize, Serialize};

// Types
pub type MaxAgeSeconds = usize;

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PersonId(pub u32);

impl PersonId {
    pub fn to_number(self) -> u32 {
        self.0
    }
}

// Values
pub const DEFAULT_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HTTP_WORKERS: usize = 2;

pub const PEOPLE_PATH: &str = "/api/people";

pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const ALLOWED_METHODS: [&str; 7] = ["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"];
/// 12 hours
pub const DEFAULT_MAX_AGE: MaxAgeSeconds = 12 * 60 * 60;
