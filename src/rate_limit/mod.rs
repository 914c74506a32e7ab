mod clock;
mod limiter;
mod middleware;

pub use clock::{Clock, ManualClock, SystemClock};
pub use limiter::{RateLimitDecision, RateLimiter};
pub use middleware::{limit_contact_attempts, ClientKeySource};
