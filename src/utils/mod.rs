mod response_util;
mod time_util;

pub use response_util::*;
pub use time_util::*;
