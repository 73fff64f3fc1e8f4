mod clock;
mod remaining;

pub use clock::{Countdown, CountdownSnapshot, CountdownState};
pub use remaining::{
    is_before, Remaining, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
};
