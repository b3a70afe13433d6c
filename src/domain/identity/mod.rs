pub mod clock;
pub mod identity_code;

pub use clock::{Clock, FixedClock, SystemClock};
pub use identity_code::{DerivedAge, IdentityCodeAnalyzer, IdentityCodeError};
