mod location_query;
mod preferences;
mod subscriber_email;

pub use location_query::*;
pub use preferences::*;
pub use subscriber_email::*;
