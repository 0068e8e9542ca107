mod config;
mod detect;
mod facts;
mod method;
mod test_common;
mod util;

pub use config::*;
pub use detect::*;
pub use facts::*;
pub use method::*;
