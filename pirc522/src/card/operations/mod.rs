//! One file per card command. Each is a single attempt; retrying is
//! left to the caller.

pub mod anticoll;
pub mod request;
pub mod select;

pub use anticoll::anticoll;
pub use request::request;
pub use select::select_tag;
