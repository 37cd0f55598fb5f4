mod access;
mod expiry;

pub use access::AccessToken;
pub use expiry::{EXPIRY_MARGIN, ExpiryStatus, LOCAL_TIME_FORMAT, local_expire_time};
