pub mod identity;
pub mod request_id;

pub use identity::{identity_middleware, CallerIdentity};
pub use request_id::{request_id_middleware, RequestId};
