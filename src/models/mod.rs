pub mod error;
pub mod proxy;

pub use error::ProxyError;
pub use proxy::{ProxyRequest, ProxyResponse};
