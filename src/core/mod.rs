pub mod client;
pub mod request;
pub mod response;
pub mod validator;

pub use crate::domain::model::{Rate, ShippingOptions};
pub use crate::domain::ports::RatesProvider;
pub use crate::utils::error::Result;
