pub mod client;
pub mod domain;
pub mod utils;

pub use client::CompareClient;
pub use domain::model::{CompareRequest, CompareResponse, Money, Product};
pub use domain::ports::ProductComparer;
pub use domain::view::{to_money_view, MoneyView};
pub use utils::error::{CompareError, Result};
