use crate::domain::model::Money;
use serde::{Deserialize, Serialize};

/// Money shape expected by the frontend's rendering layer. Same three fields
/// as [`Money`]; the mapping is structural only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoneyView {
    pub currency_code: String,
    pub units: i64,
    pub nanos: i32,
}

impl From<&Money> for MoneyView {
    fn from(money: &Money) -> Self {
        Self {
            currency_code: money.currency_code.clone(),
            units: money.units,
            nanos: money.nanos,
        }
    }
}

pub fn to_money_view(money: &Money) -> MoneyView {
    MoneyView::from(money)
}
