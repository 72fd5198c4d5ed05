use serde::{Deserialize, Serialize};
use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_id: i64,
    pub emp_id: i64,
    pub amount: Decimal,
    pub payment_time: NaiveDateTime,
}

impl Payment {
    /// True when the payment was credited on the 1st calendar day of its month.
    pub fn is_on_first_day(&self) -> bool {
        self.payment_time.day() == 1
    }
}

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub emp_id: i64,
    pub amount: Decimal,
    pub payment_time: NaiveDateTime,
}

impl NewPayment {
    pub fn new(emp_id: i64, amount: Decimal, payment_time: NaiveDateTime) -> Self {
        Self { emp_id, amount, payment_time }
    }
}
