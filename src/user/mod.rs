mod list;
mod order;

use bon::Builder;
pub use list::List;
pub use order::Order;
use serde::{Deserialize, Serialize};

#[serde_with::apply(
    Option => #[serde(skip_serializing_if = "Option::is_none")],
)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[cfg_attr(any(test, feature = "fake"), derive(fake::Dummy))]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    pub orders: Option<Vec<Order>>,
    pub etag: String,
}
