use bon::Builder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[cfg_attr(any(test, feature = "fake"), derive(fake::Dummy))]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub detail: String,
}
