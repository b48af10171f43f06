use serde::Serialize;
use serde_json::Value;

/// An order as the upstream returns it. Treated as opaque JSON.
pub type OrderRecord = Value;

/// One page of the upstream "list orders" call.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPage {
    pub orders: Vec<OrderRecord>,
}

impl OrderPage {
    /// Reads the `orders` field of an upstream body. A missing, null or
    /// non-array field yields an empty page.
    pub fn from_body(body: Value) -> Self {
        let orders = match body {
            Value::Object(mut obj) => match obj.remove("orders") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        Self { orders }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResponse {
    pub orders: Vec<OrderRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderRecord>,
}

impl AggregateResponse {
    pub fn from_orders(orders: Vec<OrderRecord>) -> Self {
        Self {
            orders,
            message: None,
            order: None,
        }
    }
}
