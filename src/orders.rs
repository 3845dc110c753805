use crate::consts::ORDER_NOT_FOUND;

use std::collections::HashMap;

/// Static order-number => status table standing in for the real order
/// database.  Order numbers follow a TS-XXXXXX pattern, though nothing here
/// enforces that; the assistant's prompt asks callers to verify the format.
pub struct OrderDirectory {
    orders: HashMap<&'static str, &'static str>,
}

impl OrderDirectory {
    pub fn new() -> Self {
        let orders = HashMap::from([
            ("TS-123456", "Shipped - Expected delivery: Tomorrow"),
            ("TS-789012", "Processing - Will ship in 24 hours"),
            ("TS-345678", "Delivered - Left at front door"),
        ]);
        Self { orders }
    }

    /// Async only to keep the call shape of a real backend lookup.  A miss is
    /// a normal result, not an error.
    pub async fn lookup(&self, order_number: &str) -> String {
        self.orders
            .get(order_number)
            .copied()
            .unwrap_or(ORDER_NOT_FOUND)
            .to_string()
    }
}

impl Default for OrderDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_orders_return_their_configured_status() {
        let orders = OrderDirectory::new();
        assert_eq!(
            orders.lookup("TS-123456").await,
            "Shipped - Expected delivery: Tomorrow"
        );
        assert_eq!(
            orders.lookup("TS-789012").await,
            "Processing - Will ship in 24 hours"
        );
        assert_eq!(
            orders.lookup("TS-345678").await,
            "Delivered - Left at front door"
        );
    }

    #[tokio::test]
    async fn unknown_orders_return_the_not_found_message() {
        let orders = OrderDirectory::new();
        assert_eq!(
            orders.lookup("TS-000000").await,
            "Order not found. Please verify order number."
        );
        assert_eq!(
            orders.lookup("").await,
            "Order not found. Please verify order number."
        );
    }
}
