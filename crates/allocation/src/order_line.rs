use serde::{Deserialize, Serialize};

use stockline_core::{DomainError, DomainResult, OrderId, Sku, ValueObject};

/// Value object: a requested quantity of a SKU for an order.
///
/// Two lines with the same order id, SKU and quantity are the same line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawOrderLine")]
pub struct OrderLine {
    order_id: OrderId,
    sku: Sku,
    qty: u32,
}

impl OrderLine {
    pub fn new(order_id: impl Into<OrderId>, sku: impl Into<Sku>, qty: u32) -> DomainResult<Self> {
        if qty == 0 {
            return Err(DomainError::validation("order line qty must be positive"));
        }
        Ok(Self {
            order_id: order_id.into(),
            sku: sku.into(),
            qty,
        })
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn qty(&self) -> u32 {
        self.qty
    }
}

impl ValueObject for OrderLine {}

/// Unvalidated wire shape; deserialization goes through `OrderLine::new`.
#[derive(Deserialize)]
struct RawOrderLine {
    order_id: OrderId,
    sku: Sku,
    qty: u32,
}

impl TryFrom<RawOrderLine> for OrderLine {
    type Error = DomainError;

    fn try_from(raw: RawOrderLine) -> Result<Self, Self::Error> {
        OrderLine::new(raw.order_id, raw.sku, raw.qty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn zero_quantity_is_rejected() {
        let err = OrderLine::new("order-001", "SMALL-TABLE", 0).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("qty must be positive") => {}
            _ => panic!("Expected Validation error for zero qty"),
        }
    }

    #[test]
    fn lines_with_equal_fields_are_interchangeable() {
        let a = OrderLine::new("order-001", "SMALL-TABLE", 2).unwrap();
        let b = OrderLine::new("order-001", "SMALL-TABLE", 2).unwrap();
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn any_differing_field_makes_a_different_line() {
        let base = OrderLine::new("order-001", "SMALL-TABLE", 2).unwrap();
        assert_ne!(base, OrderLine::new("order-002", "SMALL-TABLE", 2).unwrap());
        assert_ne!(base, OrderLine::new("order-001", "LARGE-TABLE", 2).unwrap());
        assert_ne!(base, OrderLine::new("order-001", "SMALL-TABLE", 3).unwrap());
    }

    #[test]
    fn serializes_with_plain_identifiers() {
        let line = OrderLine::new("order-001", "SMALL-TABLE", 2).unwrap();
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "order_id": "order-001", "sku": "SMALL-TABLE", "qty": 2 })
        );
    }

    #[test]
    fn deserializing_a_zero_quantity_fails() {
        let json = r#"{ "order_id": "order-001", "sku": "SMALL-TABLE", "qty": 0 }"#;
        let err = serde_json::from_str::<OrderLine>(json).unwrap_err();
        assert!(err.to_string().contains("qty must be positive"));
    }
}
