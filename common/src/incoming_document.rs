//! Incoming document payload as returned by `/api/incoming/documents/{id}`.

use serde::{Deserialize, Serialize};
use serde_json::Number;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingDocument {
    pub name: String,
    pub items: Vec<LineItem>,
}

/// One row of a document.
///
/// Quantity and price keep the literal text of the JSON numbers the backend sent
/// (`arbitrary_precision`), so the table shows them exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_name: String,
    pub quantity: Number,
    pub price: Number,
}

/// Display text for the three table cells of one line item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineItemCells {
    pub product_name: String,
    pub quantity: String,
    pub price: String,
}

impl LineItem {
    pub fn table_cells(&self) -> LineItemCells {
        LineItemCells {
            product_name: self.product_name.clone(),
            quantity: self.quantity.to_string(),
            price: self.price.to_string(),
        }
    }
}

impl IncomingDocument {
    /// Table rows in the order the items were received.
    pub fn table_rows(&self) -> Vec<LineItemCells> {
        self.items.iter().map(LineItem::table_cells).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INVOICE_A: &str = r#"{
        "name": "Invoice A",
        "items": [{ "productName": "Widget", "quantity": 3, "price": 9.5 }]
    }"#;

    #[test]
    fn parses_backend_payload() {
        let document: IncomingDocument = serde_json::from_str(INVOICE_A).unwrap();
        assert_eq!(document.name, "Invoice A");
        assert_eq!(document.items.len(), 1);
        assert_eq!(document.items[0].product_name, "Widget");
    }

    #[test]
    fn renders_cells_verbatim() {
        let document: IncomingDocument = serde_json::from_str(INVOICE_A).unwrap();
        let rows = document.table_rows();
        assert_eq!(
            rows,
            vec![LineItemCells {
                product_name: "Widget".to_string(),
                quantity: "3".to_string(),
                price: "9.5".to_string(),
            }]
        );
    }

    #[test]
    fn empty_items_yield_no_rows() {
        let document: IncomingDocument =
            serde_json::from_str(r#"{ "name": "Empty", "items": [] }"#).unwrap();
        assert!(document.table_rows().is_empty());
    }

    #[test]
    fn rows_keep_received_order() {
        let payload = r#"{
            "name": "Receipt 12",
            "items": [
                { "productName": "Bolt", "quantity": 100, "price": 0.15 },
                { "productName": "Anchor", "quantity": 2, "price": 120 },
                { "productName": "Axle", "quantity": 1, "price": 47.25 }
            ]
        }"#;
        let document: IncomingDocument = serde_json::from_str(payload).unwrap();
        let extracted: Vec<(String, String, String)> = document
            .table_rows()
            .into_iter()
            .map(|cells| (cells.product_name, cells.quantity, cells.price))
            .collect();
        let expected: Vec<(String, String, String)> = document
            .items
            .iter()
            .map(|item| (item.product_name.clone(), item.quantity.to_string(), item.price.to_string()))
            .collect();
        assert_eq!(extracted, expected);
        assert_eq!(extracted[0].0, "Bolt");
        assert_eq!(extracted[1].2, "120");
        assert_eq!(extracted[2].2, "47.25");
    }

    #[test]
    fn numbers_keep_their_wire_text() {
        let payload = r#"{
            "name": "Receipt 13",
            "items": [
                { "productName": "Crate", "quantity": 10.0, "price": 10.00 },
                { "productName": "Pallet", "quantity": 1e21, "price": 0.1000 }
            ]
        }"#;
        let document: IncomingDocument = serde_json::from_str(payload).unwrap();
        let rows = document.table_rows();
        assert_eq!((rows[0].quantity.as_str(), rows[0].price.as_str()), ("10.0", "10.00"));
        assert_eq!((rows[1].quantity.as_str(), rows[1].price.as_str()), ("1e21", "0.1000"));
    }

    #[test]
    fn rejects_payload_without_items() {
        let result = serde_json::from_str::<IncomingDocument>(r#"{ "name": "Broken" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let document: IncomingDocument = serde_json::from_str(INVOICE_A).unwrap();
        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(value["items"][0]["productName"], "Widget");
    }
}
