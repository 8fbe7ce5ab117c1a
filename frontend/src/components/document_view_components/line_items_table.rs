//! Line item table for a loaded document.

use common::incoming_document::{IncomingDocument, LineItem};
use dioxus::prelude::*;


/// Document name as a heading followed by its items table.
#[component]
pub fn DocumentContent(document: ReadSignal<IncomingDocument>) -> Element {
    let IncomingDocument { name, items } = document.read().clone();
    rsx! {
        div {
            style: "padding: 12px 20px;",
            h2 { "{name}" }
            LineItemsTable { items }
        }
    }
}

/// Rows follow the received order and are keyed by position; cells are printed verbatim.
#[component]
pub fn LineItemsTable(items: ReadSignal<Vec<LineItem>>) -> Element {
    rsx! {
        table {
            class: "warehouse-line-items",
            thead {
                tr {
                    th { "Product" }
                    th { "Quantity" }
                    th { "Price" }
                }
            }
            tbody {
                for (index, item) in items.read().iter().enumerate() {
                    LineItemRow { key: "{index}", item: item.clone() }
                }
            }
        }
    }
}

#[component]
fn LineItemRow(item: ReadSignal<LineItem>) -> Element {
    let cells = item.read().table_cells();
    rsx! {
        tr {
            td { "{cells.product_name}" }
            td { "{cells.quantity}" }
            td { "{cells.price}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(payload: &str) -> IncomingDocument {
        serde_json::from_str(payload).unwrap()
    }

    fn render(document: IncomingDocument) -> String {
        dioxus_ssr::render_element(rsx! {
            DocumentContent { document }
        })
    }

    #[test]
    fn renders_heading_and_one_row() {
        let html = render(document(
            r#"{ "name": "Invoice A", "items": [{ "productName": "Widget", "quantity": 3, "price": 9.5 }] }"#,
        ));
        assert!(html.contains("<h2>Invoice A</h2>"), "{html}");
        assert!(html.contains("<td>Widget</td><td>3</td><td>9.5</td>"), "{html}");
        assert_eq!(html.matches("<tr>").count(), 2, "{html}");
    }

    #[test]
    fn renders_header_only_for_empty_items() {
        let html = render(document(r#"{ "name": "Empty", "items": [] }"#));
        assert!(html.contains("<th>Product</th><th>Quantity</th><th>Price</th>"), "{html}");
        assert_eq!(html.matches("<tr>").count(), 1, "{html}");
        assert!(!html.contains("<td>"), "{html}");
    }

    #[test]
    fn cells_read_back_match_payload_order() {
        let doc = document(
            r#"{ "name": "Receipt", "items": [
                { "productName": "Bolt", "quantity": 100, "price": 0.15 },
                { "productName": "Anchor", "quantity": 2, "price": 120 }
            ] }"#,
        );
        let html = render(doc.clone());

        let body = html.split("<tbody>").nth(1).unwrap_or_default();
        let cells: Vec<&str> = body
            .split("<td>")
            .skip(1)
            .filter_map(|chunk| chunk.split("</td>").next())
            .collect();
        let read_back: Vec<(String, String, String)> = cells
            .chunks(3)
            .map(|row| (row[0].to_string(), row[1].to_string(), row[2].to_string()))
            .collect();

        let expected: Vec<(String, String, String)> = doc
            .table_rows()
            .into_iter()
            .map(|c| (c.product_name, c.quantity, c.price))
            .collect();
        assert_eq!(read_back, expected);
    }
}
