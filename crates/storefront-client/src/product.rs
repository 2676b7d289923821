//! Product wire model and price selection.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog product as served by the REST endpoint.
///
/// The store treats products as opaque display data except for [`price`],
/// which drives the most-expensive selection.
///
/// [`price`]: Product::price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier, assigned by the server.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Last modification timestamp; pages are served newest-first on this
    /// field.
    pub modified_date: DateTime<Utc>,
}

/// A product creation payload. The server assigns the id and echoes the
/// created [`Product`] back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Unit price.
    pub price: f64,
}

/// Returns the product with the strictly greatest price, or `None` for an
/// empty slice.
///
/// Ties are won by the earliest-arrived product: the original front end sorted
/// with a comparator that never reported equality, so its tie behavior was an
/// artifact of the sort. Here the rule is deterministic and pinned by test.
/// `NaN` prices never win a comparison.
#[must_use]
pub fn most_expensive(products: &[Product]) -> Option<&Product> {
    products.iter().reduce(|best, candidate| {
        if candidate.price.total_cmp(&best.price) == Ordering::Greater {
            candidate
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64) -> Product {
        Product {
            id,
            name: format!("product-{id}"),
            description: None,
            image_url: None,
            price,
            modified_date: Utc::now(),
        }
    }

    #[test]
    fn empty_list_has_no_most_expensive() {
        assert!(most_expensive(&[]).is_none());
    }

    #[test]
    fn picks_greatest_price() {
        let products = vec![product(1, 10.0), product(2, 30.0), product(3, 20.0)];
        let winner = most_expensive(&products).unwrap();
        assert_eq!(winner.id, 2);
    }

    #[test]
    fn tie_goes_to_earliest_arrival() {
        let products = vec![product(7, 30.0), product(8, 30.0)];
        let winner = most_expensive(&products).unwrap();
        assert_eq!(winner.id, 7);
    }

    #[test]
    fn single_element_wins() {
        let products = vec![product(4, 0.0)];
        assert_eq!(most_expensive(&products).unwrap().id, 4);
    }

    #[test]
    fn wire_fields_are_camel_case() {
        let json = serde_json::json!({
            "id": 12,
            "name": "Road Frame",
            "imageUrl": "https://example.test/frame.png",
            "price": 1431.5,
            "modifiedDate": "2024-03-01T12:00:00Z"
        });
        let decoded: Product = serde_json::from_value(json).unwrap();
        assert_eq!(decoded.id, 12);
        assert_eq!(decoded.image_url.as_deref(), Some("https://example.test/frame.png"));
        assert!(decoded.description.is_none());
    }
}
