use serde::{Deserialize, Serialize};

use crate::page::{DEFAULT_PAGE_NUM, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub create_time: Option<String>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Query for `GET /product/page`. The keyword filter is optional and omitted
/// from the query string when unset.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPageQuery {
    pub page_num: u32,
    pub page_size: u32,
    pub keyword: Option<String>,
}

impl Default for ProductPageQuery {
    fn default() -> Self {
        Self {
            page_num: DEFAULT_PAGE_NUM,
            page_size: DEFAULT_PAGE_SIZE,
            keyword: None,
        }
    }
}

impl ProductPageQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("pageNum", self.page_num.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(keyword) = &self.keyword {
            pairs.push(("keyword", keyword.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_product() {
        let raw = r#"{"id":3,"name":"Keyboard","price":59.9,"stock":12,"status":1}"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.name, "Keyboard");
        assert!(product.in_stock());
    }

    #[test]
    fn test_query_pairs_without_keyword() {
        let query = ProductPageQuery::default();
        assert_eq!(
            query.to_pairs(),
            vec![("pageNum", "1".to_string()), ("pageSize", "10".to_string())]
        );
    }

    #[test]
    fn test_query_pairs_with_keyword() {
        let query = ProductPageQuery {
            page_num: 2,
            page_size: 20,
            keyword: Some("usb".into()),
        };
        assert_eq!(
            query.to_pairs(),
            vec![
                ("pageNum", "2".to_string()),
                ("pageSize", "20".to_string()),
                ("keyword", "usb".to_string()),
            ]
        );
    }
}
