use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_NUM: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Server-side pagination wrapper as the backend serializes it.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub current: u64,
    #[serde(default)]
    pub pages: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            size: DEFAULT_PAGE_SIZE as u64,
            current: DEFAULT_PAGE_NUM as u64,
            pages: 0,
        }
    }
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_page() {
        let raw = r#"{"records":[1,2,3],"total":23,"size":10,"current":2,"pages":3}"#;
        let page: Page<i32> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.records, vec![1, 2, 3]);
        assert!(page.has_prev());
        assert!(page.has_next());
    }

    #[test]
    fn test_decode_page_missing_fields() {
        let page: Page<i32> = serde_json::from_str("{}").unwrap();
        assert!(page.is_empty());
        assert!(!page.has_prev());
        assert!(!page.has_next());
    }
}
