//! Product endpoints.

use shared::page::Page;
use shared::product::{Product, ProductPageQuery};

use super::client::{self, ApiResult};

pub async fn get_product_page(query: &ProductPageQuery) -> ApiResult<Page<Product>> {
    client::get_with_query("/product/page", query.to_pairs()).await
}

pub async fn get_product_by_id(id: i64) -> ApiResult<Product> {
    client::get(&detail_path(id)).await
}

fn detail_path(id: i64) -> String {
    format!("/product/{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_path() {
        assert_eq!(detail_path(42), "/product/42");
    }
}
