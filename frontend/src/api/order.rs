//! Order endpoints. Each function issues exactly one request and passes the
//! result through untouched.

use shared::order::{CreateOrderRequest, Order, OrderPageQuery};
use shared::page::Page;

use super::client::{self, ApiResult};

pub async fn generate_idempotent_token() -> ApiResult<String> {
    client::get("/order/idempotent-token").await
}

pub async fn create_order(request: &CreateOrderRequest) -> ApiResult<Order> {
    client::post_json("/order/create", request).await
}

pub async fn pay_order(order_no: &str) -> ApiResult<()> {
    client::post_unit(&pay_path(order_no)).await
}

pub async fn cancel_order(order_no: &str) -> ApiResult<()> {
    client::post_unit(&cancel_path(order_no)).await
}

pub async fn get_order_detail(order_no: &str) -> ApiResult<Order> {
    client::get(&detail_path(order_no)).await
}

pub async fn get_my_orders(query: &OrderPageQuery) -> ApiResult<Page<Order>> {
    client::get_with_query("/order/my-orders", query.to_pairs()).await
}

// Order numbers are substituted verbatim, the server owns their format.
fn pay_path(order_no: &str) -> String {
    format!("/order/pay/{}", order_no)
}

fn cancel_path(order_no: &str) -> String {
    format!("/order/cancel/{}", order_no)
}

fn detail_path(order_no: &str) -> String {
    format!("/order/{}", order_no)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_path() {
        assert_eq!(pay_path("ORD123"), "/order/pay/ORD123");
    }

    #[test]
    fn test_cancel_path() {
        assert_eq!(cancel_path("ORD123"), "/order/cancel/ORD123");
    }

    #[test]
    fn test_detail_path() {
        assert_eq!(detail_path("ORD123"), "/order/ORD123");
    }

    #[test]
    fn test_order_no_is_not_rewritten() {
        // No escaping or validation happens before the transport layer.
        assert_eq!(pay_path("20240101-0007"), "/order/pay/20240101-0007");
        assert_eq!(detail_path(""), "/order/");
    }
}
