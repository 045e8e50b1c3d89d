//! User endpoints. Login is the only one the client needs: the returned
//! token becomes the stored credential the router guard looks for.

use shared::user::{LoginRequest, LoginResponse};

use super::client::{self, ApiResult};

pub async fn login(request: &LoginRequest) -> ApiResult<LoginResponse> {
    client::post_json("/user/login", request).await
}
