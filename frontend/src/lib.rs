pub mod api;
pub mod auth;
pub mod base;
pub mod config;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{
    login::Login,
    orders::Orders,
    product_detail::ProductDetail,
    products::Products,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")] Home,
    #[at("/login")] Login,
    #[at("/products")] Products,
    #[at("/products/:id")] ProductDetail { id: i64 },
    #[at("/orders")] Orders,
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <GuardedSwitch />
            </div>
        </BrowserRouter>
    }
}

/// Applies the auth check to every navigation before the matched page
/// renders. Anything other than the login page requires a stored token.
#[function_component(GuardedSwitch)]
pub fn guarded_switch() -> Html {
    let route = use_route::<Route>();
    if let Some(route) = &route {
        if let Some(target) = auth::guard_navigation(route, auth::stored_token().as_deref()) {
            return html! { <Redirect<Route> to={target} /> };
        }
    }
    html! { <Switch<Route> render={switch} /> }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::NotFound => html! { <Redirect<Route> to={Route::Products} /> },
        Route::Login => html! { <Login /> },
        Route::Products => html! { <Products /> },
        Route::ProductDetail { id } => html! { <ProductDetail {id} /> },
        Route::Orders => html! { <Orders /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_recognition() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/products"), Some(Route::Products));
        assert_eq!(
            Route::recognize("/products/42"),
            Some(Route::ProductDetail { id: 42 })
        );
        assert_eq!(Route::recognize("/orders"), Some(Route::Orders));
    }

    #[test]
    fn test_unknown_path_falls_back_to_not_found() {
        assert_eq!(Route::recognize("/no-such-page"), Some(Route::NotFound));
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Products.to_path(), "/products");
        assert_eq!(Route::ProductDetail { id: 42 }.to_path(), "/products/42");
        assert_eq!(Route::Login.to_path(), "/login");
    }
}
