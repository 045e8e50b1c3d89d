use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;

use crate::{auth, styles, Route};

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

/// Shell around every authenticated page: top nav with the store sections
/// and a logout action that drops the stored session.
#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let navigator = use_navigator().expect("Navigator not available");
    let username = auth::stored_username().unwrap_or_default();

    let handle_logout = {
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            auth::clear_session();
            navigator.push(&Route::Login);
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            <nav class={styles::NAV}>
                <div class="w-full mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="h-16 flex items-center justify-between">
                        <div class="flex items-center">
                            <Link<Route> to={Route::Products} classes={styles::NAV_BRAND}>{"Storefront"}</Link<Route>>
                        </div>
                        <div class={styles::NAV_ITEMS}>
                            <Link<Route> to={Route::Products} classes={styles::NAV_LINK}>{"Products"}</Link<Route>>
                            <Link<Route> to={Route::Orders} classes={styles::NAV_LINK}>{"My orders"}</Link<Route>>
                            if !username.is_empty() {
                                <span class={styles::TEXT_SMALL}>{username}</span>
                            }
                            <button onclick={handle_logout} class={styles::NAV_LINK}>{"Logout"}</button>
                        </div>
                    </div>
                </div>
            </nav>
            <main class="pt-16">{ props.children.clone() }</main>
        </div>
    }
}
