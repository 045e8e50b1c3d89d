use shared::user::LoginRequest;
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{api, auth, styles, Route};

#[function_component(Login)]
pub fn login() -> Html {
    let error = use_state(String::new);
    let loading = use_state(|| false);
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let navigator = use_navigator().expect("Navigator not available");

    let handle_submit = {
        let error = error.clone();
        let loading = loading.clone();
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *loading {
                return;
            }

            let username = username_ref.cast::<HtmlInputElement>().unwrap().value();
            let password = password_ref.cast::<HtmlInputElement>().unwrap().value();

            let request = LoginRequest { username, password };
            if request.validate().is_err() {
                error.set("Please enter a username and password".to_string());
                return;
            }

            loading.set(true);
            error.set(String::new());

            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match api::user::login(&request).await {
                    Ok(session) => {
                        auth::store_session(&session);
                        navigator.push(&Route::Products);
                    }
                    Err(err) => {
                        log::error!("Login failed: {}", err);
                        error.set(err.to_string());
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen w-full px-4 sm:px-6 lg:px-8 bg-gray-50 dark:bg-gray-900">
            <div class={styles::CONTAINER_SM}>
                <div class={classes!(styles::AUTH_CARD, "mt-16")}>
                    <h1 class={styles::TEXT_H2}>{"Sign in"}</h1>
                    <form class={styles::FORM} onsubmit={handle_submit}>
                        <div>
                            <label class={styles::TEXT_LABEL} for="username">{"Username"}</label>
                            <input ref={username_ref} id="username" type="text" class={styles::INPUT} placeholder="Username" />
                        </div>
                        <div>
                            <label class={styles::TEXT_LABEL} for="password">{"Password"}</label>
                            <input ref={password_ref} id="password" type="password" class={styles::INPUT} placeholder="Password" />
                        </div>
                        if !error.is_empty() {
                            <p class={styles::TEXT_ERROR}>{(*error).clone()}</p>
                        }
                        <button type="submit" class={styles::AUTH_BUTTON} disabled={*loading}>
                            { if *loading { "Signing in..." } else { "Sign in" } }
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
