use shared::order::CreateOrderRequest;
use shared::product::Product;
use validator::Validate;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{api, base::Base, styles, Route};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: i64,
}

#[function_component(ProductDetail)]
pub fn product_detail(props: &Props) -> Html {
    let product = use_state(|| None::<Product>);
    let error = use_state(String::new);
    let submitting = use_state(|| false);
    let quantity_ref = use_node_ref();
    let receiver_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let address_ref = use_node_ref();
    let remark_ref = use_node_ref();
    let navigator = use_navigator().expect("Navigator not available");

    {
        let product = product.clone();
        let error = error.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            spawn_local(async move {
                match api::product::get_product_by_id(id).await {
                    Ok(found) => product.set(Some(found)),
                    Err(err) => {
                        log::error!("Failed to load product {}: {}", id, err);
                        error.set(err.to_string());
                    }
                }
            });
            || ()
        });
    }

    let handle_order = {
        let error = error.clone();
        let submitting = submitting.clone();
        let quantity_ref = quantity_ref.clone();
        let receiver_ref = receiver_ref.clone();
        let phone_ref = phone_ref.clone();
        let address_ref = address_ref.clone();
        let remark_ref = remark_ref.clone();
        let navigator = navigator.clone();
        let product_id = props.id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *submitting {
                return;
            }

            let quantity = quantity_ref
                .cast::<HtmlInputElement>()
                .unwrap()
                .value()
                .parse::<i32>()
                .unwrap_or(0);
            let receiver = receiver_ref.cast::<HtmlInputElement>().unwrap().value();
            let receiver_phone = phone_ref.cast::<HtmlInputElement>().unwrap().value();
            let address = address_ref.cast::<HtmlInputElement>().unwrap().value();
            let remark = remark_ref.cast::<HtmlInputElement>().unwrap().value();

            submitting.set(true);
            error.set(String::new());

            let error = error.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                // One fresh idempotent token per attempt; the server uses it
                // to drop duplicate submissions.
                let token = match api::order::generate_idempotent_token().await {
                    Ok(token) => token,
                    Err(err) => {
                        log::error!("Failed to fetch idempotent token: {}", err);
                        error.set(err.to_string());
                        submitting.set(false);
                        return;
                    }
                };

                let request = CreateOrderRequest {
                    product_id,
                    quantity,
                    address,
                    receiver,
                    receiver_phone,
                    remark: if remark.is_empty() { None } else { Some(remark) },
                    idempotent_token: token,
                };

                if request.validate().is_err() {
                    error.set("Please fill in quantity and delivery details".to_string());
                    submitting.set(false);
                    return;
                }

                match api::order::create_order(&request).await {
                    Ok(order) => {
                        log::info!("Created order {}", order.order_no);
                        navigator.push(&Route::Orders);
                    }
                    Err(err) => {
                        log::error!("Failed to create order: {}", err);
                        error.set(err.to_string());
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                if !error.is_empty() {
                    <div class={classes!(styles::CARD_ERROR, "mb-4")}>{(*error).clone()}</div>
                }
                {
                    match &*product {
                        None => html! { <p class={styles::TEXT_BODY}>{"Loading..."}</p> },
                        Some(product) => html! {
                            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                                <div class={styles::CARD}>
                                    <h1 class={styles::TEXT_H1}>{&product.name}</h1>
                                    if let Some(description) = &product.description {
                                        <p class={classes!(styles::TEXT_BODY, "mt-4")}>{description}</p>
                                    }
                                    <p class={classes!(styles::TEXT_H2, "mt-6")}>{ format!("${:.2}", product.price) }</p>
                                    <p class={classes!(styles::TEXT_SMALL, "mt-2")}>
                                        { if product.in_stock() { format!("{} in stock", product.stock) } else { "Out of stock".to_string() } }
                                    </p>
                                </div>
                                <div class={styles::CARD}>
                                    <h2 class={styles::TEXT_H3}>{"Place an order"}</h2>
                                    <form class={styles::FORM} onsubmit={handle_order.clone()}>
                                        <div>
                                            <label class={styles::TEXT_LABEL} for="quantity">{"Quantity"}</label>
                                            <input ref={quantity_ref.clone()} id="quantity" type="number" min="1" value="1" class={styles::INPUT} />
                                        </div>
                                        <div>
                                            <label class={styles::TEXT_LABEL} for="receiver">{"Receiver"}</label>
                                            <input ref={receiver_ref.clone()} id="receiver" type="text" class={styles::INPUT} />
                                        </div>
                                        <div>
                                            <label class={styles::TEXT_LABEL} for="phone">{"Phone"}</label>
                                            <input ref={phone_ref.clone()} id="phone" type="tel" class={styles::INPUT} />
                                        </div>
                                        <div>
                                            <label class={styles::TEXT_LABEL} for="address">{"Address"}</label>
                                            <input ref={address_ref.clone()} id="address" type="text" class={styles::INPUT} />
                                        </div>
                                        <div>
                                            <label class={styles::TEXT_LABEL} for="remark">{"Remark (optional)"}</label>
                                            <input ref={remark_ref.clone()} id="remark" type="text" class={styles::INPUT} />
                                        </div>
                                        <button type="submit" class={styles::BUTTON_PRIMARY} disabled={*submitting || !product.in_stock()}>
                                            { if *submitting { "Placing order..." } else { "Buy now" } }
                                        </button>
                                    </form>
                                </div>
                            </div>
                        },
                    }
                }
            </div>
        </Base>
    }
}
