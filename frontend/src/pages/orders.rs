use shared::order::{Order, OrderPageQuery};
use shared::page::Page;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::{api, base::Base, styles};

#[function_component(Orders)]
pub fn orders() -> Html {
    let page = use_state(Page::<Order>::default);
    let query = use_state(OrderPageQuery::default);
    let error = use_state(String::new);
    let loading = use_state(|| true);
    // Bumped after pay/cancel so the list refetches.
    let refresh = use_state(|| 0u32);

    {
        let page = page.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with(((*query).clone(), *refresh), move |(query, _)| {
            let query = query.clone();
            loading.set(true);
            spawn_local(async move {
                match api::order::get_my_orders(&query).await {
                    Ok(result) => {
                        page.set(result);
                        error.set(String::new());
                    }
                    Err(err) => {
                        log::error!("Failed to load orders: {}", err);
                        error.set(err.to_string());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let handle_pay = {
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |order_no: String| {
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match api::order::pay_order(&order_no).await {
                    Ok(()) => refresh.set(*refresh + 1),
                    Err(err) => {
                        log::error!("Failed to pay order {}: {}", order_no, err);
                        error.set(err.to_string());
                    }
                }
            });
        })
    };

    let handle_cancel = {
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |order_no: String| {
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match api::order::cancel_order(&order_no).await {
                    Ok(()) => refresh.set(*refresh + 1),
                    Err(err) => {
                        log::error!("Failed to cancel order {}: {}", order_no, err);
                        error.set(err.to_string());
                    }
                }
            });
        })
    };

    let go_prev = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*query).clone();
            next.page_num = next.page_num.saturating_sub(1).max(1);
            query.set(next);
        })
    };

    let go_next = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*query).clone();
            next.page_num += 1;
            query.set(next);
        })
    };

    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <h1 class={styles::TEXT_H1}>{"My orders"}</h1>

                if !error.is_empty() {
                    <div class={classes!(styles::CARD_ERROR, "mt-4")}>{(*error).clone()}</div>
                }

                if *loading {
                    <p class={classes!(styles::TEXT_BODY, "mt-6")}>{"Loading..."}</p>
                } else if page.is_empty() {
                    <p class={classes!(styles::TEXT_BODY, "mt-6")}>{"You have no orders yet."}</p>
                } else {
                    <div class="mt-6 space-y-4">
                        { for page.records.iter().map(|order| order_card(order, &handle_pay, &handle_cancel)) }
                    </div>
                }

                <div class="mt-8 flex items-center justify-center space-x-4">
                    <button class={styles::BUTTON_SECONDARY} onclick={go_prev} disabled={!page.has_prev()}>
                        {"Previous"}
                    </button>
                    <span class={styles::TEXT_SMALL}>
                        { format!("Page {} of {}", page.current, page.pages.max(1)) }
                    </span>
                    <button class={styles::BUTTON_SECONDARY} onclick={go_next} disabled={!page.has_next()}>
                        {"Next"}
                    </button>
                </div>
            </div>
        </Base>
    }
}

fn order_card(order: &Order, on_pay: &Callback<String>, on_cancel: &Callback<String>) -> Html {
    let status_label = order.status().map(|s| s.label()).unwrap_or("Unknown");

    let pay = {
        let on_pay = on_pay.clone();
        let order_no = order.order_no.clone();
        Callback::from(move |_: MouseEvent| on_pay.emit(order_no.clone()))
    };
    let cancel = {
        let on_cancel = on_cancel.clone();
        let order_no = order.order_no.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(order_no.clone()))
    };

    html! {
        <div class={styles::CARD}>
            <div class="flex items-center justify-between">
                <div>
                    <p class={styles::TEXT_SMALL}>{ format!("Order {}", order.order_no) }</p>
                    <h2 class={classes!(styles::TEXT_H3, "mt-1")}>{&order.product_name}</h2>
                    <p class={classes!(styles::TEXT_BODY, "mt-1")}>
                        { format!("{} × ${:.2} = ${:.2}", order.quantity, order.product_price, order.total_amount) }
                    </p>
                    if let Some(create_time) = &order.create_time {
                        <p class={classes!(styles::TEXT_SMALL, "mt-1")}>{create_time}</p>
                    }
                </div>
                <div class="flex flex-col items-end space-y-2">
                    <span class={styles::TEXT_BODY}>{status_label}</span>
                    <div class="flex items-center space-x-2">
                        if order.can_pay() {
                            <button class={styles::BUTTON_PRIMARY} onclick={pay}>{"Pay"}</button>
                        }
                        if order.can_cancel() {
                            <button class={styles::BUTTON_DANGER} onclick={cancel}>{"Cancel"}</button>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
