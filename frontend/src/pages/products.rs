use shared::page::Page;
use shared::product::{Product, ProductPageQuery};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{api, base::Base, styles, Route};

#[function_component(Products)]
pub fn products() -> Html {
    let page = use_state(Page::<Product>::default);
    let query = use_state(ProductPageQuery::default);
    let error = use_state(String::new);
    let loading = use_state(|| true);
    let keyword_ref = use_node_ref();

    {
        let page = page.clone();
        let error = error.clone();
        let loading = loading.clone();
        use_effect_with((*query).clone(), move |query| {
            let query = query.clone();
            loading.set(true);
            spawn_local(async move {
                match api::product::get_product_page(&query).await {
                    Ok(result) => {
                        page.set(result);
                        error.set(String::new());
                    }
                    Err(err) => {
                        log::error!("Failed to load products: {}", err);
                        error.set(err.to_string());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let handle_search = {
        let query = query.clone();
        let keyword_ref = keyword_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let keyword = keyword_ref.cast::<HtmlInputElement>().unwrap().value();
            let mut next = (*query).clone();
            next.page_num = 1;
            next.keyword = if keyword.is_empty() { None } else { Some(keyword) };
            query.set(next);
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
                <div class="flex items-center justify-between">
                    <h1 class={styles::TEXT_H1}>{"Products"}</h1>
                    <form class="flex items-center space-x-2" onsubmit={handle_search}>
                        <input ref={keyword_ref} type="text" class={styles::INPUT} placeholder="Search products" />
                        <button type="submit" class={styles::BUTTON_SECONDARY}>{"Search"}</button>
                    </form>
                </div>

                if !error.is_empty() {
                    <div class={classes!(styles::CARD_ERROR, "mt-4")}>{(*error).clone()}</div>
                }

                if *loading {
                    <p class={classes!(styles::TEXT_BODY, "mt-6")}>{"Loading..."}</p>
                } else if page.is_empty() {
                    <p class={classes!(styles::TEXT_BODY, "mt-6")}>{"No products found."}</p>
                } else {
                    <div class="mt-6 grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        { for page.records.iter().map(product_card) }
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

fn product_card(product: &Product) -> Html {
    html! {
        <Link<Route> to={Route::ProductDetail { id: product.id }}>
            <div class={styles::CARD_HOVER}>
                <h2 class={styles::TEXT_H3}>{&product.name}</h2>
                if let Some(description) = &product.description {
                    <p class={classes!(styles::TEXT_BODY, "mt-2", "line-clamp-2")}>{description}</p>
                }
                <div class="mt-4 flex items-center justify-between">
                    <span class={styles::TEXT_H3}>{ format!("${:.2}", product.price) }</span>
                    <span class={styles::TEXT_SMALL}>
                        { if product.in_stock() { format!("{} in stock", product.stock) } else { "Out of stock".to_string() } }
                    </span>
                </div>
            </div>
        </Link<Route>>
    }
}
