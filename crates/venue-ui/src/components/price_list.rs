use venue_catalog::{PriceSheet, format_price};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PriceListProps {
    pub(crate) prices: PriceSheet,
}

/// Per-tier prices in display order.
#[function_component(PriceList)]
pub(crate) fn price_list(props: &PriceListProps) -> Html {
    html! {
        <ul class="price-list">
            { for props.prices.tiers().into_iter().map(|(tier, price)| html! {
                <li key={tier}>{format!("{tier}: {}", format_price(price))}</li>
            }) }
        </ul>
    }
}
