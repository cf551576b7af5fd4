pub mod config;
pub mod frame_loop;
pub mod pages;
pub mod styles;

use std::rc::Rc;

use shared::constants::CONFIG_ERROR;
use shared::prize_config::PrizeConfig;
use yew::prelude::*;

use crate::pages::prize_wheel::PrizeWheel;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Validated prize list, or the reason it was rejected at startup.
    pub config: Result<Rc<PrizeConfig>, String>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <div class={styles::CONTAINER}>
            {
                match &props.config {
                    Ok(config) => html! { <PrizeWheel config={config.clone()} /> },
                    Err(reason) => html! {
                        <div class={classes!(styles::ALERT_ERROR, "max-w-md", "mx-auto")}>
                            <p class="font-bold">{CONFIG_ERROR}</p>
                            <p class={styles::TEXT_SMALL}>{reason}</p>
                        </div>
                    },
                }
            }
        </div>
    }
}
