mod wheel_canvas;
mod wheel_utils;

use std::rc::Rc;

use rand::rngs::OsRng;
use shared::constants::SPIN_FAILED_ERROR;
use shared::prize_config::PrizeConfig;
use shared::shared_wheel_game::{FrameStep, SpinTrigger, WheelGame};
use yew::prelude::*;

use crate::frame_loop::FrameLoop;
use crate::styles;
use wheel_canvas::{canvas_metrics, WheelCanvas};
use wheel_utils::{ResultDisplay, SpinButton};

#[derive(Properties, PartialEq)]
pub struct PrizeWheelProps {
    pub config: Rc<PrizeConfig>,
}

/// Owns the wheel state and wires the button, the frame loop and the canvas together.
#[function_component(PrizeWheel)]
pub fn prize_wheel(props: &PrizeWheelProps) -> Html {
    // Held outside yew state so the spinning gate is read synchronously on click
    let game = use_mut_ref(WheelGame::new);
    let frame_loop = use_mut_ref(FrameLoop::new);

    let rotation = use_state(|| 0.0_f64);
    let is_spinning = use_state(|| false);
    let result_message = use_state(String::new);
    let error_message = use_state(String::new);

    {
        let frame_loop = frame_loop.clone();
        use_effect_with((), move |_| move || frame_loop.borrow().stop());
    }

    let on_canvas_error = {
        let error_message = error_message.clone();
        Callback::from(move |msg: String| error_message.set(msg))
    };

    let start_spin = {
        let config = props.config.clone();
        let game = game.clone();
        let frame_loop = frame_loop.clone();
        let rotation = rotation.clone();
        let is_spinning = is_spinning.clone();
        let result_message = result_message.clone();
        let error_message = error_message.clone();

        Callback::from(move |_: MouseEvent| {
            let trigger = game.borrow_mut().start_spin(&config, &mut OsRng);
            match trigger {
                Ok(SpinTrigger::Started) => {}
                Ok(SpinTrigger::AlreadySpinning) => return,
                Err(e) => {
                    log::error!("Failed to start spin: {}", e);
                    error_message.set(SPIN_FAILED_ERROR.to_string());
                    return;
                }
            }

            result_message.set(String::new());
            error_message.set(String::new());
            is_spinning.set(true);

            let pointer_deg = canvas_metrics().pointer().angle_deg();
            let config = config.clone();
            let game = game.clone();
            let rotation = rotation.clone();
            let is_spinning = is_spinning.clone();
            let result_message = result_message.clone();

            frame_loop.borrow().start(move |timestamp| {
                let step = game.borrow_mut().advance(&config, pointer_deg, timestamp);
                match step {
                    FrameStep::Animating { rotation_deg } => {
                        rotation.set(rotation_deg);
                        true
                    }
                    FrameStep::Completed { rotation_deg, result } => {
                        rotation.set(rotation_deg);
                        is_spinning.set(false);
                        result_message.set(result.message());
                        false
                    }
                    FrameStep::Idle => false,
                }
            });
        })
    };

    html! {
        <div class={styles::CARD}>
            <h1 class={styles::TEXT_H1}>
                <span class="bg-clip-text text-transparent bg-gradient-to-r from-pink-500 to-rose-600">{"Prize Wheel"}</span>
            </h1>

            <div class="relative mx-auto mb-8 flex justify-center items-center">
                <WheelCanvas
                    config={props.config.clone()}
                    rotation={*rotation}
                    on_error={on_canvas_error}
                />
            </div>

            <div class="flex justify-center mt-4">
                <div class="w-full max-w-[300px]">
                    <SpinButton is_spinning={*is_spinning} onclick={start_spin} />
                </div>
            </div>

            <ResultDisplay
                message={(*result_message).clone()}
                error={(*error_message).clone()}
            />
        </div>
    }
}
