use std::f64::consts::PI;
use std::rc::Rc;

use shared::constants::{
    CENTER_DOT_COLOR, LABEL_BASELINE_OFFSET, LABEL_COLOR, LABEL_INSET, POINTER_COLOR,
};
use shared::prize_config::PrizeConfig;
use shared::wheel_geometry::{PointerGeometry, WheelMetrics};
use shared::WheelError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::styles;

pub const CANVAS_WIDTH: u32 = 500;
pub const CANVAS_HEIGHT: u32 = 560;

pub fn canvas_metrics() -> WheelMetrics {
    WheelMetrics::new(CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64)
}

fn surface_error(err: JsValue) -> WheelError {
    WheelError::Surface(format!("{:?}", err))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, WheelError> {
    canvas
        .get_context("2d")
        .map_err(surface_error)?
        .ok_or_else(|| WheelError::Surface("missing 2d context".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| WheelError::Surface("context is not 2d".to_string()))
}

/// Sectors, labels and the centre dot, in the wheel's own (unrotated) frame.
fn draw_wheel(
    context: &CanvasRenderingContext2d,
    config: &PrizeConfig,
    metrics: &WheelMetrics,
) -> Result<(), WheelError> {
    let WheelMetrics { cx, cy, radius, .. } = *metrics;
    let font = metrics.label_font();

    for sector in config.sectors() {
        context.begin_path();
        context.move_to(cx, cy);
        context
            .arc(cx, cy, radius, sector.start_deg.to_radians(), sector.end_deg.to_radians())
            .map_err(surface_error)?;
        context.close_path();
        context.set_fill_style_str(&sector.entry.color);
        context.fill();

        // Label reads outward along the middle of the slice
        context.save();
        let drawn = context
            .translate(cx, cy)
            .and_then(|_| context.rotate(sector.mid_deg().to_radians()))
            .and_then(|_| {
                context.set_text_align("right");
                context.set_fill_style_str(LABEL_COLOR);
                context.set_font(&font);
                context.fill_text(&sector.entry.name, radius - LABEL_INSET, LABEL_BASELINE_OFFSET)
            });
        context.restore();
        drawn.map_err(surface_error)?;
    }

    context.begin_path();
    context
        .arc(cx, cy, metrics.center_dot_radius(), 0.0, 2.0 * PI)
        .map_err(surface_error)?;
    context.set_fill_style_str(CENTER_DOT_COLOR);
    context.fill();
    Ok(())
}

fn draw_pointer(context: &CanvasRenderingContext2d, pointer: &PointerGeometry) {
    context.begin_path();
    context.move_to(pointer.tip.0, pointer.tip.1);
    context.line_to(pointer.base_left.0, pointer.base_left.1);
    context.line_to(pointer.base_right.0, pointer.base_right.1);
    context.close_path();
    context.set_fill_style_str(POINTER_COLOR);
    context.fill();
}

/// Clears the canvas, draws the wheel turned by `rotation_deg` about its
/// centre, then the fixed pointer on top.
pub fn render_frame(
    canvas: &HtmlCanvasElement,
    config: &PrizeConfig,
    rotation_deg: f64,
) -> Result<(), WheelError> {
    let context = context_2d(canvas)?;
    let metrics = WheelMetrics::new(canvas.width() as f64, canvas.height() as f64);

    context.clear_rect(0.0, 0.0, metrics.width, metrics.height);

    context.save();
    let drawn = context
        .translate(metrics.cx, metrics.cy)
        .and_then(|_| context.rotate(rotation_deg.to_radians()))
        .and_then(|_| context.translate(-metrics.cx, -metrics.cy))
        .map_err(surface_error)
        .and_then(|_| draw_wheel(&context, config, &metrics));
    context.restore();
    drawn?;

    draw_pointer(&context, &metrics.pointer());
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub config: Rc<PrizeConfig>,
    pub rotation: f64,
    pub on_error: Callback<String>,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let on_error = props.on_error.clone();

        use_effect_with(
            (props.config.clone(), props.rotation),
            move |(config, rotation)| {
                match canvas_ref.cast::<HtmlCanvasElement>() {
                    Some(canvas) => {
                        if let Err(e) = render_frame(&canvas, config, *rotation) {
                            log::error!("Failed to draw wheel: {}", e);
                            on_error.emit(e.to_string());
                        }
                    }
                    None => log::error!("Wheel canvas is not mounted"),
                }
                || ()
            },
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={CANVAS_WIDTH.to_string()}
            height={CANVAS_HEIGHT.to_string()}
            class={styles::WHEEL_CANVAS}
        />
    }
}
