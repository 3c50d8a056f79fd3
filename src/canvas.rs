//! Replay a [`DrawList`] onto a Canvas2D context.

use crate::core::draw::{DrawCommand, DrawList, LineCap, Paint, TextAlign};
use wasm_bindgen::JsCast;
use web_sys as web;

const FONT_FAMILY: &str = "\"Segoe UI\", system-ui, sans-serif";

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

enum Target {
    Fill,
    Stroke,
}

fn apply_paint(ctx: &web::CanvasRenderingContext2d, paint: &Paint, target: Target) {
    let gradient = match paint {
        Paint::Solid(color) => {
            let css = color.to_css();
            match target {
                Target::Fill => ctx.set_fill_style_str(&css),
                Target::Stroke => ctx.set_stroke_style_str(&css),
            }
            return;
        }
        Paint::Linear { from, to, stops } => {
            let g = ctx.create_linear_gradient(
                from.x as f64,
                from.y as f64,
                to.x as f64,
                to.y as f64,
            );
            for (offset, color) in stops {
                _ = g.add_color_stop(*offset, &color.to_css());
            }
            g
        }
        Paint::Radial {
            inner,
            inner_radius,
            outer,
            outer_radius,
            stops,
        } => {
            let g = match ctx.create_radial_gradient(
                inner.x as f64,
                inner.y as f64,
                *inner_radius as f64,
                outer.x as f64,
                outer.y as f64,
                *outer_radius as f64,
            ) {
                Ok(g) => g,
                Err(e) => {
                    log::debug!("radial gradient rejected: {:?}", e);
                    return;
                }
            };
            for (offset, color) in stops {
                _ = g.add_color_stop(*offset, &color.to_css());
            }
            g
        }
    };
    match target {
        Target::Fill => ctx.set_fill_style_canvas_gradient(&gradient),
        Target::Stroke => ctx.set_stroke_style_canvas_gradient(&gradient),
    }
}

/// Reset the transform to `dpr` and execute every command in order. Context
/// state set by the list does not leak into the next frame.
pub fn replay(ctx: &web::CanvasRenderingContext2d, list: &DrawList, dpr: f64) {
    ctx.save();
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    for cmd in list.commands() {
        match cmd {
            DrawCommand::Save => ctx.save(),
            DrawCommand::Restore => ctx.restore(),
            DrawCommand::Translate(v) => {
                _ = ctx.translate(v.x as f64, v.y as f64);
            }
            DrawCommand::Rotate(a) => {
                _ = ctx.rotate(*a as f64);
            }
            DrawCommand::Scale(v) => {
                _ = ctx.scale(v.x as f64, v.y as f64);
            }
            DrawCommand::FillStyle(p) => apply_paint(ctx, p, Target::Fill),
            DrawCommand::StrokeStyle(p) => apply_paint(ctx, p, Target::Stroke),
            DrawCommand::LineWidth(w) => ctx.set_line_width(*w as f64),
            DrawCommand::LineDash(segments) => {
                let arr = js_sys::Array::new();
                for s in segments {
                    arr.push(&wasm_bindgen::JsValue::from(*s as f64));
                }
                _ = ctx.set_line_dash(&arr);
            }
            DrawCommand::LineCap(cap) => ctx.set_line_cap(match cap {
                LineCap::Butt => "butt",
                LineCap::Round => "round",
            }),
            DrawCommand::GlobalAlpha(a) => ctx.set_global_alpha(*a as f64),
            DrawCommand::FontPx(px) => ctx.set_font(&format!("{}px {}", px, FONT_FAMILY)),
            DrawCommand::TextAlign(align) => ctx.set_text_align(match align {
                TextAlign::Start => "start",
                TextAlign::Center => "center",
            }),
            DrawCommand::BeginPath => ctx.begin_path(),
            DrawCommand::ClosePath => ctx.close_path(),
            DrawCommand::MoveTo(p) => ctx.move_to(p.x as f64, p.y as f64),
            DrawCommand::LineTo(p) => ctx.line_to(p.x as f64, p.y as f64),
            DrawCommand::QuadTo { ctrl, to } => {
                ctx.quadratic_curve_to(ctrl.x as f64, ctrl.y as f64, to.x as f64, to.y as f64)
            }
            DrawCommand::BezierTo { c1, c2, to } => ctx.bezier_curve_to(
                c1.x as f64,
                c1.y as f64,
                c2.x as f64,
                c2.y as f64,
                to.x as f64,
                to.y as f64,
            ),
            DrawCommand::Arc {
                center,
                radius,
                start,
                end,
                ccw,
            } => {
                _ = ctx.arc_with_anticlockwise(
                    center.x as f64,
                    center.y as f64,
                    radius.max(0.0) as f64,
                    *start as f64,
                    *end as f64,
                    *ccw,
                );
            }
            DrawCommand::Ellipse {
                center,
                radii,
                rotation,
                start,
                end,
            } => {
                _ = ctx.ellipse(
                    center.x as f64,
                    center.y as f64,
                    radii.x.max(0.0) as f64,
                    radii.y.max(0.0) as f64,
                    *rotation as f64,
                    *start as f64,
                    *end as f64,
                );
            }
            DrawCommand::Fill => ctx.fill(),
            DrawCommand::Stroke => ctx.stroke(),
            DrawCommand::FillRect(r) => ctx.fill_rect(
                r.origin.x as f64,
                r.origin.y as f64,
                r.size.x as f64,
                r.size.y as f64,
            ),
            DrawCommand::StrokeRect(r) => ctx.stroke_rect(
                r.origin.x as f64,
                r.origin.y as f64,
                r.size.x as f64,
                r.size.y as f64,
            ),
            DrawCommand::ClearRect(r) => ctx.clear_rect(
                r.origin.x as f64,
                r.origin.y as f64,
                r.size.x as f64,
                r.size.y as f64,
            ),
            DrawCommand::FillText { text, at } => {
                _ = ctx.fill_text(text, at.x as f64, at.y as f64);
            }
        }
    }
    ctx.restore();
}
