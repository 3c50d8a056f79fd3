use crate::core::signature::ToneTarget;
use web_sys as web;

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

struct ToneGraph {
    audio_ctx: web::AudioContext,
    osc: web::OscillatorNode,
    gain: web::GainNode,
}

fn build_graph() -> Result<ToneGraph, ()> {
    let audio_ctx = web::AudioContext::new().map_err(|e| {
        log::warn!("AudioContext unavailable: {:?}", e);
    })?;
    let osc = web::OscillatorNode::new(&audio_ctx).map_err(|e| {
        log::warn!("OscillatorNode error: {:?}", e);
    })?;
    osc.set_type(web::OscillatorType::Sawtooth);
    let gain = create_gain(&audio_ctx, 0.0, "Tone")?;
    _ = osc.connect_with_audio_node(&gain);
    _ = gain.connect_with_audio_node(&audio_ctx.destination());
    _ = osc.start();
    Ok(ToneGraph {
        audio_ctx,
        osc,
        gain,
    })
}

enum State {
    Idle,
    Ready(ToneGraph),
    Unavailable,
}

/// One continuous sawtooth voice whose pitch and level glide toward the
/// active principle's signature. The audio graph is built on first enable;
/// if that fails the engine stays silent for the rest of the page.
pub struct ToneEngine {
    state: State,
}

impl ToneEngine {
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Build the graph if needed and resume a suspended context.
    pub fn enable(&mut self) {
        if matches!(self.state, State::Idle) {
            self.state = match build_graph() {
                Ok(graph) => {
                    log::info!("tone engine ready");
                    State::Ready(graph)
                }
                Err(()) => State::Unavailable,
            };
        }
        if let State::Ready(graph) = &self.state {
            if graph.audio_ctx.state() == web::AudioContextState::Suspended {
                _ = graph.audio_ctx.resume();
            }
        }
    }

    pub fn apply(&self, target: &ToneTarget) {
        let State::Ready(graph) = &self.state else {
            return;
        };
        let end = graph.audio_ctx.current_time() + target.ramp_sec;
        _ = graph.gain.gain().linear_ramp_to_value_at_time(target.gain, end);
        if target.gain > 0.0 {
            _ = graph
                .osc
                .frequency()
                .linear_ramp_to_value_at_time(target.frequency, end);
        }
    }
}

impl Default for ToneEngine {
    fn default() -> Self {
        Self::new()
    }
}
