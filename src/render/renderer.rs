// src/render/renderer.rs
// The renderer owns the node chain and its ticker: taps start a sweep,
// frame updates feed due ticks to the chain, and render draws the active node.

use anyhow::Result;
use log::info;
use nannou::prelude::*;
use std::time::Duration;

use crate::animation::{Animator, ChainStep, NodeChain};
use crate::config::{Config, Theme};
use crate::draw::{draw_hvb_node, Canvas, HvbGeometry};

pub struct Renderer {
    chain: NodeChain,
    animator: Animator,
    theme: Theme,
    step: f32,
    parts: usize,
    stroke_factor: f32,
    radius_factor: f32,
}

impl Renderer {
    pub fn new(config: &Config, theme: Theme) -> Self {
        Self {
            // one node per palette color, so node indices always hit the palette
            chain: NodeChain::new(theme.palette.len()),
            animator: Animator::new(config.tick_delay()),
            theme,
            step: config.animation.step,
            parts: config.animation.parts,
            stroke_factor: config.style.stroke_factor,
            radius_factor: config.style.radius_factor,
        }
    }

    /// Builds the theme from `config` and the renderer around it
    pub fn from_config(config: &Config) -> Result<Self> {
        let theme = config.theme()?;
        info!(
            "Renderer ready: {} nodes, {}ms ticks",
            theme.palette.len(),
            config.animation.delay_ms
        );
        Ok(Self::new(config, theme))
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn is_animated(&self) -> bool {
        // the ticker runs exactly while the current node is mid-sweep
        debug_assert_eq!(self.animator.is_animated(), !self.chain.is_idle());
        self.animator.is_animated()
    }

    /// Start a sweep on the current node. No-op while one is running.
    pub fn handle_tap(&mut self) -> bool {
        if self.chain.start_updating() {
            self.animator.start();
            true
        } else {
            false
        }
    }

    /// Feed the ticks due after `dt`. Returns the completed step, if any.
    pub fn update(&mut self, dt: Duration) -> Option<ChainStep> {
        let due = self.animator.ticks(dt);
        for _ in 0..due {
            let step = self.chain.update(self.step);
            if step.is_complete() {
                // remaining ticks for this frame are dropped with the timer
                self.animator.stop();
                return Some(step);
            }
        }
        None
    }

    pub fn geometry(&self, canvas: Canvas) -> HvbGeometry {
        HvbGeometry::compute(
            canvas,
            self.chain.current().state.scale,
            self.parts,
            self.stroke_factor,
            self.radius_factor,
        )
    }

    pub fn current_color(&self) -> Rgb<f32> {
        self.theme.palette[self.chain.current().index]
    }

    pub fn render(&self, draw: &Draw, canvas: Canvas) {
        draw.background().color(self.theme.background);
        draw_hvb_node(draw, canvas, &self.geometry(canvas), self.current_color());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn stock_renderer() -> Renderer {
        Renderer::from_config(&Config::default()).unwrap()
    }

    fn run_until_complete(renderer: &mut Renderer) -> (ChainStep, usize) {
        for frame in 1..=1000 {
            if let Some(step) = renderer.update(FRAME) {
                return (step, frame);
            }
        }
        panic!("sweep never completed");
    }

    #[test]
    fn test_from_config_builds_one_node_per_color() {
        let config = Config::from_toml(
            "[palette]\ncolors = [\"#000000\", \"#FFFFFF\"]",
        )
        .unwrap();
        let mut renderer = Renderer::from_config(&config).unwrap();
        assert_eq!(renderer.current_color(), rgb(0.0, 0.0, 0.0));

        renderer.handle_tap();
        run_until_complete(&mut renderer);
        assert_eq!(renderer.chain().current().index, 1);
        assert_eq!(renderer.current_color(), rgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_from_config_rejects_unparseable_colors() {
        let mut config = Config::default();
        config.palette.colors.push("teal".to_string());
        assert!(Renderer::from_config(&config).is_err());

        let mut config = Config::default();
        config.style.background = "#12345".to_string();
        assert!(Renderer::from_config(&config).is_err());
    }

    #[test]
    fn test_updates_do_nothing_before_a_tap() {
        let mut renderer = stock_renderer();
        for _ in 0..100 {
            assert_eq!(renderer.update(FRAME), None);
        }
        assert_eq!(renderer.chain().current().state.scale, 0.0);
        assert!(!renderer.is_animated());
    }

    #[test]
    fn test_tap_runs_one_sweep_then_moves_to_next_node() {
        let mut renderer = stock_renderer();
        assert!(renderer.handle_tap());
        assert!(renderer.is_animated());
        assert!(!renderer.chain().is_idle());

        renderer.update(Duration::from_millis(200)); // 10 ticks
        let scale = renderer.chain().current().state.scale;
        assert!((scale - 10.0 * 0.02 / 3.0).abs() < 1e-4);

        let (step, _) = run_until_complete(&mut renderer);
        assert_eq!(step, ChainStep::Advanced { from: 0, to: 1 });
        assert!(!renderer.is_animated());
        assert!(renderer.chain().is_idle());
        assert_eq!(renderer.chain().current().index, 1);
        assert_eq!(renderer.chain().node(0).state.scale, 1.0);

        // new node is idle and drawn at rest in its own color
        assert_eq!(renderer.chain().current().state.scale, 0.0);
        assert_eq!(renderer.current_color(), renderer.theme.palette[1]);
        assert_eq!(renderer.update(FRAME), None);
    }

    #[test]
    fn test_sweep_takes_about_three_seconds_of_ticks() {
        let mut renderer = stock_renderer();
        renderer.handle_tap();
        // 150-151 ticks of 20ms each
        let (_, frames) = run_until_complete(&mut renderer);
        let elapsed = FRAME * frames as u32;
        assert!(elapsed >= Duration::from_millis(2980), "{:?}", elapsed);
        assert!(elapsed <= Duration::from_millis(3040), "{:?}", elapsed);
    }

    #[test]
    fn test_tap_while_animating_is_ignored() {
        let mut renderer = stock_renderer();
        assert!(renderer.handle_tap());
        renderer.update(Duration::from_millis(100));
        let before = renderer.chain().current().state.clone();

        assert!(!renderer.handle_tap());
        let after = &renderer.chain().current().state;
        assert_eq!(before.scale, after.scale);
        assert_eq!(before.dir, after.dir);
        assert!(renderer.is_animated());

        // still on schedule: one sweep, not two overlapping
        let (step, _) = run_until_complete(&mut renderer);
        assert_eq!(step, ChainStep::Advanced { from: 0, to: 1 });
    }

    #[test]
    fn test_geometry_follows_the_current_node() {
        let mut renderer = stock_renderer();
        let canvas = Canvas::new(800.0, 600.0);
        renderer.handle_tap();
        renderer.update(Duration::from_millis(500));

        let scale = renderer.chain().current().state.scale;
        let expected = HvbGeometry::compute(canvas, scale, 3, 90.0, 12.2);
        assert_eq!(renderer.geometry(canvas), expected);
    }

    #[test]
    fn test_full_round_trip_bounces_at_both_ends() {
        let mut renderer = stock_renderer();
        let mut visited = vec![renderer.chain().current().index];
        for _ in 0..10 {
            assert!(renderer.handle_tap());
            run_until_complete(&mut renderer);
            visited.push(renderer.chain().current().index);
        }
        assert_eq!(visited, vec![0, 1, 2, 3, 4, 4, 3, 2, 1, 0, 0]);
    }
}
