//! Per-frame orchestration: simulate, draw in a fixed order, present, pace.

use crate::{
    config::{DemoConfig, Viewport},
    raster::RasterBar,
    render::{Canvas, Presenter, Rect, Rgb},
    scroller::Scroller,
    starfield::StarField,
    timeline::{AnimationClock, FramePacer},
    Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Quit requested; no further frames are produced.
    Stopping,
    /// Terminal.
    Stopped,
}

/// Owns every piece of per-frame state. Nothing else mutates it.
#[derive(Debug)]
pub struct FrameLoop {
    state: LoopState,
    viewport: Viewport,
    scroll_step: f32,
    stars: StarField,
    bar: RasterBar,
    scroller: Scroller,
    clock: AnimationClock,
    pacer: FramePacer,
    canvas: Canvas,
    frames: u64,
}

impl FrameLoop {
    pub fn new(config: &DemoConfig, stars: StarField, scroller: Scroller) -> Self {
        let viewport = config.viewport;
        Self {
            state: LoopState::Running,
            viewport,
            scroll_step: config.scroller.step,
            stars,
            bar: RasterBar::new(viewport),
            scroller,
            clock: AnimationClock::new(config.clock_step),
            pacer: FramePacer::new(config.frame_interval()),
            canvas: Canvas::new(viewport),
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn scroller(&self) -> &Scroller {
        &self.scroller
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Advances the simulation by one fixed step and redraws the canvas.
    pub fn step(&mut self) {
        self.stars.update();
        self.scroller.advance(self.scroll_step, self.viewport.width);
        self.clock.advance();

        let t = self.clock.t();
        self.canvas.clear(Rgb::BLACK);
        self.draw_stars();
        self.bar.draw(&mut self.canvas, t);
        self.scroller.draw(&mut self.canvas, t);
        self.frames += 1;
    }

    /// Runs until the presenter reports a quit request, then shuts down.
    pub fn run<P: Presenter>(&mut self, presenter: &mut P) -> Result<()> {
        tracing::info!(
            interval_ms = self.pacer.interval().as_millis() as u64,
            "entering frame loop"
        );
        let mut outcome = Ok(());
        while self.state == LoopState::Running {
            if presenter.poll_quit() {
                tracing::info!("quit requested");
                self.state = LoopState::Stopping;
                break;
            }
            self.step();
            if let Err(err) = presenter.present(&self.canvas) {
                tracing::error!(%err, "presenting frame failed");
                self.state = LoopState::Stopping;
                outcome = Err(err);
                break;
            }
            self.pacer.pace();
        }
        self.shutdown();
        outcome
    }

    fn shutdown(&mut self) {
        self.state = LoopState::Stopped;
        tracing::info!(frames = self.frames, t = self.clock.t(), "frame loop stopped");
    }

    fn draw_stars(&mut self) {
        self.canvas.set_draw_color(Rgb::WHITE.with_alpha(255));
        for p in self.stars.visible(self.viewport) {
            let side = p.size as i32;
            self.canvas.fill_rect(Rect::new(p.x, p.y, side, side));
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        render::{Image, Rgba},
        starfield::Star,
        DemoError,
    };

    struct ScriptedPresenter {
        frames_before_quit: usize,
        presented: Vec<Vec<u32>>,
        fail_on: Option<usize>,
    }

    impl ScriptedPresenter {
        fn quitting_after(frames: usize) -> Self {
            Self {
                frames_before_quit: frames,
                presented: Vec::new(),
                fail_on: None,
            }
        }
    }

    impl Presenter for ScriptedPresenter {
        fn poll_quit(&mut self) -> bool {
            self.presented.len() >= self.frames_before_quit
        }

        fn present(&mut self, canvas: &Canvas) -> Result<()> {
            if self.fail_on == Some(self.presented.len()) {
                return Err(DemoError::Present("surface lost".into()));
            }
            self.presented.push(canvas.buffer().to_vec());
            Ok(())
        }
    }

    fn config() -> DemoConfig {
        DemoConfig {
            frame_interval_ms: 0,
            ..DemoConfig::default()
        }
    }

    fn banner() -> Image {
        Image::new(40, 10, vec![Rgba::new(0, 255, 0, 255); 400])
    }

    fn frame_loop(stars: Vec<Star>) -> FrameLoop {
        let config = config();
        let field = StarField::from_stars(&config.stars, stars, StdRng::seed_from_u64(9));
        let scroller = Scroller::new(banner(), config.viewport);
        FrameLoop::new(&config, field, scroller)
    }

    #[test]
    fn runs_until_quit_then_stops() {
        let mut frame_loop = frame_loop(Vec::new());
        let mut presenter = ScriptedPresenter::quitting_after(3);

        frame_loop.run(&mut presenter).unwrap();

        assert_eq!(frame_loop.state(), LoopState::Stopped);
        assert_eq!(frame_loop.frames(), 3);
        assert_eq!(presenter.presented.len(), 3);
        assert!((frame_loop.clock().t() - 0.15).abs() < 1e-5);
        assert_eq!(frame_loop.scroller().x(), 800.0 - 4.5);
    }

    #[test]
    fn immediate_quit_renders_nothing() {
        let mut frame_loop = frame_loop(Vec::new());
        let mut presenter = ScriptedPresenter::quitting_after(0);

        frame_loop.run(&mut presenter).unwrap();

        assert_eq!(frame_loop.state(), LoopState::Stopped);
        assert_eq!(frame_loop.frames(), 0);
        assert!(presenter.presented.is_empty());
    }

    #[test]
    fn present_failure_stops_the_loop() {
        let mut frame_loop = frame_loop(Vec::new());
        let mut presenter = ScriptedPresenter {
            fail_on: Some(1),
            ..ScriptedPresenter::quitting_after(10)
        };

        let err = frame_loop.run(&mut presenter).unwrap_err();

        assert!(matches!(err, DemoError::Present(_)));
        assert_eq!(frame_loop.state(), LoopState::Stopped);
        assert_eq!(presenter.presented.len(), 1);
    }

    #[test]
    fn stars_are_drawn_white_and_covered_by_the_bar() {
        // One near star away from the bar and one right where the bar sits.
        let stars = vec![
            Star {
                x: -200.0,
                y: -200.0,
                z: 101.0,
                speed: 0.5,
            },
            Star {
                x: -200.0,
                y: -13.0,
                z: 101.0,
                speed: 0.5,
            },
        ];
        let mut frame_loop = frame_loop(stars);
        frame_loop.step();

        // z = 100.5, k = 128 / 100.5
        let k = 128.0_f32 / 100.5;
        let free = ((-200.0 * k + 400.0) as usize, (-200.0 * k + 300.0) as usize);
        let under_bar = ((-200.0 * k + 400.0) as usize, (-13.0 * k + 300.0) as usize);

        let canvas = frame_loop.canvas();
        assert_eq!(canvas.pixel(free.0, free.1), Rgb::WHITE);
        let blended = canvas.pixel(under_bar.0, under_bar.1);
        assert_ne!(blended, Rgb::WHITE);
        assert_ne!(blended, Rgb::BLACK);
    }

    #[test]
    fn scroller_is_drawn_over_the_bar() {
        let config = config();
        let field = StarField::from_stars(&config.stars, Vec::new(), StdRng::seed_from_u64(9));
        // Lands at x = 100 after one step, inside the bar's sweep.
        let scroller = Scroller::at(banner(), config.viewport, 101.5);
        let mut frame_loop = FrameLoop::new(&config, field, scroller);
        frame_loop.step();

        let t = frame_loop.clock().t();
        let bar = frame_loop.bar.compute(t);
        let text_top = frame_loop.scroller().top(t);
        let y = text_top + 3;
        assert!((bar.y..bar.y + 75).contains(&y));

        let tint = frame_loop.scroller().tint(t);
        let canvas = frame_loop.canvas();
        assert_eq!(canvas.pixel(110, y as usize), Rgb::new(0, tint.g, 0));
        assert_ne!(canvas.pixel(200, y as usize), Rgb::BLACK);
    }

    #[test]
    fn every_frame_starts_from_black() {
        let mut frame_loop = frame_loop(Vec::new());
        frame_loop.step();
        let bar_top = frame_loop.bar.compute(frame_loop.clock().t()).y as usize;
        assert_ne!(frame_loop.canvas().pixel(0, bar_top), Rgb::BLACK);

        for _ in 0..40 {
            frame_loop.step();
        }
        let frame = frame_loop.bar.compute(frame_loop.clock().t());
        let bar = frame.y as usize..frame.y as usize + 75;
        let text_top = frame_loop.scroller().top(frame_loop.clock().t()) as usize;
        for y in (0..600).step_by(5) {
            let covered = bar.contains(&y) || (text_top..text_top + 10).contains(&y);
            if !covered {
                assert_eq!(frame_loop.canvas().pixel(0, y), Rgb::BLACK, "row {y}");
            }
        }
    }
}
