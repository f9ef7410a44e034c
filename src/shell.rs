//! Composition root: owns the app state, the map and the clock, and lays
//! out every panel each frame.

use crate::clock::TimeClock;
use crate::map::{MapEngine, MapStatus, MapWidget, WalkersEngine};
use crate::state::{
    AppState, Coordinate, MapSettings, MockRiskProvider, RiskProvider, RiskSummary, ShellEvent,
};
use crate::ui::{self, ZoomCommand};
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};
use web_time::Instant;

pub struct AppShell<E: MapEngine = WalkersEngine, R: RiskProvider = MockRiskProvider> {
    /// The only mutable application state
    pub state: AppState,

    /// Embedded map, initialized once at construction
    map: MapWidget<E>,

    /// Time readout schedule, cancelled when the shell is dropped
    clock: TimeClock,

    /// Source of the (mock) risk data
    risk: R,

    /// Map click events, drained at the start of every frame
    events: Receiver<ShellEvent>,

    /// Readings delivered by the clock's tick callback
    ticks: Receiver<String>,
}

impl<E: MapEngine, R: RiskProvider> AppShell<E, R> {
    /// Builds the shell and mounts the map into `container`.
    ///
    /// The selected location always starts at the default; `settings` only
    /// position the map view.
    pub fn new(
        container: Option<&egui::Context>,
        settings: &MapSettings,
        risk: R,
        mut clock: TimeClock,
        now: Instant,
    ) -> Self {
        let mut state = AppState::new();

        let mut map = MapWidget::new();
        map.initialize(container, &settings.map_options());
        if let MapStatus::Unavailable(e) = map.status() {
            state.status_message = format!("Map unavailable: {}", e);
        }

        let (sender, events) = channel();
        map.on_location_click(click_forwarder(sender));

        let (tick_sender, ticks) = channel();
        clock.start(now, tick_forwarder(tick_sender));
        state.clock_reading = clock.reading().to_string();

        Self {
            state,
            map,
            clock,
            risk,
            events,
            ticks,
        }
    }

    /// Applies queued events. Returns how many were applied.
    pub fn process_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.state.apply(event);
            applied += 1;
        }
        applied
    }

    /// Copies the latest ticked reading into the state.
    fn process_ticks(&mut self) {
        while let Ok(reading) = self.ticks.try_recv() {
            self.state.clock_reading = reading;
        }
    }

    pub fn dismiss_popup(&mut self) {
        self.state.apply(ShellEvent::PopupDismissed);
    }

    /// Forwards a zoom button press to the map. State is untouched.
    pub fn zoom(&mut self, command: ZoomCommand) {
        match command {
            ZoomCommand::In => self.map.zoom_in(),
            ZoomCommand::Out => self.map.zoom_out(),
        }
    }

    pub fn summary(&self) -> RiskSummary {
        self.risk.summary_for(self.state.coordinates)
    }

    /// Runs one UI frame.
    pub fn frame(&mut self, ctx: &egui::Context, now: Instant) {
        if let Some(wait) = self.clock.poll(now) {
            ctx.request_repaint_after(wait);
        }
        self.process_ticks();
        self.process_events();

        let coordinates = self.state.coordinates;
        let summary = self.summary();

        ui::render_top_bar(ctx, &mut self.state);
        ui::render_bottom_panel(ctx);
        ui::render_right_panel(ctx, coordinates, &summary);
        let zoom = ui::render_canvas(ctx, &mut self.map, coordinates, &self.state.clock_reading);

        // Clicks from this frame's map pass: the popup below sees them now,
        // the side panel on the repaint.
        if self.process_events() > 0 {
            ctx.request_repaint();
        }

        if self.state.popup_visible {
            let summary = self.summary();
            if ui::render_location_popup(ctx, self.state.coordinates, &summary) {
                self.dismiss_popup();
            }
        }

        if let Some(command) = zoom {
            self.zoom(command);
        }
    }
}

fn click_forwarder(sender: Sender<ShellEvent>) -> impl FnMut(Coordinate) {
    move |coordinate| {
        if sender.send(ShellEvent::LocationClicked(coordinate)).is_err() {
            log::warn!("Shell is gone, dropping map click");
        }
    }
}

fn tick_forwarder(sender: Sender<String>) -> impl FnMut(&str) {
    move |reading| {
        log::trace!("Clock tick: {}", reading);
        if sender.send(reading.to_string()).is_err() {
            log::debug!("Shell is gone, dropping clock tick");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::tests::{created_count, FakeEngine};
    use crate::state::url_state::UrlParams;
    use crate::ui::{popup_rows, summary_rows};
    use std::cell::Cell;
    use std::time::Duration;

    fn fixed_source() -> String {
        "10:00:00 AM".to_string()
    }

    fn settings() -> MapSettings {
        MapSettings {
            access_token: Some("pk.test".to_string()),
            ..Default::default()
        }
    }

    fn shell(ctx: &egui::Context) -> AppShell<FakeEngine> {
        AppShell::new(
            Some(ctx),
            &settings(),
            MockRiskProvider,
            TimeClock::with_source(fixed_source),
            Instant::now(),
        )
    }

    fn run_frame(ctx: &egui::Context, shell: &mut AppShell<FakeEngine>) {
        run_frame_at(ctx, shell, Instant::now());
    }

    fn run_frame_at(ctx: &egui::Context, shell: &mut AppShell<FakeEngine>, now: Instant) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| shell.frame(ctx, now));
    }

    fn value<'a>(rows: &'a [(&'static str, String)], label: &str) -> &'a str {
        rows.iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn test_initial_shell() {
        let ctx = egui::Context::default();
        let before = created_count();
        let shell = shell(&ctx);

        assert_eq!(created_count() - before, 1);
        assert_eq!(shell.state.coordinates, Coordinate::default());
        assert!(!shell.state.popup_visible);
        assert_eq!(shell.state.clock_reading, "10:00:00 AM");
    }

    #[test]
    fn test_configured_center_does_not_select_location() {
        let ctx = egui::Context::default();
        let mut settings = settings();
        UrlParams::parse("?lat=12.5000&lon=77.1000").apply_to(&mut settings);

        let shell: AppShell<FakeEngine> = AppShell::new(
            Some(&ctx),
            &settings,
            MockRiskProvider,
            TimeClock::with_source(fixed_source),
            Instant::now(),
        );

        assert_eq!(shell.state.coordinates, Coordinate::default());
        assert!(!shell.state.popup_visible);
    }

    #[test]
    fn test_clock_ticks_reach_readout() {
        thread_local! {
            static TICKS: Cell<u32> = const { Cell::new(0) };
        }
        fn counting_source() -> String {
            TICKS.with(|t| {
                t.set(t.get() + 1);
                format!("tick {}", t.get())
            })
        }

        let ctx = egui::Context::default();
        let t0 = Instant::now();
        let mut shell: AppShell<FakeEngine> = AppShell::new(
            Some(&ctx),
            &settings(),
            MockRiskProvider,
            TimeClock::with_source(counting_source),
            t0,
        );
        assert_eq!(shell.state.clock_reading, "tick 1");

        run_frame_at(&ctx, &mut shell, t0 + Duration::from_millis(500));
        assert_eq!(shell.state.clock_reading, "tick 1");

        run_frame_at(&ctx, &mut shell, t0 + Duration::from_millis(1000));
        assert_eq!(shell.state.clock_reading, "tick 2");
    }

    #[test]
    fn test_map_click_updates_all_panels() {
        let ctx = egui::Context::default();
        let mut shell = shell(&ctx);

        shell.map.queue_click(9.93, 76.24);
        run_frame(&ctx, &mut shell);

        assert_eq!(
            shell.state.coordinates,
            Coordinate::new(9.93, 76.24).unwrap()
        );
        assert!(shell.state.popup_visible);

        let summary = shell.summary();
        let card = summary_rows(shell.state.coordinates, &summary);
        let popup = popup_rows(shell.state.coordinates, &summary);
        for rows in [&card, &popup] {
            assert_eq!(value(rows, "Lat"), "9.930");
            assert_eq!(value(rows, "Long"), "76.240");
        }
    }

    #[test]
    fn test_dismiss_keeps_coordinates() {
        let ctx = egui::Context::default();
        let mut shell = shell(&ctx);
        shell.map.queue_click(9.93, 76.24);
        run_frame(&ctx, &mut shell);

        shell.dismiss_popup();

        assert!(!shell.state.popup_visible);
        assert_eq!(
            shell.state.coordinates,
            Coordinate::new(9.93, 76.24).unwrap()
        );
    }

    #[test]
    fn test_zoom_does_not_touch_state() {
        let ctx = egui::Context::default();
        let mut shell = shell(&ctx);

        shell.zoom(ZoomCommand::In);
        shell.zoom(ZoomCommand::In);
        shell.zoom(ZoomCommand::Out);

        assert_eq!(shell.map.engine_zoom(), Some(11.0));
        assert_eq!(shell.state.coordinates, Coordinate::default());
        assert!(!shell.state.popup_visible);
    }

    #[test]
    fn test_unavailable_map_degrades() {
        let ctx = egui::Context::default();
        let mut shell: AppShell<FakeEngine> = AppShell::new(
            Some(&ctx),
            &MapSettings::default(),
            MockRiskProvider,
            TimeClock::with_source(fixed_source),
            Instant::now(),
        );

        assert!(shell.state.status_message.starts_with("Map unavailable"));

        // Zooming and drawing without a map must not panic.
        shell.zoom(ZoomCommand::In);
        run_frame(&ctx, &mut shell);
        assert!(!shell.state.popup_visible);
    }

    #[test]
    fn test_frame_without_click_keeps_state() {
        let ctx = egui::Context::default();
        let mut shell = shell(&ctx);

        run_frame(&ctx, &mut shell);
        run_frame(&ctx, &mut shell);

        assert_eq!(shell.state.coordinates, Coordinate::default());
        assert!(!shell.state.popup_visible);
    }
}
