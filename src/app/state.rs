use chrono::Local;
use crossterm::event::KeyCode;

use crate::clock::{MidnightReset, Moment, TICK_PERIOD, Ticker};
use crate::db::KeyValueStore;
use crate::session::Session;
use crate::types::TickOutcome;

use super::{AppEvent, AppView, TargetForm};

pub const TARGET_REACHED: &str = "Target time reached!";

/// The top-level application state.
pub struct App<S: KeyValueStore> {
    pub quit: bool,
    pub session: Session<S>,
    pub form: TargetForm,
    pub show_help: bool,
    pub alert: Option<String>,
    pub status: Option<String>,
    ticker: Ticker,
    midnight: MidnightReset,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(session: Session<S>) -> Self {
        let midnight = MidnightReset::arm(&Local::now());
        Self::with_clock(session, Moment::now(), midnight)
    }

    pub fn with_clock(session: Session<S>, now: Moment, midnight: MidnightReset) -> Self {
        let mut app = Self {
            quit: false,
            session,
            form: TargetForm::default(),
            show_help: false,
            alert: None,
            status: None,
            ticker: Ticker::new(TICK_PERIOD),
            midnight,
        };
        // A session restored mid-run resumes ticking straight away.
        app.sync_ticker(now);
        app
    }

    pub fn view(&self) -> AppView {
        if self.show_help {
            AppView::Help
        } else if self.session.is_editing() {
            AppView::Form
        } else {
            AppView::Dashboard
        }
    }

    pub fn ticking(&self) -> bool {
        self.ticker.is_armed()
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        self.update_at(event, Moment::now());
    }

    pub fn update_at(&mut self, event: AppEvent, now: Moment) {
        match event {
            AppEvent::Tick => self.on_tick(now),
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
        self.sync_ticker(now);
    }

    /// Cancels both timers before the app goes away.
    pub fn shutdown(&mut self) {
        tracing::info!(
            elapsed = self.session.elapsed(),
            running = self.session.is_running(),
            midnight_pending = self.midnight.is_armed(),
            "shutting down"
        );
        self.ticker.cancel();
        self.midnight.cancel();
    }

    fn sync_ticker(&mut self, now: Moment) {
        self.ticker
            .sync(self.session.tick_active(), self.session.target(), now.instant);
    }

    fn on_tick(&mut self, now: Moment) {
        // The notification blocks everything until it is dismissed.
        if self.alert.is_some() {
            return;
        }
        if self.midnight.fire(&now.wall) {
            match self.session.midnight_reset() {
                Ok(()) => self.status = Some("New day: timer reset.".to_string()),
                Err(err) => self.report("Failed to save midnight reset", err),
            }
        }
        loop {
            self.sync_ticker(now);
            if !self.ticker.fire(now.instant) {
                break;
            }
            let outcome = self.session.tick();
            if let Err(err) = self.session.save_progress() {
                self.report("Failed to save elapsed time", err);
            }
            if outcome == TickOutcome::TargetReached {
                self.sync_ticker(now);
                self.notify_target_reached();
                break;
            }
        }
    }

    fn notify_target_reached(&mut self) {
        tracing::info!("showing target reached notification");
        self.alert = Some(TARGET_REACHED.to_string());
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.alert.is_some() {
            self.handle_alert_key(key);
            return;
        }
        if self.show_help {
            match key {
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                KeyCode::Char('q') => self.quit = true,
                _ => {}
            }
            return;
        }
        match key {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('?') => self.show_help = true,
            _ if self.session.is_editing() => self.handle_form_key(key),
            _ => self.handle_dashboard_key(key),
        }
    }

    fn handle_alert_key(&mut self, key: KeyCode) {
        if matches!(key, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            self.alert = None;
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => self.submit_form(),
            KeyCode::Esc => match self.session.cancel_edit() {
                Ok(true) => {
                    self.form.clear();
                    self.clear_status();
                }
                Ok(false) => {}
                Err(err) => self.report("Failed to read target", err),
            },
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Backspace | KeyCode::Delete => self.form.pop(),
            KeyCode::Char(ch) => self.form.push(ch),
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(' ') => {
                if let Err(err) = self.session.toggle_running() {
                    self.report("Failed to save run state", err);
                } else {
                    self.clear_status();
                }
            }
            KeyCode::Char('e') => {
                if self.session.request_edit() {
                    self.form.clear();
                    self.clear_status();
                } else {
                    self.status = Some("Pause the timer before editing the target.".to_string());
                }
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let result = self.session.commit_target(
            Some(self.form.hours.as_str()),
            Some(self.form.minutes.as_str()),
            Some(self.form.seconds.as_str()),
        );
        match result {
            Ok(_) => {
                self.form.clear();
                self.clear_status();
            }
            Err(err) => self.report("Failed to save target", err),
        }
    }

    fn report(&mut self, context: &str, err: anyhow::Error) {
        tracing::error!(error = %err, "{context}");
        self.status = Some(format!("{context}: {err}"));
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}
