//! The application object.
//!
//! One [`App`] is built at startup and owns everything: the timer engine with
//! its two collaborators, the presentation preferences and the store handle.
//! Front-ends hold it by value (CLI) or behind a mutex (server).
//!
//! Configuration records are loaded once in [`App::open`] and written back by
//! each method that changes them. Run-state is never written.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::error::{Result, StorageError};
use crate::events::Event;
use crate::preferences::{BgEffect, Preferences, Theme};
use crate::sound::{AudioSink, LogSink, SoundBoard, SoundPreferences};
use crate::storage::{keys, Database};
use crate::task::{Task, TaskList};
use crate::timer::{DurationConfig, Phase, TimerEngine, TimerState};

pub type Engine = TimerEngine<SoundBoard, TaskList>;

pub struct App {
    engine: Engine,
    preferences: Preferences,
    db: Database,
}

impl App {
    /// Build the app from stored records, logging sounds instead of playing them.
    pub fn open(db: Database) -> Result<Self> {
        Self::with_sink(db, Box::new(LogSink))
    }

    /// Build the app from stored records with a custom audio sink.
    ///
    /// Missing records fall back to defaults. So do malformed ones, with a
    /// warning; the next save overwrites them.
    pub fn with_sink(db: Database, sink: Box<dyn AudioSink>) -> Result<Self> {
        let mut durations: DurationConfig = load_or_default(&db, keys::DURATIONS)?;
        if let Err(e) = durations.validate() {
            warn!("ignoring stored durations: {e}");
            durations = DurationConfig::default();
        }
        let tasks: TaskList = load_or_default(&db, keys::TASKS)?;
        let sound: SoundPreferences = load_or_default(&db, keys::SOUND)?;
        let preferences: Preferences = load_or_default(&db, keys::PREFERENCES)?;

        info!(
            work = durations.work_secs(),
            short_break = durations.short_break_secs(),
            long_break = durations.long_break_secs(),
            tasks = tasks.len(),
            "app loaded"
        );

        Ok(Self {
            engine: TimerEngine::new(durations, SoundBoard::new(sound, sink), tasks),
            preferences,
            db,
        })
    }

    // ── Timer ────────────────────────────────────────────────────────

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn state(&self) -> &TimerState {
        self.engine.state()
    }

    pub fn durations(&self) -> &DurationConfig {
        self.engine.durations()
    }

    pub fn snapshot(&self) -> Event {
        self.engine.snapshot()
    }

    pub fn start(&mut self) -> Event {
        self.engine.start()
    }

    pub fn start_continuous(&mut self) -> Event {
        self.engine.start_continuous()
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.engine.pause()
    }

    pub fn reset(&mut self) -> Event {
        self.engine.reset()
    }

    pub fn set_phase(&mut self, phase: Phase) -> Event {
        self.engine.set_phase(phase)
    }

    /// One pulse. A credited work session is saved right away; a failed save
    /// is logged and does not undo the transition.
    pub fn tick(&mut self) -> Option<Event> {
        let event = self.engine.tick()?;
        if let Event::PhaseCompleted {
            credited_task: Some(_),
            ..
        } = &event
        {
            if let Err(e) = self.save(keys::TASKS, self.engine.tasks()) {
                error!("failed to save task list: {e}");
            }
        }
        Some(event)
    }

    /// Validate, persist and apply new durations, in that order.
    pub fn set_durations(&mut self, work: i64, short_break: i64, long_break: i64) -> Result<Event> {
        self.apply_durations(DurationConfig::new(work, short_break, long_break)?)
    }

    /// Persist `durations`, then hand them to the engine. A failed save
    /// leaves the running configuration as it was.
    pub fn apply_durations(&mut self, durations: DurationConfig) -> Result<Event> {
        self.save(keys::DURATIONS, &durations)?;
        Ok(self.engine.apply_durations(durations))
    }

    // ── Tasks ────────────────────────────────────────────────────────

    pub fn tasks(&self) -> &TaskList {
        self.engine.tasks()
    }

    pub fn add_task(&mut self, title: &str, est_pomos: Option<u32>) -> Result<Task> {
        let task = self.engine.tasks_mut().add(title, est_pomos)?.clone();
        self.save(keys::TASKS, self.engine.tasks())?;
        Ok(task)
    }

    pub fn toggle_task(&mut self, id: &str) -> Result<Task> {
        let task = self.engine.tasks_mut().toggle(id)?.clone();
        self.save(keys::TASKS, self.engine.tasks())?;
        Ok(task)
    }

    pub fn delete_task(&mut self, id: &str) -> Result<Task> {
        let task = self.engine.tasks_mut().delete(id)?;
        self.save(keys::TASKS, self.engine.tasks())?;
        Ok(task)
    }

    // ── Sound ────────────────────────────────────────────────────────

    pub fn sound(&self) -> &SoundBoard {
        self.engine.sound()
    }

    /// Flip the sound switch, returning the new value.
    pub fn toggle_sound(&mut self) -> Result<bool> {
        let on = self.engine.sound_mut().toggle();
        self.save(keys::SOUND, self.engine.sound().prefs())?;
        Ok(on)
    }

    pub fn set_alarm(&mut self, id: &str) -> Result<()> {
        self.engine.sound_mut().set_alarm(id)?;
        self.save(keys::SOUND, self.engine.sound().prefs())
    }

    pub fn set_ambience(&mut self, phase: Phase, id: &str) -> Result<()> {
        self.engine.sound_mut().set_ambience(phase, id)?;
        self.save(keys::SOUND, self.engine.sound().prefs())
    }

    // ── Preferences ──────────────────────────────────────────────────

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.preferences.set_theme(theme);
        self.save(keys::PREFERENCES, &self.preferences)
    }

    pub fn set_bg_effect(&mut self, effect: BgEffect) -> Result<()> {
        self.preferences.set_bg_effect(effect);
        self.save(keys::PREFERENCES, &self.preferences)
    }

    /// Give back the store, e.g. to reopen the app in tests.
    pub fn into_database(self) -> Database {
        self.db
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.db.save_record(key, value)?;
        Ok(())
    }
}

fn load_or_default<T: DeserializeOwned + Default>(db: &Database, key: &str) -> Result<T> {
    match db.load_record(key) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Ok(T::default()),
        Err(e @ StorageError::MalformedRecord { .. }) => {
            warn!("{e}; using defaults");
            Ok(T::default())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn app() -> App {
        App::open(Database::open_memory().unwrap()).unwrap()
    }

    fn reopen(app: App) -> App {
        App::open(app.into_database()).unwrap()
    }

    #[test]
    fn fresh_app_uses_defaults() {
        let app = app();
        assert_eq!(*app.durations(), DurationConfig::default());
        assert!(app.tasks().is_empty());
        assert!(app.sound().prefs().on);
        assert_eq!(app.preferences().theme, Theme::EInk);
        assert_eq!(*app.state(), TimerState::initial(&DurationConfig::default()));
    }

    #[test]
    fn durations_survive_reload_but_run_state_does_not() {
        let mut app = app();
        app.set_durations(600, 120, 480).unwrap();
        app.set_phase(Phase::LongBreak);
        app.start();
        app.tick();

        let app = reopen(app);
        assert_eq!(app.durations().work_secs(), 600);
        let s = app.state();
        assert_eq!(s.phase, Phase::Work);
        assert_eq!(s.seconds_left, 600);
        assert!(!s.is_running);
        assert_eq!(s.cycle, 0);
    }

    #[test]
    fn rejected_durations_are_not_saved() {
        let mut app = app();
        let err = app.set_durations(-5, 10, 10).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
        let app = reopen(app);
        assert_eq!(*app.durations(), DurationConfig::default());
    }

    #[test]
    fn failed_durations_save_keeps_running_config() {
        let mut app = app();
        app.db.conn().execute_batch("DROP TABLE kv").unwrap();

        let err = app.set_durations(600, 120, 480).unwrap_err();
        assert!(matches!(err, CoreError::Storage(_)));
        assert_eq!(*app.durations(), DurationConfig::default());
    }

    #[test]
    fn minute_config_is_applied_and_persisted() {
        let mut app = app();
        app.apply_durations(DurationConfig::from_minutes(50, 10, 20).unwrap())
            .unwrap();
        assert_eq!(app.durations().work_secs(), 3000);

        let app = reopen(app);
        assert_eq!(app.durations().long_break_secs(), 1200);
    }

    #[test]
    fn credited_session_is_persisted() {
        let mut app = app();
        app.set_durations(2, 1, 1).unwrap();
        app.reset();
        let id = app.add_task("write", Some(2)).unwrap().id;
        app.start();
        app.tick();
        assert!(app.tick().is_some());

        let app = reopen(app);
        assert_eq!(app.tasks().get(&id).unwrap().pomos, 1);
    }

    #[test]
    fn task_edits_persist() {
        let mut app = app();
        let keep = app.add_task("keep", None).unwrap().id;
        let drop = app.add_task("drop", None).unwrap().id;
        app.toggle_task(&keep).unwrap();
        app.delete_task(&drop).unwrap();

        let app = reopen(app);
        assert_eq!(app.tasks().len(), 1);
        assert!(app.tasks().get(&keep).unwrap().done);
    }

    #[test]
    fn sound_and_preferences_persist() {
        let mut app = app();
        assert!(!app.toggle_sound().unwrap());
        app.set_alarm("digital-alarm.mp3").unwrap();
        app.set_ambience(Phase::LongBreak, "nature/night.mp3").unwrap();
        app.set_theme(Theme::Oled).unwrap();
        app.set_bg_effect(BgEffect::Zen).unwrap();

        let app = reopen(app);
        let prefs = app.sound().prefs();
        assert!(!prefs.on);
        assert_eq!(prefs.alarm_sound, "digital-alarm.mp3");
        assert_eq!(prefs.long_break_ambience, "nature/night.mp3");
        assert_eq!(app.preferences().theme, Theme::Oled);
        assert_eq!(app.preferences().bg_effect, BgEffect::Zen);
    }

    #[test]
    fn malformed_records_fall_back_to_defaults() {
        let db = Database::open_memory().unwrap();
        db.kv_set(keys::TASKS, "[{broken").unwrap();
        db.kv_set(
            keys::DURATIONS,
            r#"{"workDuration":0,"shortBreakDuration":300,"longBreakDuration":900}"#,
        )
        .unwrap();
        let app = App::open(db).unwrap();
        assert!(app.tasks().is_empty());
        assert_eq!(*app.durations(), DurationConfig::default());
    }
}
