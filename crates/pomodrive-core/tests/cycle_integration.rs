//! Integration tests for a full work/break cycle through the App.
//!
//! These drive the public API the way a front-end does: open the store,
//! issue commands, pulse once per simulated second, reopen.

use std::sync::{Arc, Mutex};

use pomodrive_core::{App, AudioSink, Database, Event, Phase};

#[derive(Clone, Default)]
struct Speaker(Arc<Mutex<Vec<String>>>);

impl Speaker {
    fn log(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl AudioSink for Speaker {
    fn play(&mut self, track: &str, looping: bool) {
        let verb = if looping { "loop" } else { "once" };
        self.0.lock().unwrap().push(format!("{verb} {track}"));
    }

    fn stop_loop(&mut self) {
        self.0.lock().unwrap().push("stop".to_string());
    }
}

fn pulse_until_transition(app: &mut App) -> Event {
    for _ in 0..10_000 {
        if let Some(event) = app.tick() {
            return event;
        }
    }
    panic!("no transition within 10k pulses");
}

#[test]
fn test_continuous_cycle_credits_and_routes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pomodrive.db");
    let speaker = Speaker::default();

    let mut app = App::with_sink(Database::open_at(&path).unwrap(), Box::new(speaker.clone())).unwrap();
    app.set_durations(5, 2, 3).unwrap();
    app.reset();
    let first = app.add_task("Draft outline", Some(2)).unwrap().id;
    let second = app.add_task("Review", None).unwrap().id;

    app.start_continuous();

    let mut phases = Vec::new();
    for i in 0..8 {
        if i == 2 {
            // First task done after two sessions; credit moves on.
            app.toggle_task(&first).unwrap();
        }
        match pulse_until_transition(&mut app) {
            Event::PhaseCompleted { next, cycle, auto_started, .. } => {
                assert!(auto_started);
                phases.push((next, cycle));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    assert_eq!(
        phases,
        vec![
            (Phase::ShortBreak, 0),
            (Phase::Work, 1),
            (Phase::ShortBreak, 1),
            (Phase::Work, 2),
            (Phase::ShortBreak, 2),
            (Phase::Work, 3),
            (Phase::LongBreak, 3),
            (Phase::Work, 0),
        ]
    );

    let log = speaker.log();
    assert_eq!(log.iter().filter(|l| l.as_str() == "once basic-alarm.mp3").count(), 8);
    assert_eq!(log.first().map(String::as_str), Some("loop lofi/work.mp3"));
    assert!(log.contains(&"loop nature/calming-rain.mp3".to_string()));

    drop(app);
    let app = App::open(Database::open_at(&path).unwrap()).unwrap();
    assert_eq!(app.tasks().get(&first).unwrap().pomos, 1);
    assert_eq!(app.tasks().get(&second).unwrap().pomos, 3);
    assert_eq!(app.durations().work_secs(), 5);
    assert!(!app.state().is_running);
}

#[test]
fn test_single_shot_stops_after_each_phase() {
    let speaker = Speaker::default();
    let mut app = App::with_sink(Database::open_memory().unwrap(), Box::new(speaker.clone())).unwrap();
    app.set_durations(2, 1, 1).unwrap();
    app.reset();

    app.start();
    pulse_until_transition(&mut app);
    assert_eq!(app.state().phase, Phase::ShortBreak);
    assert!(!app.state().is_running);

    // Idle pulses change nothing.
    let idle = *app.state();
    for _ in 0..5 {
        assert!(app.tick().is_none());
    }
    assert_eq!(*app.state(), idle);

    let log = speaker.log();
    assert_eq!(log.last().map(String::as_str), Some("stop"));
}

#[test]
fn test_muted_app_still_rings_nothing() {
    let speaker = Speaker::default();
    let mut app = App::with_sink(Database::open_memory().unwrap(), Box::new(speaker.clone())).unwrap();
    app.toggle_sound().unwrap();
    app.set_durations(1, 1, 1).unwrap();
    app.reset();
    app.start();
    pulse_until_transition(&mut app);
    // The engine asks for the alarm; the board drops it while muted.
    assert!(speaker.log().is_empty());
}
