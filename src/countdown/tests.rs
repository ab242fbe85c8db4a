//! Tests for the countdown component.

use super::*;
use crate::breakdown::Unit;
use crate::lifecycle::{HostState, HostStateMsg};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Delivers `n` ticks of the model's current schedule.
fn drive(model: &mut Model, n: usize) {
    for _ in 0..n {
        let msg = model.tick_msg();
        model.update(Box::new(msg));
    }
}

#[test]
fn test_new_defaults() {
    let timer = new(Duration::from_secs(30));

    assert!(timer.id() > 0);
    assert!(timer.running());
    assert!(!timer.finished());
    assert_eq!(timer.remaining(), 30.0);
    assert_eq!(timer.identity(), None);
    assert_eq!(timer.units.len(), 4);
    assert!(!timer.show_labels);
    assert!(!timer.show_separator);
    assert_eq!(timer.separator, ":");
}

#[test]
fn test_unique_ids() {
    let a = new(Duration::from_secs(10));
    let b = new(Duration::from_secs(10));
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_tick_decrements_and_rearms() {
    let mut timer = new(Duration::from_secs(10));

    let cmd = timer.update(Box::new(timer.tick_msg()));
    assert!(cmd.is_some());
    assert_eq!(timer.remaining(), 9.0);
}

#[test]
fn test_wrong_id_rejected() {
    let mut timer = new(Duration::from_secs(10));

    let wrong = TickMsg {
        id: timer.id() + 999,
        tag: 0,
    };
    let cmd = timer.update(Box::new(wrong));

    assert!(cmd.is_none());
    assert_eq!(timer.remaining(), 10.0);
}

#[test]
fn test_stale_tag_rejected() {
    let mut timer = new(Duration::from_secs(10));

    // Accept one tick; the schedule generation moves on.
    drive(&mut timer, 1);
    assert_eq!(timer.remaining(), 9.0);

    let stale = TickMsg {
        id: timer.id(),
        tag: 0,
    };
    let cmd = timer.update(Box::new(stale));

    assert!(cmd.is_none());
    assert_eq!(timer.remaining(), 9.0);
}

#[test]
fn test_pause_freezes_value() {
    let mut timer = new(Duration::from_secs(10));
    drive(&mut timer, 2);
    assert_eq!(timer.remaining(), 8.0);

    timer.set_running(false);
    drive(&mut timer, 5);
    assert_eq!(timer.remaining(), 8.0);

    timer.set_running(true);
    drive(&mut timer, 1);
    assert_eq!(timer.remaining(), 7.0);
}

#[test]
fn test_start_stop_msg_routing() {
    let mut timer = new(Duration::from_secs(10));

    let stop = StartStopMsg {
        id: timer.id(),
        running: false,
    };
    timer.update(Box::new(stop));
    assert!(!timer.running());

    // Wrong ID leaves the gate alone.
    let wrong = StartStopMsg {
        id: timer.id() + 999,
        running: true,
    };
    timer.update(Box::new(wrong));
    assert!(!timer.running());

    // ID zero addresses any instance.
    let broadcast = StartStopMsg {
        id: 0,
        running: true,
    };
    timer.update(Box::new(broadcast));
    assert!(timer.running());
}

#[test]
fn test_progress_reports_pre_decrement_value() {
    let seen: Arc<Mutex<Vec<f64>>> = Arc::new(Mutex::new(Vec::new()));
    let finishes = Arc::new(AtomicUsize::new(0));

    let seen_hook = Arc::clone(&seen);
    let finish_hook = Arc::clone(&finishes);
    let mut timer = new(Duration::from_secs(5))
        .with_on_change(Box::new(move |remaining| {
            seen_hook.lock().unwrap().push(remaining);
        }))
        .with_on_finish(Box::new(move || {
            finish_hook.fetch_add(1, Ordering::SeqCst);
        }));

    drive(&mut timer, 8);

    assert_eq!(*seen.lock().unwrap(), vec![5.0, 4.0, 3.0, 2.0, 1.0]);
    assert_eq!(finishes.load(Ordering::SeqCst), 1);
    assert!(timer.finished());
    assert_eq!(timer.remaining(), 0.0);
}

#[test]
fn test_zero_duration_finishes_once() {
    let seen: Arc<Mutex<Vec<f64>>> = Arc::new(Mutex::new(Vec::new()));
    let finishes = Arc::new(AtomicUsize::new(0));

    let seen_hook = Arc::clone(&seen);
    let finish_hook = Arc::clone(&finishes);
    let mut timer = new(Duration::ZERO)
        .with_on_change(Box::new(move |remaining| {
            seen_hook.lock().unwrap().push(remaining);
        }))
        .with_on_finish(Box::new(move || {
            finish_hook.fetch_add(1, Ordering::SeqCst);
        }));

    drive(&mut timer, 4);

    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(finishes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_fractional_duration_finishes() {
    let seen: Arc<Mutex<Vec<f64>>> = Arc::new(Mutex::new(Vec::new()));
    let finishes = Arc::new(AtomicUsize::new(0));

    let seen_hook = Arc::clone(&seen);
    let finish_hook = Arc::clone(&finishes);
    let mut timer = new(Duration::from_millis(2500))
        .with_on_change(Box::new(move |remaining| {
            seen_hook.lock().unwrap().push(remaining);
        }))
        .with_on_finish(Box::new(move || {
            finish_hook.fetch_add(1, Ordering::SeqCst);
        }));

    drive(&mut timer, 6);

    assert_eq!(*seen.lock().unwrap(), vec![2.5, 1.5, 0.5]);
    assert_eq!(finishes.load(Ordering::SeqCst), 1);
    assert_eq!(timer.remaining(), 0.0);
}

#[test]
fn test_paused_ticks_fire_no_hooks() {
    let finishes = Arc::new(AtomicUsize::new(0));
    let changes = Arc::new(AtomicUsize::new(0));

    let finish_hook = Arc::clone(&finishes);
    let change_hook = Arc::clone(&changes);
    let mut timer = new(Duration::from_secs(10))
        .with_running(false)
        .with_on_change(Box::new(move |_| {
            change_hook.fetch_add(1, Ordering::SeqCst);
        }))
        .with_on_finish(Box::new(move || {
            finish_hook.fetch_add(1, Ordering::SeqCst);
        }));

    drive(&mut timer, 10);

    assert_eq!(changes.load(Ordering::SeqCst), 0);
    assert_eq!(finishes.load(Ordering::SeqCst), 0);
    assert_eq!(timer.remaining(), 10.0);
}

#[test]
fn test_background_resume_reconciles() {
    let mut timer = new(Duration::from_secs(100));
    let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);

    timer.update(Box::new(HostStateMsg::new(HostState::Background, t0)));
    timer.update(Box::new(HostStateMsg::new(
        HostState::Foreground,
        t0 + Duration::from_millis(30_400),
    )));

    assert_close(timer.remaining(), 69.6);

    // The corrected value is picked up by the next tick, not skipped.
    drive(&mut timer, 1);
    assert_close(timer.remaining(), 68.6);
}

#[test]
fn test_background_resume_clamps_at_zero() {
    let mut timer = new(Duration::from_secs(10));
    let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);

    timer.update(Box::new(HostStateMsg::new(HostState::Background, t0)));
    timer.update(Box::new(HostStateMsg::new(
        HostState::Foreground,
        t0 + Duration::from_secs(3600),
    )));

    assert_eq!(timer.remaining(), 0.0);
}

#[test]
fn test_resume_while_paused_skips_correction() {
    let mut timer = new(Duration::from_secs(100)).with_running(false);
    let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);

    timer.update(Box::new(HostStateMsg::new(HostState::Background, t0)));
    timer.update(Box::new(HostStateMsg::new(
        HostState::Foreground,
        t0 + Duration::from_secs(30),
    )));

    assert_eq!(timer.remaining(), 100.0);
}

#[test]
fn test_inactive_is_noop() {
    let mut timer = new(Duration::from_secs(100));
    let t0 = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);

    timer.update(Box::new(HostStateMsg::new(HostState::Inactive, t0)));
    timer.update(Box::new(HostStateMsg::new(
        HostState::Foreground,
        t0 + Duration::from_secs(30),
    )));

    // No suspension was recorded, so nothing is subtracted.
    assert_eq!(timer.remaining(), 100.0);
}

#[test]
fn test_identity_change_resets() {
    let mut timer = new(Duration::from_secs(100)).with_identity("round-1");
    drive(&mut timer, 3);
    assert_eq!(timer.remaining(), 97.0);

    let restart = timer.set_identity(Some("round-2".to_string()));
    assert!(restart.is_some());
    assert_eq!(timer.remaining(), 100.0);
    assert_eq!(timer.identity(), Some("round-2"));
}

#[test]
fn test_same_identity_is_noop() {
    let mut timer = new(Duration::from_secs(100)).with_identity("round-1");
    drive(&mut timer, 3);

    let restart = timer.set_identity(Some("round-1".to_string()));
    assert!(restart.is_none());
    assert_eq!(timer.remaining(), 97.0);
}

#[test]
fn test_identity_change_orphans_old_schedule() {
    let mut timer = new(Duration::from_secs(100));
    let stale = timer.tick_msg();

    timer.set_identity(Some("next".to_string()));
    let cmd = timer.update(Box::new(stale));

    assert!(cmd.is_none());
    assert_eq!(timer.remaining(), 100.0);
}

#[test]
fn test_unmount_tears_down() {
    let mut timer = new(Duration::from_secs(100));
    drive(&mut timer, 4);
    assert_eq!(timer.remaining(), 96.0);

    let stale = timer.tick_msg();
    timer.unmount();

    // Remaining is reset for the next mount and stale messages are no-ops.
    assert_eq!(timer.remaining(), 100.0);
    assert!(timer.update(Box::new(stale)).is_none());
    assert!(timer
        .update(Box::new(HostStateMsg::new(
            HostState::Background,
            SystemTime::UNIX_EPOCH + Duration::from_secs(1),
        )))
        .is_none());
    assert_eq!(timer.remaining(), 100.0);
}

#[test]
fn test_set_duration_resets() {
    let mut timer = new(Duration::from_secs(100));
    drive(&mut timer, 3);

    timer.set_duration(Duration::from_secs(40));
    assert_eq!(timer.remaining(), 40.0);

    drive(&mut timer, 1);
    assert_eq!(timer.remaining(), 39.0);
}

#[test]
fn test_remaining_never_negative() {
    let mut timer = new(Duration::from_secs(2));
    drive(&mut timer, 20);
    assert_eq!(timer.remaining(), 0.0);
}

#[test]
fn test_view_default_units() {
    let timer = new(Duration::from_secs(90061));
    assert_eq!(timer.view(), "01 01 01 01");
}

#[test]
fn test_view_with_separator() {
    let timer = new(Duration::from_secs(3723))
        .with_units(&[Unit::Hours, Unit::Minutes, Unit::Seconds])
        .with_separator(":");
    assert_eq!(timer.view(), "01:02:03");
}

#[test]
fn test_view_with_labels() {
    let timer = new(Duration::from_secs(61))
        .with_units(&[Unit::Minutes, Unit::Seconds])
        .with_labels(crate::style::TimeLabels::default());
    assert_eq!(timer.view(), "01 01\nMinutes Seconds");
}

#[test]
fn test_view_wide_day_count() {
    let timer = new(Duration::from_secs(120 * 86_400)).with_units(&[Unit::Days]);
    assert_eq!(timer.view(), "120");
}

#[test]
fn test_breakdown_accessor() {
    let timer = new(Duration::from_secs(90061));
    let parts = timer.breakdown();
    assert_eq!(parts.days, 1);
    assert_eq!(parts.hours, 1);
    assert_eq!(parts.minutes, 1);
    assert_eq!(parts.seconds, 1);
}

#[test]
fn test_default_model() {
    let timer = Model::default();
    assert_eq!(timer.remaining(), 60.0);
    assert!(timer.running());
}
