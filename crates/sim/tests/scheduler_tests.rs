//! End-to-end scheduler runs against the real host clock and pacing.

use std::thread;
use std::time::Duration;

use tickwheel_core::pool::BlockPool;
use tickwheel_core::scheduler::{CancelToken, Scheduler};
use tickwheel_sim::{HostDelay, HostTime};

#[test]
fn three_task_bounded_run() {
    let time = HostTime::new();
    let mut delay = HostDelay::new();

    let mut fast = || {};
    let mut medium = || {};
    let mut slow = || {};
    let mut sched = Scheduler::new();
    let fast_id = sched.add(&mut fast, 5).unwrap();
    let medium_id = sched.add(&mut medium, 10).unwrap();
    let slow_id = sched.add(&mut slow, 25).unwrap();

    let report = sched.run_for(25, &time, &mut delay);

    // Ticks are simulated time, so the counts are exact no matter how long
    // the host actually slept
    assert_eq!(report.total_ticks, 25);
    assert_eq!(report.tasks[fast_id].run_count, 5);
    assert_eq!(report.tasks[medium_id].run_count, 2);
    assert_eq!(report.tasks[slow_id].run_count, 1);
    assert_eq!(report.active_ticks, 5);
    assert!((report.cpu_load() - 20.0).abs() < f32::EPSILON);
}

#[test]
fn runtime_is_measured_with_the_host_clock() {
    let time = HostTime::new();
    let mut delay = HostDelay::new();

    let mut busy = || thread::sleep(Duration::from_millis(2));
    let mut sched = Scheduler::new();
    let id = sched.add(&mut busy, 10).unwrap();

    let report = sched.run_for(30, &time, &mut delay);

    assert_eq!(report.tasks[id].run_count, 3);
    // Three 2 ms sleeps: at least 6 ms of measured runtime
    assert!(report.tasks[id].runtime_us >= 6_000);
}

#[test]
fn cancellation_from_another_thread() {
    static CANCEL: CancelToken = CancelToken::new();

    let time = HostTime::new();
    let mut delay = HostDelay::new();

    let mut cb = || {};
    let mut sched = Scheduler::new();
    let id = sched.add(&mut cb, 5).unwrap();

    let canceller = thread::spawn(|| {
        thread::sleep(Duration::from_millis(50));
        CANCEL.cancel();
    });

    let report = sched.run(&time, &mut delay, &CANCEL);
    canceller.join().unwrap();

    // The loop observed the token at an iteration boundary after ~50 ms of
    // 1 ms ticks; exact totals depend on host sleep jitter
    assert!(report.total_ticks > 0);
    assert_eq!(
        report.tasks[id].run_count,
        report.total_ticks / 5,
        "one fire per full period"
    );
    assert_eq!(report.total_ticks, sched.total_ticks());
}

#[test]
fn task_context_drawn_from_block_pool() {
    let time = HostTime::new();
    let mut delay = HostDelay::new();

    let mut buffer = [0u8; 64];
    let mut pool = BlockPool::new(&mut buffer, 16);
    let context = pool.alloc().unwrap();

    {
        let mut sampler = || {
            if let Some(block) = pool.block_mut(context) {
                block[0] += 1;
            }
        };
        let mut sched = Scheduler::new();
        sched.add(&mut sampler, 4).unwrap();
        sched.run_for(20, &time, &mut delay);
    }

    assert_eq!(pool.block(context).unwrap()[0], 5);
    assert_eq!(pool.stats().alloc_count, 1);
}
