//! Cooperative scheduler demo — LED blink and temperature sampling tasks.
//!
//! The LED task toggles every 100 ms and the temperature task samples every
//! 250 ms, logging readings into a fixed-block pool. The run ends either
//! after a fixed duration or when the cancel token fires.
//!
//! Usage:
//!   cargo run -p tickwheel_sim --bin sched_demo -- --duration 1000
//!   cargo run -p tickwheel_sim --bin sched_demo -- --cancel-after 2000

use std::process;
use std::thread;
use std::time::Duration;

use tickwheel_core::pool::BlockPool;
use tickwheel_core::scheduler::{CancelToken, Scheduler};
use tickwheel_sim::{HostDelay, HostTime, SimError};

static CANCEL: CancelToken = CancelToken::new();

struct Config {
    /// Bounded run length; `None` runs until the cancel token fires
    duration_ms: Option<u32>,
    /// When unbounded, cancel from a helper thread after this long
    cancel_after_ms: u64,
}

fn parse_args() -> Result<Config, SimError> {
    let mut config = Config {
        duration_ms: None,
        cancel_after_ms: 2000,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--duration" => config.duration_ms = Some(parse_value(&mut args, "duration")?),
            "--cancel-after" => config.cancel_after_ms = parse_value(&mut args, "cancel-after")?,
            other => return Err(SimError::UnknownOption(other.to_string())),
        }
    }

    Ok(config)
}

fn parse_value<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    name: &'static str,
) -> Result<T, SimError> {
    let raw = args.next().ok_or(SimError::MissingValue(name))?;
    raw.parse().map_err(|_| SimError::InvalidValue(name))
}

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("Usage: sched_demo [--duration MS] [--cancel-after MS]");
            process::exit(2);
        }
    };

    let mut pool_buffer = [0u8; 128];
    let mut pool = BlockPool::new(&mut pool_buffer, 16);
    let samples = pool.alloc().expect("pool has free blocks at startup");

    let report = {
        let mut led_on = false;
        let mut led_task = || {
            led_on = !led_on;
            println!("[led] {}", if led_on { "on" } else { "off" });
        };

        let mut sample_seq = 0u8;
        let mut temp_task = || {
            // Simulated sensor: deci-degree ramp between 21.0 and 23.4 C
            let reading = 210 + sample_seq % 25;
            if let Some(block) = pool.block_mut(samples) {
                block[sample_seq as usize % block.len()] = reading;
            }
            println!("[temp] sample #{}: {:.1} C", sample_seq, reading as f32 / 10.0);
            sample_seq = sample_seq.wrapping_add(1);
        };

        let time = HostTime::new();
        let mut delay = HostDelay::new();
        let mut sched = Scheduler::new();
        sched.add(&mut led_task, 100).expect("register led task");
        sched.add(&mut temp_task, 250).expect("register temp task");

        match config.duration_ms {
            Some(duration_ms) => {
                println!(
                    "Scheduler: running for {duration_ms} ms | tasks: {}",
                    sched.count()
                );
                sched.run_for(duration_ms, &time, &mut delay)
            }
            None => {
                println!(
                    "Scheduler: running until cancelled (auto-cancel after {} ms) | tasks: {}",
                    config.cancel_after_ms,
                    sched.count()
                );
                let deadline = Duration::from_millis(config.cancel_after_ms);
                thread::spawn(move || {
                    thread::sleep(deadline);
                    CANCEL.cancel();
                });
                sched.run(&time, &mut delay, &CANCEL)
            }
        }
    };

    println!();
    print!("{report}");
    println!();
    print!("{}", pool.stats());
}
