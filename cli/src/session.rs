//! Interactive session loop
//!
//! Drives a `SessionRuntime` from the shared tick stream and stdin. The
//! loop multiplexes clock ticks and user commands on one task, so the
//! runtime's state is never touched from two places at once.

use std::path::PathBuf;

use cadence_core::audio::CueDispatcher;
use cadence_core::clock::ClockSource;
use cadence_core::session::{Phase, SessionRuntime, SessionSnapshot};
use tokio::sync::mpsc;

use crate::CliContext;
use crate::stats_file::FileStatisticsSink;

/// Run one workout session to completion or abandonment.
pub async fn run_session(
    id: &str,
    ctx: &CliContext,
    lines: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), String> {
    let plan = {
        let library = ctx.library.read().await;
        library.get(id).map_err(|e| e.to_string())?.clone()
    };
    let (stats_file, speed) = {
        let config = ctx.config.read().await;
        (config.stats_file.clone(), config.speed_multiplier)
    };

    let sink = FileStatisticsSink::new(PathBuf::from(stats_file));
    let dispatcher = CueDispatcher::new(ctx.cue_tx.clone());

    let mut runtime = SessionRuntime::new(plan, dispatcher, sink).map_err(|e| e.to_string())?;
    runtime.set_speed_multiplier(speed);

    let (mut clock, mut ticks) = ClockSource::start(runtime.snapshot().speed_multiplier);

    println!(
        "Session started: {}. Commands: c=complete  s=skip rest  +/-=adjust 10s  \
         m=mute  1-4=speed  f=finish  q=abandon",
        runtime.plan().name
    );
    render(&runtime.snapshot());

    loop {
        tokio::select! {
            tick = ticks.recv() => {
                if tick.is_none() {
                    break;
                }
                runtime.handle_tick();
                render(&runtime.snapshot());
            }
            line = lines.recv() => {
                let Some(line) = line else {
                    // stdin closed: abandon the session
                    runtime.teardown();
                    break;
                };
                match line.trim() {
                    "" => {}
                    "c" | "complete" => {
                        if let Err(err) = runtime.complete_current_unit() {
                            println!("error: {err}");
                        }
                    }
                    "s" | "skip" => {
                        if let Err(err) = runtime.skip_rest() {
                            println!("error: {err}");
                        }
                    }
                    "f" | "finish" => {
                        if let Err(err) = runtime.complete_workout() {
                            println!("warning: {err}");
                        }
                    }
                    "+" => runtime.adjust_active_countdown(10),
                    "-" => runtime.adjust_active_countdown(-10),
                    "m" | "mute" => runtime.toggle_audio(),
                    rate @ ("1" | "2" | "3" | "4") => {
                        let multiplier = rate.parse::<u8>().unwrap_or(1);
                        runtime.set_speed_multiplier(multiplier);
                        // Restart the clock at the new rate; logical second
                        // counts are unaffected.
                        clock.stop();
                        let (new_clock, new_ticks) =
                            ClockSource::start(runtime.snapshot().speed_multiplier);
                        clock = new_clock;
                        ticks = new_ticks;
                    }
                    "q" | "quit" => {
                        runtime.teardown();
                        println!("Session abandoned.");
                        break;
                    }
                    other => println!("unknown command '{other}'"),
                }

                if runtime.is_finished() {
                    break;
                }
                render(&runtime.snapshot());
            }
        }
    }

    clock.stop();

    if runtime.is_finished() {
        println!(
            "Workout complete. Time: {}",
            format_long(runtime.snapshot().elapsed_total_secs)
        );
    }
    Ok(())
}

fn render(snap: &SessionSnapshot) {
    let elapsed = format_long(snap.elapsed_total_secs);
    let mute = if snap.audio_enabled { "" } else { " [muted]" };
    let speed = if snap.speed_multiplier > 1 {
        format!(" [{}x]", snap.speed_multiplier)
    } else {
        String::new()
    };

    match snap.phase {
        Phase::Resting => {
            // Counters already point at the upcoming unit while resting.
            println!(
                "[{elapsed}]{speed}{mute} Resting {} | next: {} set {}/{}",
                format_clock(snap.active_countdown_secs.into()),
                snap.step_name,
                snap.current_set,
                snap.step_sets
            );
        }
        Phase::Active => {
            let work = match &snap.reps_label {
                Some(reps) => format!("{reps} reps"),
                None => format_clock(snap.active_countdown_secs.into()),
            };
            let tail = if snap.last_unit {
                " | last set, 'f' to finish"
            } else {
                ""
            };
            println!(
                "[{elapsed}]{speed}{mute} {} set {}/{} | {work}{tail}",
                snap.step_name, snap.current_set, snap.step_sets
            );
        }
        Phase::Finished => {}
    }
}

fn format_clock(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

fn format_long(total_secs: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        total_secs / 3600,
        (total_secs % 3600) / 60,
        total_secs % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(90), "01:30");
        assert_eq!(format_long(3723), "01:02:03");
    }
}
