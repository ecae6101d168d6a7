use std::io::Write;

use cadence_core::config::AppConfigExt;

use crate::CliContext;

pub async fn list_plans(ctx: &CliContext) {
    let library = ctx.library.read().await;

    if library.is_empty() {
        println!("No plans loaded. Use `set-directory` to point at your plans folder.");
        return;
    }

    println!("{:<20} {:<30} {:>5} {:>6}", "Id", "Name", "Steps", "Sets");
    println!("{}", "-".repeat(65));
    for plan in library.entries() {
        println!(
            "{:<20} {:<30} {:>5} {:>6}",
            plan.id,
            plan.name,
            plan.steps.len(),
            plan.total_sets()
        );
    }

    println!("\nTotal: {} plans", library.len());
}

pub async fn show_plan(id: &str, ctx: &CliContext) {
    let library = ctx.library.read().await;
    let plan = match library.get(id) {
        Ok(plan) => plan,
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    println!("{} ({})", plan.name, plan.id);
    if plan.complete_duration_step_on_end {
        println!("  duration steps auto-complete");
    }
    for step in &plan.steps {
        let work = match step.reps_label() {
            Some(reps) => format!("{reps} reps"),
            None => format!("{}s", step.duration_secs),
        };
        println!(
            "  {:<25} {} sets x {work}, rest {}s",
            step.name, step.sets, step.rest_secs
        );
    }
}

pub async fn show_config(ctx: &CliContext) {
    let config = ctx.config.read().await;
    println!("plans directory:  {}", config.plans_directory);
    println!("sounds directory: {}", config.sounds_directory);
    println!("statistics file:  {}", config.stats_file);
    println!("speed multiplier: {}x", config.speed_multiplier);
    println!(
        "audio:            {} (volume {})",
        if config.audio.enabled { "on" } else { "off" },
        config.audio.volume
    );
}

pub async fn set_plans_directory(path: &str, ctx: &CliContext) {
    {
        let mut config = ctx.config.write().await;
        config.plans_directory = path.to_string();
        if let Err(err) = config.save() {
            println!("warning: {err}");
        }
    }
    reload(ctx).await;
}

pub async fn reload(ctx: &CliContext) {
    match ctx.reload_library().await {
        Ok(count) => println!("loaded {count} plans"),
        Err(err) => println!("{err}"),
    }
}

pub fn exit() {
    write!(std::io::stdout(), "quitting...").expect("error exiting");
    std::io::stdout().flush().expect("error flushing stdout");
}
