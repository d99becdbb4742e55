//! Headless fishing runner.
//!
//! Runs a session under a simulated clock with an auto-angler that casts
//! whenever idle and reels a fixed number of ticks after each bite.
//!
//! Usage:
//!   castaway [OPTIONS]
//!
//! Examples:
//!   castaway                       # Ten simulated minutes, saved to ~/.castaway
//!   castaway -t 216000 --seed 42   # An hour, reproducible
//!   castaway --no-save -q          # Dry run, summary only

use std::env;
use std::process::ExitCode;

use castaway::config::{parse_args, Settings, USAGE};
use castaway::core::constants::TICKS_PER_SECOND;
use castaway::core::{Session, TickEvent};
use castaway::fishing::EncounterState;
use castaway::profile::Profile;
use chrono::{Duration, Local};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("castaway=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let cli = parse_args(&args);
    if cli.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let (save_dir, has_home) = match cli.resolve_save_dir() {
        Ok(dir) => (dir, true),
        Err(e) => {
            tracing::warn!(error = %e, "no save directory, running without persistence");
            (env::temp_dir().join("castaway"), false)
        }
    };
    let mut settings = Settings::load(&save_dir);
    settings.apply(&cli);
    settings.persist &= has_home;
    let save_dir = settings.save_dir.clone().unwrap_or(save_dir);

    let mut now = Local::now().naive_local();
    let session = if settings.persist {
        Session::load(&save_dir, now, settings.seed)
    } else {
        Session::new(Profile::load(&save_dir), now, settings.seed)
    };
    let mut session = match session {
        Ok(session) => session,
        Err(e) => {
            eprintln!("invalid game data: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(claim) = session.claim_daily() {
        println!(
            "Daily reward (day {} streak): +{} gold, +{} exp",
            claim.streak, claim.gold, claim.exp
        );
    }

    let tick_length = Duration::microseconds(1_000_000 / TICKS_PER_SECOND as i64);
    for _ in 0..settings.ticks {
        match session.encounter().state() {
            EncounterState::Idle => {
                session.request_cast();
            }
            EncounterState::Bite
                if session.encounter().bite_elapsed() >= settings.reaction_ticks =>
            {
                session.request_cast();
            }
            _ => {}
        }

        now += tick_length;
        let result = session.tick(now);
        if !cli.quiet {
            for event in &result.events {
                print_event(event);
            }
        }
    }

    let profile = session.finish();
    print_summary(&profile, settings.ticks);
    ExitCode::SUCCESS
}

fn print_event(event: &TickEvent) {
    match event {
        TickEvent::WeatherChanged(change) => {
            println!("~ Weather: {} -> {}", change.from.name(), change.to.name());
        }
        TickEvent::FishCaught {
            name,
            is_shiny,
            value,
            ..
        } => {
            let sparkle = if *is_shiny { " *" } else { "" };
            println!("> Caught {}{} (+{} gold)", name, sparkle, value);
        }
        TickEvent::Escaped => println!("x It got away..."),
        TickEvent::LevelUp { level } => println!("^ Level up! Now level {}", level),
        TickEvent::AchievementUnlocked { id, gold_reward } => {
            let name = castaway::achievements::get_achievement_def(*id)
                .map(|d| d.name)
                .unwrap_or("?");
            println!("! Achievement: {} (+{} gold)", name, gold_reward);
        }
        TickEvent::TraitUnlocked { id } => println!("! Trait unlocked: {}", id),
        TickEvent::LoreDiscovered { id } => println!("? Lore discovered: {}", id),
        TickEvent::DailyReset
        | TickEvent::LineOut { .. }
        | TickEvent::Bite
        | TickEvent::ReturnedToIdle => {}
    }
}

fn print_summary(profile: &Profile, ticks: u64) {
    let stats = &profile.statistics;
    let progression = &profile.progression;
    println!();
    println!("══════════════════════════════════════");
    println!(
        "  Simulated:    {:.1} min",
        ticks as f64 / TICKS_PER_SECOND as f64 / 60.0
    );
    println!("  Level:        {}", progression.level);
    println!("  Gold:         {}", progression.gold);
    println!("  Catches:      {}", stats.total_catches);
    println!("  Shinies:      {}", stats.total_shinies);
    println!("  Success rate: {:.1}%", stats.success_rate());
    println!(
        "  Collection:   {}/{} ({:.1}%)",
        profile.collection.unique_species(),
        profile.collection.caught_fish.len(),
        profile.collection.completion_percentage()
    );
    println!(
        "  Achievements: {}/{}",
        profile.achievements.unlocked_count(),
        profile.achievements.total_count()
    );
    if let Some(record) = &stats.most_valuable_fish {
        println!("  Best fish:    {} ({} gold)", record.name, record.value);
    }
    println!("══════════════════════════════════════");
}
