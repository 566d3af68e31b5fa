//! `studycoach status` — Show configuration and catalog summary.

use std::path::Path;

use studycoach_config::AppConfig;

use super::build_planner;

pub async fn run(config: &AppConfig, config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let planner = build_planner(config)?;

    println!("🎓 StudyCoach Status");
    println!("===================");
    println!("  Config file:  {}", config_path.display());
    println!("  Log format:   {}", config.logging.format);
    println!("  Weak weight:  x{}", planner.policy().weak_weight);
    println!(
        "  Chunk cap:    {}% of a day",
        planner.policy().chunk_fraction * 100.0
    );
    println!(
        "  Day full at:  {}% of a day",
        planner.policy().day_fullness * 100.0
    );
    println!();
    println!("  Modules:");
    for module in planner.catalog().modules() {
        let with_tasks = module
            .topics
            .iter()
            .filter(|t| !module.tasks_for(t).is_empty())
            .count();
        println!(
            "    - {} ({} topics, {} with practice tasks)",
            module.name,
            module.topics.len(),
            with_tasks
        );
    }

    if config_path.exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file — using built-in defaults (`studycoach config init`)");
    }

    Ok(())
}
