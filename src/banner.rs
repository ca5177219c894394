use colored::Colorize;

use crate::{app::AppContext, boot::ServeParams};

const BANNER: &str = r"
  _ __   ___ | |_ ___  ___
 | '_ \ / _ \| __/ _ \/ __|
 | | | | (_) | ||  __/\__ \
 |_| |_|\___/ \__\___||___/
";

/// Schema switches that are on, most destructive last.
fn schema_flags(ctx: &AppContext) -> Vec<String> {
    let database = &ctx.config.database;
    [
        (database.enable_logging, "logging".green()),
        (database.auto_migrate, "automigrate".yellow()),
        (database.dangerously_truncate, "truncate".bright_red()),
        (database.dangerously_recreate, "recreate".bright_red()),
    ]
    .into_iter()
    .filter_map(|(on, label)| on.then(|| label.to_string()))
    .collect()
}

pub fn print_banner(ctx: &AppContext, params: &ServeParams) {
    println!("{BANNER}");
    println!("environment: {}", ctx.environment.to_string().green());

    let flags = schema_flags(ctx);
    if !flags.is_empty() {
        println!("   database: {}", flags.join(", "));
    }

    let logger = &ctx.config.logger;
    let level = if logger.enable {
        logger.level.to_string().green()
    } else {
        "disabled".bright_red()
    };
    println!("     logger: {level}");
    println!("      title: first {} characters of content", ctx.settings.symbol_count);
    println!();
    println!(
        "listening on http://{}:{}",
        params.binding,
        params.port.to_string().green()
    );
}
