use chrono::NaiveDate;
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use planner_core::workout::weekday_name;
use planner_core::*;
use std::io::{self, Write};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fitplan")]
#[command(about = "Personalized workout and diet planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use a specific config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every pipeline step (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one plan and print it (default)
    Plan {
        #[command(flatten)]
        form: FormArgs,

        /// Write the report file, optionally into DIR
        #[arg(long, value_name = "DIR")]
        export: Option<Option<PathBuf>>,

        /// Print the plan as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: regenerate plans and track BMI progress
    Session {
        #[command(flatten)]
        form: FormArgs,

        /// Write the session's progress chart data as CSV on exit
        #[arg(long, value_name = "PATH")]
        progress_csv: Option<PathBuf>,
    },

    /// Write a config file holding the default form values
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Form inputs; anything omitted falls back to the config defaults
#[derive(Args, Clone, Default)]
struct FormArgs {
    #[arg(long)]
    name: Option<String>,

    /// Age in years (16-60)
    #[arg(long, value_parser = bounded(AGE_RANGE))]
    age: Option<u32>,

    /// Male or Female
    #[arg(long)]
    gender: Option<Gender>,

    /// Height in cm (140-200)
    #[arg(long, value_parser = bounded(HEIGHT_RANGE))]
    height: Option<u32>,

    /// Weight in kg (40-120)
    #[arg(long, value_parser = bounded(WEIGHT_RANGE))]
    weight: Option<u32>,

    /// Weight Loss, Muscle Gain or General Fitness
    #[arg(long)]
    goal: Option<Goal>,

    /// Beginner, Intermediate or Advanced
    #[arg(long)]
    level: Option<Level>,

    /// 4, 8 or 12 weeks
    #[arg(long)]
    duration: Option<GoalDuration>,

    /// Vegetarian or Non-Vegetarian
    #[arg(long)]
    diet: Option<Diet>,

    /// Low, Medium or High
    #[arg(long)]
    budget: Option<Budget>,

    /// Plan date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,
}

fn bounded(range: RangeInclusive<u32>) -> RangedU64ValueParser<u32> {
    RangedU64ValueParser::<u32>::new().range(u64::from(*range.start())..=u64::from(*range.end()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    planner_core::logging::init_with_level(planner_core::logging::level_for(cli.verbose));

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(Config::default_config_path);

    match cli.command {
        Some(Commands::Plan { form, export, json }) => {
            let config = load_config(&config_path, cli.config.is_some())?;
            cmd_plan(&form, export, json, &config)
        }
        Some(Commands::Session { form, progress_csv }) => {
            let config = load_config(&config_path, cli.config.is_some())?;
            cmd_session(&form, progress_csv, &config)
        }
        Some(Commands::InitConfig { force }) => cmd_init_config(&config_path, force),
        None => {
            // Default to "plan" command
            let config = load_config(&config_path, cli.config.is_some())?;
            cmd_plan(&FormArgs::default(), None, false, &config)
        }
    }
}

/// An explicit `--config` path must exist; the default path is optional
fn load_config(path: &Path, explicit: bool) -> Result<Config> {
    if path.exists() {
        Config::load_from(path)
    } else if explicit {
        Err(Error::Config(format!(
            "Config file {} does not exist",
            path.display()
        )))
    } else {
        Config::load()
    }
}

impl FormArgs {
    fn profile(&self, config: &Config) -> UserProfile {
        let defaults = &config.profile;
        UserProfile {
            name: self.name.clone().unwrap_or_else(|| defaults.name.clone()),
            age: self.age.unwrap_or(defaults.age),
            gender: self.gender.unwrap_or(defaults.gender),
            height_cm: self.height.unwrap_or(defaults.height_cm),
            weight_kg: self.weight.unwrap_or(defaults.weight_kg),
        }
    }

    fn preferences(&self, config: &Config) -> Preferences {
        let defaults = config.preferences.to_preferences();
        Preferences {
            goal: self.goal.unwrap_or(defaults.goal),
            level: self.level.unwrap_or(defaults.level),
            duration: self.duration.unwrap_or(defaults.duration),
            diet: self.diet.unwrap_or(defaults.diet),
            budget: self.budget.unwrap_or(defaults.budget),
        }
    }

    fn date(&self) -> NaiveDate {
        self.date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

fn cmd_init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}

fn cmd_plan(
    form: &FormArgs,
    export: Option<Option<PathBuf>>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let profile = form.profile(config);
    let preferences = form.preferences(config);
    let date = form.date();

    let mut session = PlannerSession::new();
    let plan = session.generate(&profile, &preferences, date);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_header(date);
        display_plan(&plan);
        display_progress(session.progress());
    }

    if let Some(dir) = export {
        let dir = dir.unwrap_or_else(|| config.export.dir.clone());
        let path = export_plan(&plan, date, &dir, config)?;
        // stdout carries only the JSON document in --json mode
        if !json {
            println!("✓ Plan exported ({}): {}", EXPORT_MIME, path.display());
        }
    }

    if !json {
        println!("\n✓ Personalized fitness plan generated successfully!");
    }

    Ok(())
}

fn cmd_session(form: &FormArgs, progress_csv: Option<PathBuf>, config: &Config) -> Result<()> {
    let mut profile = form.profile(config);
    let mut preferences = form.preferences(config);
    let date = form.date();

    let mut session = PlannerSession::new();
    let mut last_plan: Option<GeneratedPlan> = None;

    display_header(date);
    println!("ℹ BMI progress will become meaningful after multiple weekly entries.");

    loop {
        match prompt_session_action()? {
            SessionAction::Generate => {}
            SessionAction::Update(update) => {
                if let Err(message) = update.apply(&mut profile, &mut preferences) {
                    println!("{}", message);
                    continue;
                }
            }
            SessionAction::Export => {
                match last_plan {
                    Some(ref plan) => {
                        let path = export_plan(plan, date, &config.export.dir, config)?;
                        println!("✓ Plan exported ({}): {}", EXPORT_MIME, path.display());
                    }
                    None => println!("Generate a plan first."),
                }
                continue;
            }
            SessionAction::Invalid(message) => {
                println!("{}", message);
                continue;
            }
            SessionAction::Quit => break,
        }

        let plan = session.generate(&profile, &preferences, date);
        display_plan(&plan);
        display_progress(session.progress());
        last_plan = Some(plan);
    }

    let session_id = session.id;
    let log = session.into_progress();

    if let Some(path) = progress_csv {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let rows = log.write_csv(std::fs::File::create(&path)?)?;
        tracing::info!("Wrote {} progress rows to {:?}", rows, path);
        println!("✓ Wrote {} progress entries to {}", rows, path.display());
    }

    tracing::info!("Session {} ended after {} plans", session_id, log.len());
    println!("Session ended with {} progress entries.", log.len());
    Ok(())
}

fn export_plan(
    plan: &GeneratedPlan,
    date: NaiveDate,
    dir: &Path,
    config: &Config,
) -> Result<PathBuf> {
    let text = plan.export_text(date);
    let path = write_export(dir, &config.export.file_name, &text)?;
    tracing::info!("Exported {} bytes of {} to {:?}", text.len(), EXPORT_MIME, path);
    Ok(path)
}

fn display_header(date: NaiveDate) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  AI-BASED PERSONALIZED WORKOUT & DIET PLANNER");
    println!("╰─────────────────────────────────────────╯");
    println!("  Generated on: {}", date);
}

fn display_plan(plan: &GeneratedPlan) {
    println!("\n── Health Analysis ──");
    println!(
        "  BMI: {:.2} ({})",
        plan.metrics.bmi, plan.metrics.category
    );
    println!(
        "  Goal: {} over {} weeks at {} level",
        plan.preferences.goal,
        plan.preferences.duration.weeks(),
        plan.preferences.level
    );

    println!("\n── Weekly Workout Plan ──");
    for day in plan.workout.iter() {
        println!("\n  {}", weekday_name(day.weekday));
        for line in day.details.lines() {
            println!("    {}", line);
        }
    }

    println!("\n── Diet Plan ──");
    for meal in plan.diet.iter() {
        println!("  • {}", meal);
    }

    println!("\n── Calories & Macronutrients ──");
    println!("  Calories: {} kcal/day", plan.nutrition.calories);
    println!(
        "  Protein: {} g, Carbs: {} g, Fats: {} g",
        plan.nutrition.protein_g, plan.nutrition.carbs_g, plan.nutrition.fats_g
    );

    println!("\n── Smart Fitness Tips ──");
    if plan.tips.is_empty() {
        println!("  (none)");
    }
    for tip in &plan.tips {
        println!("  ⚠ {}", tip);
    }
}

fn display_progress(log: &ProgressLog) {
    let noun = if log.len() == 1 { "entry" } else { "entries" };
    println!("\n── BMI Progress Chart ({} {}) ──", log.len(), noun);
    for (date, bmi) in log.bmi_series() {
        let bar = "█".repeat((bmi / 2.0).round() as usize);
        println!("  {}  {:>5.2}  {}", date, bmi, bar);
    }
}

/// A change to one form input between generations
#[derive(Debug, PartialEq)]
enum FormUpdate {
    Weight(u32),
    Height(u32),
    Goal(Goal),
    Level(Level),
    Diet(Diet),
}

impl FormUpdate {
    /// Apply the change, rejecting numbers outside the form bounds
    fn apply(
        self,
        profile: &mut UserProfile,
        preferences: &mut Preferences,
    ) -> std::result::Result<(), String> {
        match self {
            FormUpdate::Weight(kg) => {
                check_bounds("Weight", kg, &WEIGHT_RANGE, "kg")?;
                profile.weight_kg = kg;
            }
            FormUpdate::Height(cm) => {
                check_bounds("Height", cm, &HEIGHT_RANGE, "cm")?;
                profile.height_cm = cm;
            }
            FormUpdate::Goal(goal) => preferences.goal = goal,
            FormUpdate::Level(level) => preferences.level = level,
            FormUpdate::Diet(diet) => preferences.diet = diet,
        }
        Ok(())
    }
}

fn check_bounds(
    label: &str,
    value: u32,
    range: &RangeInclusive<u32>,
    unit: &str,
) -> std::result::Result<(), String> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "{} must be between {} and {} {}.",
            label,
            range.start(),
            range.end(),
            unit
        ))
    }
}

#[derive(Debug, PartialEq)]
enum SessionAction {
    Generate,
    Update(FormUpdate),
    Export,
    Quit,
    Invalid(String),
}

fn prompt_session_action() -> Result<SessionAction> {
    println!("─────────────────────────────────────────");
    println!("Press Enter to generate the plan");
    println!("  'w <kg>' / 'h <cm>' + Enter to update weight / height and generate");
    println!("  'g <goal>' / 'l <level>' / 'd <diet>' + Enter to change a preference and generate");
    println!("  'e' + Enter to export the last plan");
    println!("  'q' + Enter to quit");
    print!("> ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(SessionAction::Quit);
    }

    Ok(parse_session_action(&input))
}

fn parse_session_action(input: &str) -> SessionAction {
    let input = input.trim();
    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    let number = |value: &str| {
        value
            .parse::<u32>()
            .map_err(|_| format!("Not a whole number: {:?}", value))
    };

    let update = match command.to_lowercase().as_str() {
        "" => return SessionAction::Generate,
        "q" | "quit" => return SessionAction::Quit,
        "e" | "export" => return SessionAction::Export,
        "w" => number(rest).map(FormUpdate::Weight),
        "h" => number(rest).map(FormUpdate::Height),
        "g" => rest.parse().map(FormUpdate::Goal).map_err(|e: Error| e.to_string()),
        "l" => rest.parse().map(FormUpdate::Level).map_err(|e: Error| e.to_string()),
        "d" => rest.parse().map(FormUpdate::Diet).map_err(|e: Error| e.to_string()),
        _ => Err(format!("Unknown command: {}", input)),
    };

    match update {
        Ok(update) => SessionAction::Update(update),
        Err(message) => SessionAction::Invalid(message),
    }
}
