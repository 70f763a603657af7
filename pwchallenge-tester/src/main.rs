mod browser;
mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use pwchallenge_game::{Clock, RuleCatalog};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use browser::{BrowserConfig, BrowserKind, TestBridge, new_session};
use common::scenario::{ScenarioCtx, get_scenario, list_scenarios};
use common::{artifacts_dir, capture_artifacts, split_csv};
use logic::{LogicTester, ScenarioResult, resolve_seeds};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Rule engine checks (fast, no browser)
    Logic,
    /// Browser automation against a served page
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "pwchallenge-tester", version)]
#[command(about = "Automated QA for the Ultimate Password Challenge - rule engine and browser")]
struct Args {
    /// Test mode: logic (fast), browser (visual), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated integers, `0x` hex allowed)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed (logic mode only)
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Pin the hour seen by the clock rule instead of reading local time (logic mode only)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
    hour: Option<u32>,

    /// Print every reference rule's verdict for this password and exit
    #[arg(long, value_name = "PASSWORD")]
    probe: Option<String>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL of the page (should include ?test=1 to expose the bridge)
    #[arg(long, default_value = "http://localhost:8080/?test=1")]
    base_url: String,

    /// Artifacts directory for screenshots and logs
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? || maybe_probe(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let seeds = resolve_seeds(&split_csv(&args.seeds))?;

    let results = run_logic_scenarios(&args, &scenarios, &seeds);
    let browser_failures = run_browser_scenarios(&args, &scenarios, &seeds).await?;

    write_reports(&args, &results, start_time)?;

    if browser_failures > 0 || results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:20} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn maybe_probe(args: &Args) -> Result<bool> {
    let Some(password) = args.probe.as_deref() else {
        return Ok(false);
    };
    let clock = logic::clock::resolve_hour(args.hour);
    let mut output_target = OutputTarget::new(args.output.clone())?;
    logic::probe::write_probe(
        output_target.writer(),
        RuleCatalog::standard(),
        password,
        &clock,
    )?;
    output_target.flush_inner()?;
    log::debug!("probed at hour {:02}", clock.local_hour());
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🔐 Password Challenge Automated Tester".bright_cyan().bold());
    println!("{}", "======================================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s.eq_ignore_ascii_case("all")) {
        scenarios.retain(|s| !s.eq_ignore_ascii_case("all"));
        for (key, _) in list_scenarios() {
            if !scenarios.iter().any(|s| s == key) {
                scenarios.push(key.to_string());
            }
        }
    }
    scenarios
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        implicit_wait_secs: 3,
        remote_hub: args.hub.clone(),
    }
}

fn scenario_artifacts_dir(args: &Args, kind: BrowserKind, scenario: &str, seed: u64) -> PathBuf {
    artifacts_dir(&args.artifacts_dir, kind.key(), scenario, seed)
}

fn run_logic_scenarios(args: &Args, scenarios: &[String], seeds: &[u64]) -> Vec<ScenarioResult> {
    let mut results: Vec<ScenarioResult> = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let logic_tester = LogicTester::new(args.verbose, args.hour);

    for scenario_name in scenarios {
        if let Some(combined_scenario) = get_scenario(scenario_name) {
            if let Some(logic_scenario) = combined_scenario.as_logic_scenario() {
                results.extend(logic_tester.run_scenario(
                    &logic_scenario,
                    seeds,
                    args.iterations,
                ));
            } else {
                eprintln!(
                    "⚠️  Scenario {} has no logic test implementation",
                    scenario_name.yellow()
                );
            }
        } else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
        }
    }

    results
}

/// Returns how many browser runs failed.
async fn run_browser_scenarios(args: &Args, scenarios: &[String], seeds: &[u64]) -> Result<usize> {
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return Ok(0);
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let scenarios = browser_scenarios(scenarios);
    let cfg = build_browser_config(args);
    let mut failures = 0;

    for browser_name in split_csv(&args.browsers) {
        let kind = match browser_name.parse::<BrowserKind>() {
            Ok(kind) => kind,
            Err(err) => {
                eprintln!("⚠️  {}", err.to_string().yellow());
                continue;
            }
        };

        let driver = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {}: {e}", kind.key());
                continue;
            }
        };

        failures += run_browser_scenarios_for_driver(args, &scenarios, seeds, kind, &driver).await;
        if let Err(err) = driver.quit().await {
            log::warn!("closing {} session failed: {err}", kind.key());
        }
    }

    Ok(failures)
}

/// Drops scenarios the served page cannot exercise. Unknown names pass through
/// so the runner can report them.
fn browser_scenarios(scenarios: &[String]) -> Vec<String> {
    scenarios
        .iter()
        .filter(|name| {
            let runs = get_scenario(name).is_none_or(|scenario| scenario.runs_in_browser());
            if !runs {
                println!("⏭️  Skipping {} in the browser (logic only)", name.yellow());
            }
            runs
        })
        .cloned()
        .collect()
}

async fn run_browser_scenarios_for_driver(
    args: &Args,
    scenarios: &[String],
    seeds: &[u64],
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) -> usize {
    let mut failures = 0;
    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        for &seed in seeds {
            let ctx = ScenarioCtx {
                base_url: args.base_url.clone(),
                seed,
                bridge: TestBridge::new(driver),
                verbose: args.verbose,
            };

            let scenario_start = Instant::now();
            match scenario.run_browser(driver, &ctx).await {
                Ok(()) => {
                    println!(
                        "✅ [{} seed {}] {} - {:?}",
                        kind.key().green(),
                        seed,
                        scenario_name,
                        scenario_start.elapsed()
                    );
                }
                Err(e) => {
                    failures += 1;
                    eprintln!(
                        "❌ [{} seed {}] {} - {:?}: {:#}",
                        kind.key().red(),
                        seed,
                        scenario_name,
                        scenario_start.elapsed(),
                        e
                    );
                    let dir = scenario_artifacts_dir(args, kind, scenario_name, seed);
                    if let Err(capture_err) = capture_artifacts(driver, &dir, &e).await {
                        log::warn!("could not save artifacts: {capture_err:#}");
                    }
                }
            }
        }
    }
    failures
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => {
            logic::reports::generate_json_report(&mut output_target, results)?;
        }
        ReportFormat::Markdown => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Password Challenge Logic Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        ReportFormat::Console => {
            if results.is_empty() {
                writeln!(&mut output_target, "No logic scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
