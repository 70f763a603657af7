use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::TestScenario;
use crate::logic::clock::resolve_hour;

/// Inputs handed to a logic check for one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicCtx {
    pub seed: u64,
    pub hour: u32,
    pub iteration: usize,
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

pub struct LogicTester {
    verbose: bool,
    pinned_hour: Option<u32>,
}

impl LogicTester {
    pub const fn new(verbose: bool, pinned_hour: Option<u32>) -> Self {
        Self {
            verbose,
            pinned_hour,
        }
    }

    pub fn run_scenario(
        &self,
        scenario: &TestScenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        let mut results = Vec::with_capacity(seeds.len());

        for &seed in seeds {
            if self.verbose {
                println!(
                    "🧪 Testing scenario: {} (seed: {})",
                    scenario.name.bright_white(),
                    seed
                );
            }
            results.push(self.run_single_scenario(scenario, seed, iterations));
        }

        results
    }

    fn run_single_scenario(
        &self,
        scenario: &TestScenario,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::with_capacity(iterations);

        for i in 0..iterations {
            let ctx = LogicCtx {
                seed: seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX)),
                hour: resolve_hour(self.pinned_hour).hour(),
                iteration: i,
                verbose: self.verbose,
            };

            let start_time = Instant::now();
            match (scenario.check)(&ctx) {
                Ok(()) => {
                    successes += 1;
                    let duration = start_time.elapsed();
                    performance_data.push(duration);
                    if self.verbose {
                        println!(
                            "  ✅ Iteration {}/{} passed ({duration:?}) hour:{:02}",
                            i + 1,
                            iterations,
                            ctx.hour
                        );
                    }
                }
                Err(err) => {
                    let message = format!(
                        "Iteration {} (seed {}, hour {:02}): {err:#}",
                        ctx.iteration + 1,
                        ctx.seed,
                        ctx.hour
                    );
                    if self.verbose {
                        println!("  ❌ {}", message.clone().red());
                    }
                    log::debug!("{} failed: {message}", scenario.name);
                    failures.push(message);
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(u32::MAX)
        };

        ScenarioResult {
            scenario_name: scenario.name.clone(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
            performance_data,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(u64::MAX)))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let micros: Vec<u128> = durations.iter().map(Duration::as_micros).collect();
        micros.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = Vec::<u128>::deserialize(deserializer)?;
        Ok(micros
            .into_iter()
            .map(|m| Duration::from_micros(u64::try_from(m).unwrap_or(u64::MAX)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::ensure;

    fn passes(_: &LogicCtx) -> anyhow::Result<()> {
        Ok(())
    }

    fn odd_seeds_fail(ctx: &LogicCtx) -> anyhow::Result<()> {
        ensure!(ctx.seed % 2 == 0, "odd seed {}", ctx.seed);
        Ok(())
    }

    fn pinned_to_five(ctx: &LogicCtx) -> anyhow::Result<()> {
        ensure!(ctx.hour == 5, "hour was {}", ctx.hour);
        Ok(())
    }

    #[test]
    fn runs_one_result_per_seed() {
        let tester = LogicTester::new(false, None);
        let scenario = TestScenario::new("Always", passes);
        let results = tester.run_scenario(&scenario, &[1, 2, 3], 4);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.passed && r.successful_iterations == 4));
        assert_eq!(results[1].seed, 2);
    }

    #[test]
    fn iteration_seeds_advance_from_the_base_seed() {
        let tester = LogicTester::new(false, None);
        let scenario = TestScenario::new("Odd", odd_seeds_fail);
        let results = tester.run_scenario(&scenario, &[10], 4);
        let result = &results[0];
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 2);
        assert_eq!(result.failures.len(), 2);
        assert!(result.failures[0].contains("seed 11"));
        assert_eq!(result.performance_data.len(), 2);
    }

    #[test]
    fn pinned_hour_reaches_the_check() {
        let tester = LogicTester::new(false, Some(5));
        let scenario = TestScenario::new("Hour", pinned_to_five);
        assert!(tester.run_scenario(&scenario, &[1], 2)[0].passed);
    }

    #[test]
    fn result_serializes_durations_as_micros() {
        let result = ScenarioResult {
            scenario_name: "Smoke".to_string(),
            seed: 1,
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_millis(2),
            performance_data: vec![Duration::from_millis(2)],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["average_duration"], 2000);
        let back: ScenarioResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.performance_data, vec![Duration::from_millis(2)]);
    }
}
