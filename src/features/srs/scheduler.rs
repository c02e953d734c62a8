//! Interval scheduling for flashcards.
//!
//! Cards start in a short learning ladder (10 minutes, then one day) and
//! graduate to a review phase where the interval grows by the card's ease
//! factor. A lapse sends the card back to the start of the ladder.
//!
//! All arithmetic is integer: intervals in minutes, ease factors in percent.

use crate::data::models::{Grade, SchedulingState};

pub const MINUTES_PER_DAY: i32 = 1440;

/// Tuning constants for [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Floor applied to the ease factor on a lapse, in percent.
    pub min_ease_factor: i32,
    /// Ease factor lost on a lapse, in percentage points.
    pub lapse_ease_penalty: i32,
    /// Ease factor gained on Easy, in percentage points.
    pub easy_ease_bonus: i32,
    /// Interval after a lapse, in minutes.
    pub lapse_interval: i32,
    /// Interval after the first successful learning review, in minutes.
    pub learning_step: i32,
    /// Interval when a card leaves the learning phase, in minutes.
    pub graduating_interval: i32,
    /// Interval when Easy graduates a learning card, in minutes.
    pub easy_interval: i32,
    /// Extra multiplier applied on top of the ease factor for Easy, in percent.
    pub easy_multiplier: i32,
    /// Upper bound on any interval, in minutes.
    pub max_interval: i32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            min_ease_factor: 130,
            lapse_ease_penalty: 20,
            easy_ease_bonus: 15,
            lapse_interval: 1,
            learning_step: 10,
            graduating_interval: MINUTES_PER_DAY,
            easy_interval: 4 * MINUTES_PER_DAY,
            easy_multiplier: 130,
            max_interval: 36_500 * MINUTES_PER_DAY,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
}

impl Scheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Scheduler { config }
    }

    /// Computes the state that follows `state` after a review graded `grade`.
    pub fn advance(&self, grade: Grade, state: &SchedulingState) -> SchedulingState {
        let mut next = match grade {
            Grade::Again => self.lapse(state),
            Grade::Good => self.good(state),
            Grade::Easy => self.easy(state),
        };
        next.interval = next.interval.clamp(1, self.config.max_interval);
        next
    }

    fn lapse(&self, state: &SchedulingState) -> SchedulingState {
        SchedulingState {
            ease_factor: state
                .ease_factor
                .saturating_sub(self.config.lapse_ease_penalty)
                .max(self.config.min_ease_factor),
            interval: self.config.lapse_interval,
            repetition: 0,
            is_learning: true,
        }
    }

    fn good(&self, state: &SchedulingState) -> SchedulingState {
        if state.is_learning || state.repetition == 0 {
            return match state.repetition {
                0 => SchedulingState {
                    interval: self.config.learning_step,
                    repetition: 1,
                    is_learning: true,
                    ..*state
                },
                1 => SchedulingState {
                    interval: self.config.graduating_interval,
                    repetition: 2,
                    is_learning: false,
                    ..*state
                },
                // Not produced by any transition here; graduate anyway.
                repetition => SchedulingState {
                    interval: self.config.graduating_interval,
                    repetition: repetition.saturating_add(1),
                    is_learning: false,
                    ..*state
                },
            };
        }

        SchedulingState {
            interval: self.grow(state.interval, i64::from(state.ease_factor) * 100),
            repetition: state.repetition.saturating_add(1),
            is_learning: false,
            ..*state
        }
    }

    fn easy(&self, state: &SchedulingState) -> SchedulingState {
        let ease_factor = state.ease_factor.saturating_add(self.config.easy_ease_bonus);

        if state.is_learning || state.repetition <= 1 {
            return SchedulingState {
                ease_factor,
                interval: self.config.easy_interval,
                repetition: 2,
                is_learning: false,
            };
        }

        let factor = i64::from(state.ease_factor) * i64::from(self.config.easy_multiplier);
        SchedulingState {
            ease_factor,
            interval: self.grow(state.interval, factor),
            repetition: state.repetition.saturating_add(1),
            is_learning: false,
        }
    }

    /// Multiplies a whole-day interval by `factor` (in units of 1/10000),
    /// flooring to at least one day. The result is capped at the maximum
    /// interval before converting back to `i32`.
    fn grow(&self, interval: i32, factor: i64) -> i32 {
        let days = i64::from((interval / MINUTES_PER_DAY).max(1));
        let new_days = (days * factor / 10_000).max(1);
        new_days
            .saturating_mul(i64::from(MINUTES_PER_DAY))
            .min(i64::from(self.config.max_interval)) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i32 = MINUTES_PER_DAY;

    fn review_state(ease_factor: i32, interval: i32, repetition: i32) -> SchedulingState {
        SchedulingState {
            ease_factor,
            interval,
            repetition,
            is_learning: false,
        }
    }

    fn sample_states() -> Vec<SchedulingState> {
        let mut states = Vec::new();
        for ease_factor in [130, 131, 150, 250, 400, 10_000, i32::MAX] {
            for interval in [1, 10, 59, 60, DAY, 2 * DAY, 365 * DAY, 36_500 * DAY] {
                for repetition in [0, 1, 2, 3, 50] {
                    for is_learning in [true, false] {
                        states.push(SchedulingState {
                            ease_factor,
                            interval,
                            repetition,
                            is_learning,
                        });
                    }
                }
            }
        }
        states
    }

    #[test]
    fn ease_factor_never_drops_below_floor() {
        let scheduler = Scheduler::default();
        for state in sample_states() {
            for grade in [Grade::Again, Grade::Good, Grade::Easy] {
                let next = scheduler.advance(grade, &state);
                assert!(next.ease_factor >= 130, "{grade:?} from {state:?} gave {next:?}");
            }
        }
    }

    #[test]
    fn interval_stays_within_bounds() {
        let scheduler = Scheduler::default();
        for state in sample_states() {
            for grade in [Grade::Again, Grade::Good, Grade::Easy] {
                let next = scheduler.advance(grade, &state);
                assert!(
                    (1..=36_500 * DAY).contains(&next.interval),
                    "{grade:?} from {state:?} gave {next:?}"
                );
            }
        }
    }

    #[test]
    fn lapse_always_resets_learning() {
        let scheduler = Scheduler::default();
        for state in sample_states() {
            let next = scheduler.advance(Grade::Again, &state);
            assert_eq!(next.repetition, 0);
            assert!(next.is_learning);
            assert_eq!(next.interval, 1);
        }
    }

    #[test]
    fn lapse_reduces_ease_down_to_floor() {
        let scheduler = Scheduler::default();
        assert_eq!(scheduler.advance(Grade::Again, &review_state(250, DAY, 4)).ease_factor, 230);
        assert_eq!(scheduler.advance(Grade::Again, &review_state(140, DAY, 4)).ease_factor, 130);
        assert_eq!(scheduler.advance(Grade::Again, &review_state(130, DAY, 4)).ease_factor, 130);
    }

    #[test]
    fn good_walks_the_learning_ladder() {
        let scheduler = Scheduler::default();
        let fresh = SchedulingState::new_card();

        let first = scheduler.advance(Grade::Good, &fresh);
        assert_eq!(
            first,
            SchedulingState {
                ease_factor: 250,
                interval: 10,
                repetition: 1,
                is_learning: true,
            }
        );

        let second = scheduler.advance(Grade::Good, &first);
        assert_eq!(
            second,
            SchedulingState {
                ease_factor: 250,
                interval: DAY,
                repetition: 2,
                is_learning: false,
            }
        );
    }

    #[test]
    fn easy_graduates_a_fresh_card() {
        let next = Scheduler::default().advance(Grade::Easy, &SchedulingState::new_card());
        assert_eq!(
            next,
            SchedulingState {
                ease_factor: 265,
                interval: 4 * DAY,
                repetition: 2,
                is_learning: false,
            }
        );
    }

    #[test]
    fn easy_graduates_from_the_second_learning_step() {
        let state = SchedulingState {
            ease_factor: 250,
            interval: 10,
            repetition: 1,
            is_learning: true,
        };
        let next = Scheduler::default().advance(Grade::Easy, &state);
        assert_eq!(next.interval, 4 * DAY);
        assert_eq!(next.repetition, 2);
        assert!(!next.is_learning);
    }

    #[test]
    fn good_in_review_multiplies_by_ease() {
        let next = Scheduler::default().advance(Grade::Good, &review_state(250, DAY, 2));
        assert_eq!(next, review_state(250, 2 * DAY, 3));

        // 10 days * 2.5 = 25 days
        let next = Scheduler::default().advance(Grade::Good, &review_state(250, 10 * DAY, 3));
        assert_eq!(next, review_state(250, 25 * DAY, 4));
    }

    #[test]
    fn good_in_review_floors_partial_days() {
        // 3 days * 1.3 = 3.9 days -> 3 days; sub-day remainder of the old interval is dropped
        let next = Scheduler::default().advance(Grade::Good, &review_state(130, 3 * DAY + 700, 5));
        assert_eq!(next.interval, 3 * DAY);
        assert_eq!(next.ease_factor, 130);
    }

    #[test]
    fn sub_day_review_interval_counts_as_one_day() {
        let next = Scheduler::default().advance(Grade::Good, &review_state(250, 30, 2));
        assert_eq!(next.interval, 2 * DAY);
    }

    #[test]
    fn easy_in_review_applies_bonus() {
        // 10 days * 2.5 * 1.3 = 32.5 days -> 32 days
        let next = Scheduler::default().advance(Grade::Easy, &review_state(250, 10 * DAY, 3));
        assert_eq!(next, review_state(265, 32 * DAY, 4));
    }

    #[test]
    fn easy_multiplier_is_exact_integer_math() {
        // 2 * 2.0 * 1.3 = 5.2 and 5 * 2.0 * 1.3 = 13.0 exactly
        let scheduler = Scheduler::default();
        assert_eq!(scheduler.advance(Grade::Easy, &review_state(200, 2 * DAY, 3)).interval, 5 * DAY);
        assert_eq!(scheduler.advance(Grade::Easy, &review_state(200, 5 * DAY, 3)).interval, 13 * DAY);
    }

    #[test]
    fn learning_fallback_graduates() {
        let state = SchedulingState {
            ease_factor: 250,
            interval: 10,
            repetition: 3,
            is_learning: true,
        };
        let next = Scheduler::default().advance(Grade::Good, &state);
        assert_eq!(next.repetition, 4);
        assert_eq!(next.interval, DAY);
        assert!(!next.is_learning);
    }

    #[test]
    fn relearning_after_lapse_restarts_ladder() {
        let scheduler = Scheduler::default();
        let lapsed = scheduler.advance(Grade::Again, &review_state(250, 20 * DAY, 6));
        let next = scheduler.advance(Grade::Good, &lapsed);
        assert_eq!(next.repetition, 1);
        assert_eq!(next.interval, 10);
        assert!(next.is_learning);
        assert_eq!(next.ease_factor, 230);
    }

    #[test]
    fn interval_is_capped_at_one_hundred_years() {
        let next = Scheduler::default().advance(Grade::Good, &review_state(250, 36_500 * DAY, 40));
        assert_eq!(next.interval, 36_500 * DAY);

        let next = Scheduler::default().advance(Grade::Easy, &review_state(i32::MAX, 20_000 * DAY, 40));
        assert_eq!(next.interval, 36_500 * DAY);
    }

    #[test]
    fn no_ease_ceiling() {
        let next = Scheduler::default().advance(Grade::Easy, &review_state(5_000, DAY, 9));
        assert_eq!(next.ease_factor, 5_015);
    }

    #[test]
    fn custom_config_is_respected() {
        let scheduler = Scheduler::new(SchedulerConfig {
            learning_step: 5,
            min_ease_factor: 200,
            ..SchedulerConfig::default()
        });
        assert_eq!(scheduler.advance(Grade::Good, &SchedulingState::new_card()).interval, 5);
        assert_eq!(scheduler.advance(Grade::Again, &review_state(210, DAY, 3)).ease_factor, 200);
    }
}
