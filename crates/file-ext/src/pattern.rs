//! Regular expressions with a wall-clock budget.
//!
//! The `regex` engine already runs in linear time, but some checks walk every
//! match in a signature. Those walks consult a [`Deadline`] between hits so a
//! single check can never stall the cascade.

use std::time::{Duration, Instant};

use regex::{Captures, Regex, RegexBuilder};
use tracing::{error, warn};

/// Compiled program size cap for every pattern.
const SIZE_LIMIT: usize = 1 << 20;

#[derive(Debug, Clone, Copy)]
pub struct Deadline(Instant);

impl Deadline {
	#[must_use]
	pub fn after(budget: Duration) -> Self {
		Self(Instant::now() + budget)
	}

	#[must_use]
	pub fn expired(&self) -> bool {
		Instant::now() >= self.0
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
	Matched,
	NoMatch,
	TimedOut,
}

impl MatchOutcome {
	/// A timeout counts as no match.
	#[must_use]
	pub const fn matched(self) -> bool {
		matches!(self, Self::Matched)
	}
}

/// A named pattern that fails closed: a pattern that does not compile never
/// matches, and a match that runs out of time reports [`MatchOutcome::TimedOut`].
#[derive(Debug)]
pub struct BoundedPattern {
	name: &'static str,
	regex: Option<Regex>,
}

impl BoundedPattern {
	pub fn new(name: &'static str, pattern: &str) -> Self {
		let regex = RegexBuilder::new(pattern)
			.size_limit(SIZE_LIMIT)
			.build()
			.map_err(|err| error!(pattern = name, "failed to compile pattern: {err:#?}"))
			.ok();

		Self { name, regex }
	}

	#[must_use]
	pub const fn name(&self) -> &'static str {
		self.name
	}

	#[must_use]
	pub const fn is_compiled(&self) -> bool {
		self.regex.is_some()
	}

	fn timed_out(&self) -> MatchOutcome {
		warn!(pattern = self.name, "pattern match timed out, treating as no match");
		MatchOutcome::TimedOut
	}

	pub fn is_match(&self, text: &str, deadline: Deadline) -> MatchOutcome {
		let Some(regex) = &self.regex else {
			return MatchOutcome::NoMatch;
		};

		if deadline.expired() {
			return self.timed_out();
		}

		if regex.is_match(text) {
			MatchOutcome::Matched
		} else {
			MatchOutcome::NoMatch
		}
	}

	/// Capture groups of the first match, or `None` on no match or timeout.
	pub fn captures<'t>(&self, text: &'t str, deadline: Deadline) -> Option<Captures<'t>> {
		let regex = self.regex.as_ref()?;

		if deadline.expired() {
			self.timed_out();
			return None;
		}

		regex.captures(text)
	}

	/// Matches once `text` holds at least `min` non-overlapping matches.
	pub fn count_at_least(&self, text: &str, min: usize, deadline: Deadline) -> MatchOutcome {
		let Some(regex) = &self.regex else {
			return MatchOutcome::NoMatch;
		};

		if min == 0 {
			return MatchOutcome::Matched;
		}

		let mut hits = 0;
		for _ in regex.find_iter(text) {
			if deadline.expired() {
				return self.timed_out();
			}

			hits += 1;
			if hits >= min {
				return MatchOutcome::Matched;
			}
		}

		MatchOutcome::NoMatch
	}

	/// Every capture of the first group named `group`, stopping early at the deadline.
	pub fn collect_group(&self, text: &str, group: &str, deadline: Deadline) -> Vec<String> {
		let Some(regex) = &self.regex else {
			return vec![];
		};

		let mut found = vec![];
		for caps in regex.captures_iter(text) {
			if deadline.expired() {
				self.timed_out();
				break;
			}

			if let Some(m) = caps.name(group) {
				found.push(m.as_str().to_owned());
			}
		}

		found
	}
}
