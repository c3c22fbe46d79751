//! Aggregate error/warning totals.
//!
//! A [`Tally`] is an ordinary value owned by whoever drives a batch. Each
//! target yields one [`Contribution`], folded in with [`Tally::apply`].

use std::ops::Add;

/// Running totals for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub errors: u64,
    pub warnings: u64,
}

/// What a single target does to the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contribution {
    /// Add to both totals.
    Add { errors: u64, warnings: u64 },
    /// Replace the error total, leaving warnings untouched. Generic checker
    /// results behave this way unless accumulation is enabled.
    SetErrors(u64),
}

impl Contribution {
    pub const NONE: Self = Self::Add {
        errors: 0,
        warnings: 0,
    };

    /// A target that could not be validated at all.
    pub const FAILURE: Self = Self::Add {
        errors: 1,
        warnings: 0,
    };
}

impl Tally {
    pub const fn new() -> Self {
        Self {
            errors: 0,
            warnings: 0,
        }
    }

    /// Fold one contribution in.
    pub fn apply(&mut self, contribution: Contribution) {
        match contribution {
            Contribution::Add { errors, warnings } => {
                self.errors = self.errors.saturating_add(errors);
                self.warnings = self.warnings.saturating_add(warnings);
            }
            Contribution::SetErrors(errors) => self.errors = errors,
        }
    }

    /// `true` when no errors remain. Warnings never matter.
    pub const fn is_clean(&self) -> bool {
        self.errors == 0
    }

    /// Process exit status for this tally: 0 when clean, 1 otherwise.
    pub const fn exit_code(&self) -> u8 {
        if self.is_clean() { 0 } else { 1 }
    }
}

impl Add<Contribution> for Tally {
    type Output = Tally;

    fn add(mut self, rhs: Contribution) -> Tally {
        self.apply(rhs);
        self
    }
}
