use crate::core::instances::Instance;
use crate::error::ClassifierError;
use std::collections::BTreeMap;

/// Unnormalised class scores, ordered by label.
pub type Votes = BTreeMap<String, f64>;

pub trait Classifier {
    fn get_votes_for_instance(&self, instance: &Instance) -> Result<Votes, ClassifierError>;

    /// Highest-scoring label, `None` when there are no classes to vote for.
    fn predict(&self, instance: &Instance) -> Result<Option<String>, ClassifierError> {
        let votes = self.get_votes_for_instance(instance)?;
        Ok(argmax(&votes).map(str::to_string))
    }
}

/// Labels are visited in lexicographic order and only a strictly greater score
/// replaces the current best, so ties go to the smallest label.
pub fn argmax(votes: &Votes) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (label, &score) in votes {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((label.as_str(), score)),
        }
    }
    best.map(|(label, _)| label)
}
