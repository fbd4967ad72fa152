pub mod fixed_votes_classifier;

pub use fixed_votes_classifier::FixedVotesClassifier;
