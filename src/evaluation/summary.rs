use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationSummary {
    pub instances_seen: u64,
    pub correct: u64,
    pub accuracy: f64,
}

impl EvaluationSummary {
    pub fn new(instances_seen: u64, correct: u64) -> Self {
        let accuracy = if instances_seen == 0 {
            f64::NAN
        } else {
            correct as f64 / instances_seen as f64
        };
        Self {
            instances_seen,
            correct,
            accuracy,
        }
    }

    #[inline]
    fn fmt_percent(v: f64) -> String {
        if v.is_nan() {
            "NaN".into()
        } else {
            format!("{:.2}%", v * 100.0)
        }
    }
}

impl Display for EvaluationSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Accuracy: {}", Self::fmt_percent(self.accuracy))
    }
}
