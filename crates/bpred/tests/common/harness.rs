use bpred_core::{BranchPredictor, Outcome, Predictor, PredictorConfig};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once per test binary.
///
/// Set `RUST_LOG=bpred_core=trace` to see predictor construction and training.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Drives a [`Predictor`] the way a trace driver does: one prediction, then
/// one training step, per branch.
#[derive(Debug)]
pub struct BranchHarness {
    /// Predictor under test.
    pub bp: Predictor,
    /// Steps whose prediction differed from the trained outcome.
    pub mispredictions: usize,
}

impl BranchHarness {
    /// Builds the predictor for `config`, panicking if it is rejected.
    pub fn new(config: &PredictorConfig) -> Self {
        init_tracing();
        let bp = match Predictor::new(config) {
            Ok(bp) => bp,
            Err(e) => panic!("test configuration rejected: {e}"),
        };
        Self {
            bp,
            mispredictions: 0,
        }
    }

    /// Predicts the branch, trains it with `outcome`, and returns the prediction.
    pub fn step(&mut self, pc: u32, outcome: Outcome) -> Outcome {
        let prediction = self.bp.predict(pc);
        if prediction != outcome {
            self.mispredictions += 1;
        }
        self.bp.train(pc, outcome);
        prediction
    }

    /// Replays a branch sequence and returns every prediction made.
    pub fn run(&mut self, trace: &[(u32, Outcome)]) -> Vec<Outcome> {
        trace.iter().map(|&(pc, outcome)| self.step(pc, outcome)).collect()
    }
}
