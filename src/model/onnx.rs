//! ONNX Classifier - ONNX Runtime Integration
//!
//! Runs the frozen scikit-learn classifier through its ONNX export. The
//! export must be produced with `zipmap=False` so the graph has two plain
//! tensor outputs: an `int64` class-label tensor and a `(rows, 3)` float
//! probability tensor.

use ndarray::Array2;
use parking_lot::Mutex;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;

use super::classifier::{Classifier, Disposition, InferenceError, CLASS_COUNT};

/// ONNX Runtime implementation of [`Classifier`].
///
/// `Session::run` needs exclusive access, so the session sits behind a mutex;
/// the artifact itself is never mutated after load.
pub struct OnnxClassifier {
    session: Mutex<Session>,
    label_output: String,
    proba_output: String,
}

impl OnnxClassifier {
    /// Load the ONNX model from a file.
    pub fn from_file(model_path: &str) -> Result<Self, InferenceError> {
        log::info!("Loading ONNX model from: {}", model_path);

        if !std::path::Path::new(model_path).exists() {
            return Err(InferenceError(format!("model not found: {}", model_path)));
        }

        let session = Session::builder()
            .map_err(|e| InferenceError(format!("failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError(format!("failed to set optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| InferenceError(format!("failed to load model: {}", e)))?;

        log::info!("ONNX model loaded successfully");
        Self::from_session(session)
    }

    /// Load the ONNX model from memory.
    pub fn from_bytes(model_bytes: &[u8]) -> Result<Self, InferenceError> {
        log::info!("Loading ONNX model from memory ({} bytes)", model_bytes.len());

        let session = Session::builder()
            .map_err(|e| InferenceError(format!("session builder error: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError(format!("optimization error: {}", e)))?
            .commit_from_memory(model_bytes)
            .map_err(|e| InferenceError(format!("load from memory error: {}", e)))?;

        Self::from_session(session)
    }

    fn from_session(session: Session) -> Result<Self, InferenceError> {
        // sklearn-onnx emits the label tensor first, probabilities second.
        let mut names = session.outputs.iter().map(|o| o.name.clone());
        let label_output = names
            .next()
            .ok_or_else(|| InferenceError("model defines no outputs".to_string()))?;
        let proba_output = names.next().ok_or_else(|| {
            InferenceError(
                "model defines no probability output (export with zipmap=False)".to_string(),
            )
        })?;

        Ok(Self {
            session: Mutex::new(session),
            label_output,
            proba_output,
        })
    }

    /// Run one batch, extracting both the label and probability tensors.
    fn run_batch(&self, batch: &Array2<f32>) -> Result<(Vec<i64>, Vec<f32>), InferenceError> {
        let rows = batch.nrows();

        let input_tensor = Value::from_array(batch.clone())
            .map_err(|e| InferenceError(format!("tensor error: {}", e)))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("inference failed: {}", e)))?;

        let labels = outputs
            .get(&self.label_output)
            .ok_or_else(|| InferenceError("missing label output".to_string()))?
            .try_extract_tensor::<i64>()
            .map_err(|e| InferenceError(format!("label extract error: {}", e)))?
            .1
            .to_vec();

        let probas = outputs
            .get(&self.proba_output)
            .ok_or_else(|| InferenceError("missing probability output".to_string()))?
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError(format!("probability extract error: {}", e)))?
            .1
            .to_vec();

        if labels.len() != rows {
            return Err(InferenceError(format!(
                "expected {} labels, model returned {}",
                rows,
                labels.len()
            )));
        }
        if probas.len() != rows * CLASS_COUNT {
            return Err(InferenceError(format!(
                "expected {}x{} probabilities, model returned {} values",
                rows,
                CLASS_COUNT,
                probas.len()
            )));
        }

        Ok((labels, probas))
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, batch: &Array2<f32>) -> Result<Vec<Disposition>, InferenceError> {
        let (labels, _) = self.run_batch(batch)?;
        labels
            .into_iter()
            .map(|id| {
                usize::try_from(id)
                    .ok()
                    .and_then(Disposition::from_class_index)
                    .ok_or_else(|| InferenceError(format!("unknown class id: {}", id)))
            })
            .collect()
    }

    fn predict_proba(&self, batch: &Array2<f32>) -> Result<Array2<f32>, InferenceError> {
        let rows = batch.nrows();
        let (_, probas) = self.run_batch(batch)?;
        Array2::from_shape_vec((rows, CLASS_COUNT), probas)
            .map_err(|e| InferenceError(format!("probability shape error: {}", e)))
    }
}
