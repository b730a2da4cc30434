use std::path::Path;

use tract_onnx::prelude::*;

/// Fixed artifact path, produced out-of-band by the model-training side.
pub const MODEL_FILE: &str = "model.onnx";

/// Class index -> display label. Must cover every index the model can emit.
pub const CLASS_LABELS: [&str; 3] = ["Setosa", "Versicolor", "Virginica"];

/// Sepal length, sepal width, petal length, petal width.
pub const FEATURE_COUNT: usize = 4;

/// Seam between the HTTP handler and the concrete model runtime.
pub trait ClassPredictor: Send + Sync {
    fn predict_class(&self, features: &[f32; FEATURE_COUNT]) -> anyhow::Result<usize>;
}

pub struct IrisClassifier {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>,
}

impl IrisClassifier {
    pub fn load<P: AsRef<Path>>(model_path: P) -> TractResult<Self> {
        let model = tract_onnx::onnx()
            .model_for_path(model_path)?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), tvec!(1, FEATURE_COUNT)),
            )?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self { model })
    }
}

impl ClassPredictor for IrisClassifier {
    fn predict_class(&self, features: &[f32; FEATURE_COUNT]) -> anyhow::Result<usize> {
        let input = Tensor::from_shape(&[1, FEATURE_COUNT], features)?;
        let outputs = self.model.run(tvec!(input.into()))?;

        // The exported classifier's first output is a single int64 label.
        let index = *outputs[0]
            .to_array_view::<i64>()?
            .iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("model returned no output"))?;

        usize::try_from(index)
            .map_err(|_| anyhow::anyhow!("model returned negative class index {index}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_table_covers_three_classes() {
        assert_eq!(CLASS_LABELS.len(), 3);
        assert_eq!(CLASS_LABELS[2], "Virginica");
    }

    #[test]
    fn load_fails_on_missing_artifact() {
        assert!(IrisClassifier::load("no-such-model.onnx").is_err());
    }
}
