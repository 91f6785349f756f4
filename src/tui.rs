use crate::error::{Result, ResultExt};
use classifier_flow::renderers::TuiRenderer;
use classifier_flow::ClassifierConfig;

pub fn execute(config: ClassifierConfig) -> Result<()> {
    TuiRenderer::new(config)
        .run()
        .with_context(|| "Interactive view stopped")
}
