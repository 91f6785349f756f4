use crate::cli::OutputFormat;
use crate::error::{CliError, Result};
use crate::progress::ConsoleView;
use crate::ui;
use classifier_flow::renderers::{JsonRenderer, OutputRenderer};
use classifier_flow::{
    ClassifierConfig, ClassifyOutcome, FlowTiming, HttpClassifierClient, MessageClassifierWidget,
};
use tokio::runtime::Runtime;

#[derive(Debug, Clone)]
pub struct ClassifyArgs {
    pub message: String,
    pub no_delay: bool,
    pub format: OutputFormat,
    pub verbose: bool,
}

pub fn execute(config: ClassifierConfig, args: ClassifyArgs) -> Result<()> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    let outcome = rt.block_on(run(&config, &args))?;
    report(outcome, args.format)
}

async fn run(config: &ClassifierConfig, args: &ClassifyArgs) -> Result<ClassifyOutcome> {
    let client = HttpClassifierClient::new(&config.endpoint)?;
    let timing = if args.no_delay {
        FlowTiming::instant()
    } else {
        config.timing
    };

    let show_progress = args.format == OutputFormat::Text;
    if show_progress {
        ui::section_header("Message Classification");
        if args.verbose {
            ui::info_message(&format!("Endpoint: {}", client.url()));
        }
    }

    let view = ConsoleView::new(&args.message, show_progress);
    let widget = MessageClassifierWidget::new(client, view).with_timing(timing);
    Ok(widget.classify().await)
}

fn report(outcome: ClassifyOutcome, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", JsonRenderer::new().render(&outcome));
    }

    match outcome {
        ClassifyOutcome::Completed(fields) => {
            if format == OutputFormat::Text {
                ui::result_block(&fields);
            }
            Ok(())
        }
        ClassifyOutcome::Rejected(err) | ClassifyOutcome::Failed(err) => Err(err.into()),
        ClassifyOutcome::Unavailable => Err(CliError::Other(
            "No customer message was available to classify".to_string(),
        )),
    }
}
