use super::msg::{ExecMsg, OutcomeSummary};
use crate::PageWidget;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::JoinHandle;

/// Run one classification in a background thread and report back over `tx`
pub fn spawn(tx: Sender<ExecMsg>, widget: Arc<PageWidget>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                // the flow never started, so the trigger was never disabled
                let _ = tx.send(ExecMsg::Failed(format!("Failed to create runtime: {}", e)));
                return;
            }
        };

        let outcome = rt.block_on(widget.classify());
        let _ = tx.send(ExecMsg::Finished(OutcomeSummary::from(&outcome)));
    })
}
