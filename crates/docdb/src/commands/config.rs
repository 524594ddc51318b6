use crate::commands::{CmdMessage, CmdResult};
use crate::config::DocDbConfig;

/// Reports the effective configuration. Never touches the document.
pub fn run(config: &DocDbConfig) -> CmdResult {
    let mut result = CmdResult::default().with_config(config.clone());
    if config.path.is_none() {
        result.add_message(CmdMessage::warning(
            "No document path configured (set DOCDB_PATH or pass --db)",
        ));
    }
    result
}
