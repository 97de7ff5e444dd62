pub mod locate;
pub mod resolve;

use cfxscan::error::{ApiError, CfxErrorTrait, Error, ErrorCategory};

// Re-export command functions for convenience
pub use locate::locate;
pub use resolve::resolve;

/// Banner printed before every command
pub const BANNER: &str = r"
╔════════════════════════════════╗
║██╗  ██╗██╗     ███████╗███████╗║
║██║ ██╔╝██║     ██╔════╝╚══███╔╝║
║█████╔╝ ██║     █████╗    ███╔╝ ║
║██╔═██╗ ██║     ██╔══╝   ███╔╝  ║
║██║  ██╗███████╗███████╗███████╗║
║╚═╝  ╚═╝╚══════╝╚══════╝╚══════╝║
╚════════════════════════════════╝
           advanced server resolver
";

pub(crate) const RULE: &str = "+-----------------------------------------------------+";

pub(crate) fn section_header(title: &str) -> String {
    format!("{RULE}\n|  {title:<51}|\n{RULE}")
}

/// Category and recoverability of a failed command
///
/// Uses the first cfxscan error found in the chain; anything else is
/// `Other` and not recoverable.
pub(crate) fn classify_failure(err: &anyhow::Error) -> (ErrorCategory, bool) {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<Error>() {
            return (e.category(), e.is_recoverable());
        }
        if let Some(e) = cause.downcast_ref::<ApiError>() {
            return (CfxErrorTrait::category(e), CfxErrorTrait::is_recoverable(e));
        }
    }
    (ErrorCategory::Other, false)
}
