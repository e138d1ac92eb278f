pub mod batch;
pub mod translate;

use crate::config::ConfigError;
use crate::input::ChecklistFileError;
use crate::translation::TranslateError;

/// Maps a fatal error to the process exit code.
///
/// The first typed error found in the chain decides. Pipeline and checklist
/// errors carry their own code, configuration errors exit with `CONFIG`, and
/// write failures on stdout are I/O errors. Anything else is `SOFTWARE`.
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    for cause in err.chain() {
        if let Some(err) = cause.downcast_ref::<TranslateError>() {
            return err.exit_code();
        }
        if let Some(err) = cause.downcast_ref::<ChecklistFileError>() {
            return err.exit_code();
        }
        if cause.is::<ConfigError>() {
            return exitcode::CONFIG;
        }
        if cause.is::<std::io::Error>() {
            return exitcode::IOERR;
        }
    }
    exitcode::SOFTWARE
}
