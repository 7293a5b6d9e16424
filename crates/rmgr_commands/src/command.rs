use anyhow::Result;

/// A parsed subcommand, ready to run once logging is set up.
pub trait RmgrCommand {
    fn exec(self) -> Result<()>;
}
