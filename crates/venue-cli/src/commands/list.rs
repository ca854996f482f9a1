use crate::cli::OutputFormat;
use crate::client::{AppContext, CliResult};
use crate::output::render_event_list;

pub(crate) async fn handle_list(ctx: &AppContext, output: OutputFormat) -> CliResult<()> {
    let catalog = ctx.load_catalog().await?;
    print!("{}", render_event_list(&catalog, output)?);
    Ok(())
}
