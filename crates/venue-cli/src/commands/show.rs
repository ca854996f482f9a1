use crate::cli::{OutputFormat, ShowArgs};
use crate::client::{AppContext, CliResult};
use crate::output::render_event_view;

pub(crate) async fn handle_show(
    ctx: &AppContext,
    args: ShowArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let catalog = ctx.load_catalog().await?;
    let view = catalog.resolve(&args.event_name, &args.event_date)?;
    print!("{}", render_event_view(&view, output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{CatalogSource, CliError};
    use httpmock::prelude::*;
    use venue_test_support::fixtures::SAMPLE_CATALOG_JSON;

    fn show_args(name: &str, date: &str) -> ShowArgs {
        ShowArgs {
            event_name: name.to_string(),
            event_date: date.to_string(),
        }
    }

    fn context_with(server: &MockServer) -> AppContext {
        let url = server.url("/events-mock-data.json").parse().expect("valid URL");
        AppContext::new(CatalogSource::Url(url), 5, "test-trace").expect("context builds")
    }

    #[tokio::test]
    async fn show_resolves_hyphenated_name() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/events-mock-data.json");
            then.status(200).body(SAMPLE_CATALOG_JSON);
        });

        handle_show(
            &context_with(&server),
            show_args("The-Nutcracker", "2024-12-20"),
            OutputFormat::Table,
        )
        .await
        .expect("show should succeed");
    }

    #[tokio::test]
    async fn server_error_reports_status_code_and_text() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/events-mock-data.json");
            then.status(500).body("boom");
        });

        let err = handle_show(
            &context_with(&server),
            show_args("The-Nutcracker", "2024-12-20"),
            OutputFormat::Table,
        )
        .await
        .expect_err("server error fails");
        mock.assert_calls(1);
        assert_eq!(err.exit_code(), 3);
        assert_eq!(
            err.display_message(),
            "Failed to fetch event data. Error: 500 Internal Server Error"
        );
    }

    #[tokio::test]
    async fn unknown_event_and_unknown_date_are_distinct() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/events-mock-data.json");
            then.status(200).body(SAMPLE_CATALOG_JSON);
        });
        let ctx = context_with(&server);

        let err = handle_show(&ctx, show_args("Hamlet", "2024-12-20"), OutputFormat::Table)
            .await
            .expect_err("unknown event fails");
        assert!(matches!(&err, CliError::Validation(message) if message == "Event not found."));

        let err = handle_show(&ctx, show_args("The-Nutcracker", "12/20/2024"), OutputFormat::Json)
            .await
            .expect_err("unknown date fails");
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.display_message(),
            "Event details not found for the specified date."
        );
    }

    #[tokio::test]
    async fn non_catalog_body_is_decode_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/events-mock-data.json");
            then.status(200).body("<!doctype html><p>index</p>");
        });

        let err = handle_show(
            &context_with(&server),
            show_args("The-Nutcracker", "2024-12-20"),
            OutputFormat::Table,
        )
        .await
        .expect_err("html body fails");
        assert!(err.display_message().starts_with("Error fetching event data.: "));
    }
}
