use crate::cli::ScanArgs;
use crate::error::{CliError, Result};
use crate::report;
use crate::session;
use crate::ui;
use investigate::{ApiOutcome, Entity, SearchFilter, SearchIndex, SearchRequest, SearchResponse};

/// Build the request from command-line arguments
pub fn build_request(args: &ScanArgs) -> Result<SearchRequest> {
    let entity = Entity::from(args.entity);
    let query = session::prepare_query(&args.query, entity)?;
    let index: SearchIndex = args.index.parse()?;

    let mut request = SearchRequest::new(query, entity, index);
    if let Some(raw) = args.filter.as_deref().map(str::trim).filter(|f| !f.is_empty()) {
        let filter = match raw.parse::<SearchFilter>() {
            Ok(filter) => filter,
            Err(never) => match never {},
        };
        request = request.with_filter(filter);
    }
    Ok(request)
}

pub fn execute(args: ScanArgs) -> Result<()> {
    let request = build_request(&args)?;
    let client = session::build_client(args.output.config.as_deref())?;

    let outcome = session::run_cancellable(
        &format!("Searching {} for {}", request.index, request.query),
        args.output.json,
        |cancel| async move { client.search_until(&request, &cancel).await },
    )?;

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    match outcome {
        ApiOutcome::Ok(response) => {
            if !args.output.json {
                print_response(&request_title(&args), &response);
            }
            Ok(())
        }
        other => Err(CliError::Outcome(
            other.problem().unwrap_or(investigate::ApiProblem::Unknown),
        )),
    }
}

fn request_title(args: &ScanArgs) -> String {
    format!("{} in {}", args.query.trim(), args.index)
}

fn print_response(title: &str, response: &SearchResponse) {
    ui::heading("scan", title);
    if response.results.is_empty() {
        ui::clean(&report::results_summary(response));
    } else {
        ui::exposed(&report::results_summary(response));
        println!("{}", report::render_search(response));
    }
    if let Some(quota) = response.license().as_ref().and_then(report::quota_line) {
        ui::quota(&quota);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{EntityArg, OutputArgs};

    fn args(query: &str, entity: EntityArg, filter: Option<&str>) -> ScanArgs {
        ScanArgs {
            query: query.to_string(),
            entity,
            index: "leaked_credentials".to_string(),
            filter: filter.map(str::to_string),
            output: OutputArgs {
                config: None,
                json: false,
            },
        }
    }

    #[test]
    fn test_build_request_defaults() {
        let request = build_request(&args(" user@example.com ", EntityArg::Emails, None)).unwrap();
        assert_eq!(request, SearchRequest::leaked_email("user@example.com"));
    }

    #[test]
    fn test_build_request_parses_filter() {
        let request = build_request(&args("acme", EntityArg::Usernames, Some("30"))).unwrap();
        assert_eq!(request.filter, Some(SearchFilter::Number(30)));

        let request = build_request(&args("acme", EntityArg::Usernames, Some("telegram"))).unwrap();
        assert_eq!(request.filter, Some(SearchFilter::Text("telegram".to_string())));

        let request = build_request(&args("acme", EntityArg::Usernames, Some("  "))).unwrap();
        assert!(request.filter.is_none());
    }

    #[test]
    fn test_build_request_rejects_bad_input() {
        assert!(build_request(&args("", EntityArg::Emails, None)).is_err());
        assert!(build_request(&args("nobody", EntityArg::Emails, None)).is_err());

        let mut bad_index = args("acme", EntityArg::Usernames, None);
        bad_index.index = " ".to_string();
        assert!(matches!(
            build_request(&bad_index),
            Err(CliError::Investigate(_))
        ));
    }
}
