use crate::cli::CountersArgs;
use crate::error::{CliError, Result};
use crate::report;
use crate::session;
use crate::ui;
use investigate::{ApiOutcome, ApiProblem, CountersRequest, Entity};

pub fn execute(args: CountersArgs) -> Result<()> {
    let entity = Entity::from(args.entity);
    let request = CountersRequest::new(session::prepare_query(&args.query, entity)?, entity);
    let client = session::build_client(args.output.config.as_deref())?;

    let outcome = session::run_cancellable(
        &format!("Counting hits for {}", request.query),
        args.output.json,
        |cancel| async move { client.indices_counters_until(&request, &cancel).await },
    )?;

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    match outcome {
        ApiOutcome::Ok(response) => {
            if !args.output.json {
                ui::heading("counters", args.query.trim());
                println!("{}", report::render_counters(&response));
                if let Some(quota) = response.data.license().as_ref().and_then(report::quota_line) {
                    ui::quota(&quota);
                }
            }
            Ok(())
        }
        other => Err(CliError::Outcome(other.problem().unwrap_or(ApiProblem::Unknown))),
    }
}
