//! # Invocation Engine
//!
//! File: cli/src/engine/invoke.rs
//!
//! ## Overview
//!
//! The single code path behind every catalog operation:
//!
//! 1. mutating operations pass the confirmation gate (the target is rendered
//!    from the descriptor's template); a decline ends the invocation here;
//! 2. the request is projected from the invocation context;
//! 3. paginated operations run through the `Paginator`, every other operation
//!    is one call;
//! 4. response records are projected and written to the `OutputSink` as they
//!    arrive.
//!
//! Transport and service failures are caught here, once, and returned as
//! `Outcome::Failed` with an `ErrorRecord`. Errors outside the call itself
//! (template rendering, the prompt) are returned as `Err`.
//!
use crate::common::transport::Transport;
use crate::core::error::Result;
use crate::core::templating::render_target;
use crate::engine::context::InvocationContext;
use crate::engine::descriptor::{OperationDescriptor, PaginationSpec};
use crate::engine::gate::{self, ConfirmationRequest, Confirmer, GateDecision};
use crate::engine::outcome::{AuxMetadata, ErrorRecord, Outcome};
use crate::engine::paginate::{Page, PageRequest, PageSink, Paginator, Progress};
use crate::engine::projection;
use serde_json::Value;
use tracing::{debug, info};

/// Receives output records and progress events.
pub trait OutputSink {
    fn record(&mut self, record: &Value) -> Result<()>;

    fn progress(&mut self, _event: &Progress) {}
}

/// Adapts an `OutputSink` to the paginator.
struct RecordSink<'a, O: ?Sized> {
    output: &'a mut O,
}

impl<O: OutputSink + ?Sized> PageSink<Value> for RecordSink<'_, O> {
    fn emit(&mut self, items: Vec<Value>) -> Result<()> {
        items.iter().try_for_each(|item| self.output.record(item))
    }

    fn progress(&mut self, event: &Progress) {
        self.output.progress(event);
    }
}

pub async fn invoke<T, C, O>(
    transport: &T,
    descriptor: &OperationDescriptor,
    context: &InvocationContext,
    confirmer: &mut C,
    output: &mut O,
) -> Result<Outcome>
where
    T: Transport,
    C: Confirmer + ?Sized,
    O: OutputSink + ?Sized,
{
    if let Some(confirmation) = descriptor.confirmation {
        let target = render_target(confirmation.target, descriptor, context)?;
        let request = ConfirmationRequest {
            target: &target,
            label: confirmation.label,
        };
        if gate::check(context.force(), &request, confirmer)? == GateDecision::Declined {
            info!("{} declined; nothing was sent", descriptor.command);
            return Ok(Outcome::Declined);
        }
    }

    let result = match descriptor.pagination {
        Some(paging) => run_paginated(transport, descriptor, paging, context, output).await,
        None => run_single(transport, descriptor, context, output).await,
    };

    match result {
        Ok(meta) => {
            info!(
                "{} completed: {} item(s) over {} call(s)",
                descriptor.command, meta.items, meta.pages
            );
            Ok(Outcome::Completed(meta))
        }
        Err(e) => {
            debug!("{} failed: {:#}", descriptor.command, e);
            Ok(Outcome::Failed(ErrorRecord::from_error(descriptor.operation, &e)))
        }
    }
}

async fn run_single<T, O>(
    transport: &T,
    descriptor: &OperationDescriptor,
    context: &InvocationContext,
    output: &mut O,
) -> Result<AuxMetadata>
where
    T: Transport,
    O: OutputSink + ?Sized,
{
    let request = projection::project_request(descriptor, context);
    let response = transport.call(descriptor, &request).await?;
    let records = projection::project_output(response, descriptor.output, context.select());
    for record in &records {
        output.record(record)?;
    }
    Ok(AuxMetadata {
        next_token: None,
        pages: 1,
        items: records.len(),
        truncated: false,
    })
}

async fn run_paginated<T, O>(
    transport: &T,
    descriptor: &OperationDescriptor,
    paging: PaginationSpec,
    context: &InvocationContext,
    output: &mut O,
) -> Result<AuxMetadata>
where
    T: Transport,
    O: OutputSink + ?Sized,
{
    let base = projection::project_request(descriptor, context);
    let select = context.select();
    let paginator = Paginator::new(
        context.next_token().map(str::to_string),
        context.max_items(),
        paging.max_page_size,
    );

    let fetch = move |page: PageRequest| {
        let mut request = base.clone();
        projection::apply_page(&mut request, &paging, page.token.as_deref(), page.page_size);
        async move {
            let mut response = transport.call(descriptor, &request).await?;
            let next_token = projection::page_token(&response, &paging);
            let received = projection::item_count(&response, &paging);
            let items = match select {
                Some(path) => projection::project_output(response, descriptor.output, Some(path)),
                None => projection::page_items(&mut response, &paging),
            };
            Ok(Page {
                items,
                received,
                next_token,
            })
        }
    };

    let mut sink = RecordSink { output };
    let summary = paginator.run(fetch, &mut sink).await?;
    Ok(AuxMetadata::from(&summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::common::transport::testing::MockTransport;
    use crate::core::error::SvcError;
    use crate::engine::context::tests::test_settings;
    use crate::engine::context::ParamValue;
    use crate::engine::gate::tests::FixedAnswer;
    use crate::engine::outcome::ErrorCategory;
    use serde_json::json;

    #[derive(Default)]
    struct Collected {
        records: Vec<Value>,
        events: Vec<Progress>,
    }

    impl OutputSink for Collected {
        fn record(&mut self, record: &Value) -> Result<()> {
            self.records.push(record.clone());
            Ok(())
        }

        fn progress(&mut self, event: &Progress) {
            self.events.push(event.clone());
        }
    }

    fn delete_job(force: bool) -> InvocationContext {
        InvocationContext::builder("delete-job", test_settings())
            .value("job-name", ParamValue::String("nightly".into()))
            .force(force)
            .build()
    }

    #[tokio::test]
    async fn test_declined_confirmation_sends_nothing() {
        let transport = MockTransport::new(vec![Ok(json!({"JobName": "nightly"}))]);
        let descriptor = catalog::find("delete-job").unwrap();
        let mut confirmer = FixedAnswer::new(false);
        let mut output = Collected::default();

        let outcome = invoke(&transport, descriptor, &delete_job(false), &mut confirmer, &mut output)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Declined);
        assert!(transport.calls().is_empty());
        assert!(output.records.is_empty());
        assert_eq!(
            confirmer.asked,
            vec![("nightly".to_string(), "delete-job (DeleteJob)".to_string())]
        );
    }

    #[tokio::test]
    async fn test_override_skips_prompt_and_calls_once() {
        let transport = MockTransport::new(vec![Ok(json!({"JobName": "nightly"}))]);
        let descriptor = catalog::find("delete-job").unwrap();
        let mut confirmer = FixedAnswer::new(false);
        let mut output = Collected::default();

        let outcome = invoke(&transport, descriptor, &delete_job(true), &mut confirmer, &mut output)
            .await
            .unwrap();

        assert!(matches!(outcome, Outcome::Completed(AuxMetadata { items: 1, .. })));
        assert!(confirmer.asked.is_empty());
        assert_eq!(
            transport.calls(),
            vec![("DeleteJob".to_string(), json!({"JobName": "nightly"}))]
        );
        assert_eq!(output.records, vec![json!("nightly")]);
    }

    #[tokio::test]
    async fn test_automatic_listing_follows_tokens() {
        let transport = MockTransport::new(vec![
            Ok(json!({"JobNames": ["a", "b"], "NextToken": "T1"})),
            Ok(json!({"JobNames": ["c"], "NextToken": "T2"})),
            Ok(json!({"JobNames": [], "NextToken": ""})),
        ]);
        let descriptor = catalog::find("list-jobs").unwrap();
        let ctx = InvocationContext::builder("list-jobs", test_settings()).build();
        let mut output = Collected::default();

        let outcome = invoke(&transport, descriptor, &ctx, &mut FixedAnswer::new(false), &mut output)
            .await
            .unwrap();

        assert_eq!(output.records, vec![json!("a"), json!("b"), json!("c")]);
        let calls = transport.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].1, json!({}));
        assert_eq!(calls[1].1, json!({"NextToken": "T1"}));
        assert_eq!(calls[2].1, json!({"NextToken": "T2"}));
        assert!(output.events.is_empty());
        match outcome {
            Outcome::Completed(meta) => {
                assert_eq!(meta.pages, 3);
                assert_eq!(meta.items, 3);
                assert_eq!(meta.next_token, None);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_capped_listing_sends_page_size() {
        let transport = MockTransport::new(vec![
            Ok(json!({"ConnectionList": [{"Name": "a"}, {"Name": "b"}], "NextToken": "T1"})),
            Ok(json!({"ConnectionList": [{"Name": "c"}], "NextToken": "T2"})),
        ]);
        let descriptor = catalog::find("list-connections").unwrap();
        let ctx = InvocationContext::builder("list-connections", test_settings())
            .value("name-prefix", ParamValue::String("prod-".into()))
            .max_items(Some(3))
            .build();
        let mut output = Collected::default();

        let outcome = invoke(&transport, descriptor, &ctx, &mut FixedAnswer::new(false), &mut output)
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0].1,
            json!({"Filter": {"NamePrefix": "prod-"}, "MaxResults": 3})
        );
        assert_eq!(
            calls[1].1,
            json!({"Filter": {"NamePrefix": "prod-"}, "MaxResults": 1, "NextToken": "T1"})
        );
        assert_eq!(output.records.len(), 3);
        assert!(matches!(output.events.last(), Some(Progress::Finished { items: 3, .. })));
        assert!(matches!(
            outcome,
            Outcome::Completed(AuxMetadata { next_token: Some(ref t), .. }) if t == "T2"
        ));
    }

    #[tokio::test]
    async fn test_capped_listing_with_select_counts_service_items() {
        let pages = (0..10)
            .map(|p| {
                let names: Vec<String> = (0..10).map(|i| format!("job-{p}-{i}")).collect();
                Ok(json!({"JobNames": names, "NextToken": format!("T{}", p + 1)}))
            })
            .collect();
        let transport = MockTransport::new(pages);
        let descriptor = catalog::find("list-jobs").unwrap();
        let ctx = InvocationContext::builder("list-jobs", test_settings())
            .max_items(Some(25))
            .select(Some("*".into()))
            .build();
        let mut output = Collected::default();

        let outcome = invoke(&transport, descriptor, &ctx, &mut FixedAnswer::new(false), &mut output)
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 3);
        let sizes: Vec<_> = calls.iter().map(|(_, body)| body["MaxResults"].clone()).collect();
        assert_eq!(sizes, vec![json!(25), json!(15), json!(5)]);
        // One whole-response record per page.
        assert_eq!(output.records.len(), 3);
        assert!(matches!(
            outcome,
            Outcome::Completed(AuxMetadata { items: 30, truncated: false, .. })
        ));
    }

    #[tokio::test]
    async fn test_absent_sub_structure_is_not_sent() {
        let transport = MockTransport::new(vec![Ok(json!({"JobName": "nightly"}))]);
        let descriptor = catalog::find("update-job").unwrap();
        let ctx = InvocationContext::builder("update-job", test_settings())
            .value("job-name", ParamValue::String("nightly".into()))
            .force(true)
            .build();

        invoke(&transport, descriptor, &ctx, &mut FixedAnswer::new(true), &mut Collected::default())
            .await
            .unwrap();

        assert_eq!(transport.calls()[0].1, json!({"JobName": "nightly"}));
    }

    #[tokio::test]
    async fn test_select_overrides_output_shape() {
        let transport = MockTransport::new(vec![Ok(
            json!({"Job": {"Name": "nightly", "Role": "etl"}}),
        )]);
        let descriptor = catalog::find("get-job").unwrap();
        let ctx = InvocationContext::builder("get-job", test_settings())
            .value("job-name", ParamValue::String("nightly".into()))
            .select(Some("Job.Role".into()))
            .build();
        let mut output = Collected::default();

        invoke(&transport, descriptor, &ctx, &mut FixedAnswer::new(false), &mut output)
            .await
            .unwrap();

        assert_eq!(output.records, vec![json!("etl")]);
    }

    #[tokio::test]
    async fn test_service_failure_becomes_error_record() {
        let transport = MockTransport::new(vec![Err(SvcError::Service {
            operation: "GetJob".into(),
            status: 404,
            code: "EntityNotFoundException".into(),
            message: "no such job".into(),
        }
        .into())]);
        let descriptor = catalog::find("get-job").unwrap();
        let ctx = InvocationContext::builder("get-job", test_settings())
            .value("job-name", ParamValue::String("missing".into()))
            .build();
        let mut output = Collected::default();

        let outcome = invoke(&transport, descriptor, &ctx, &mut FixedAnswer::new(false), &mut output)
            .await
            .unwrap();

        match outcome {
            Outcome::Failed(record) => {
                assert_eq!(record.operation, "GetJob");
                assert_eq!(record.category, ErrorCategory::Service);
                assert_eq!(record.status, Some(404));
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(output.records.is_empty());
    }
}
