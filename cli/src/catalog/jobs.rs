//! Job and job-run operations.
//!
use crate::engine::descriptor::{
    Confirmation, FieldSpec, OperationDescriptor, OutputShape, PaginationSpec,
};
use crate::engine::paginate::HIGH_VOLUME_PAGE_SIZE;

const LIST_JOBS: &[FieldSpec] = &[
    FieldSpec::json("tags", "Tags").help("Only jobs carrying all of these tags (JSON object)."),
];

const GET_JOB: &[FieldSpec] = &[FieldSpec::string("job-name", "JobName").required()];

const CREATE_JOB: &[FieldSpec] = &[
    FieldSpec::string("name", "Name").required().help("Job name."),
    FieldSpec::string("role", "Role")
        .required()
        .help("Role the job runs as."),
    FieldSpec::string("description", "Description"),
    FieldSpec::string("command-name", "Command.Name").help("Job command (glueetl, pythonshell, ...)."),
    FieldSpec::string("script-location", "Command.ScriptLocation"),
    FieldSpec::string("python-version", "Command.PythonVersion"),
    FieldSpec::json("default-arguments", "DefaultArguments")
        .help("Default arguments as a JSON object."),
    FieldSpec::integer("max-retries", "MaxRetries"),
    FieldSpec::integer("timeout", "Timeout").help("Timeout in minutes."),
    FieldSpec::string("worker-type", "WorkerType"),
    FieldSpec::integer("number-of-workers", "NumberOfWorkers"),
    FieldSpec::json("tags", "Tags"),
];

const UPDATE_JOB: &[FieldSpec] = &[
    FieldSpec::string("job-name", "JobName").required().help("Job to update."),
    FieldSpec::string("role", "JobUpdate.Role"),
    FieldSpec::string("description", "JobUpdate.Description"),
    FieldSpec::string("command-name", "JobUpdate.Command.Name"),
    FieldSpec::string("script-location", "JobUpdate.Command.ScriptLocation"),
    FieldSpec::string("python-version", "JobUpdate.Command.PythonVersion"),
    FieldSpec::json("default-arguments", "JobUpdate.DefaultArguments"),
    FieldSpec::integer("max-retries", "JobUpdate.MaxRetries"),
    FieldSpec::integer("timeout", "JobUpdate.Timeout"),
];

const DELETE_JOB: &[FieldSpec] = &[FieldSpec::string("job-name", "JobName").required()];

const START_JOB_RUN: &[FieldSpec] = &[
    FieldSpec::string("job-name", "JobName").required(),
    FieldSpec::string("job-run-id", "JobRunId").help("Previous run to retry."),
    FieldSpec::json("arguments", "Arguments").help("Run arguments as a JSON object."),
    FieldSpec::integer("timeout", "Timeout"),
    FieldSpec::string("worker-type", "WorkerType"),
    FieldSpec::integer("number-of-workers", "NumberOfWorkers"),
];

const GET_JOB_RUNS: &[FieldSpec] = &[FieldSpec::string("job-name", "JobName").required()];

pub const OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor {
        command: "list-jobs",
        operation: "ListJobs",
        summary: "List job names.",
        fields: LIST_JOBS,
        pagination: Some(PaginationSpec {
            input_token: "NextToken",
            output_token: "NextToken",
            limit: "MaxResults",
            items: "JobNames",
            max_page_size: HIGH_VOLUME_PAGE_SIZE,
        }),
        confirmation: None,
        output: OutputShape::Field("JobNames"),
    },
    OperationDescriptor {
        command: "get-job",
        operation: "GetJob",
        summary: "Show one job definition.",
        fields: GET_JOB,
        pagination: None,
        confirmation: None,
        output: OutputShape::Field("Job"),
    },
    OperationDescriptor {
        command: "create-job",
        operation: "CreateJob",
        summary: "Create a job definition.",
        fields: CREATE_JOB,
        pagination: None,
        confirmation: Some(Confirmation {
            label: "create-job (CreateJob)",
            target: "{{ name }}",
        }),
        output: OutputShape::Field("Name"),
    },
    OperationDescriptor {
        command: "update-job",
        operation: "UpdateJob",
        summary: "Update a job definition.",
        fields: UPDATE_JOB,
        pagination: None,
        confirmation: Some(Confirmation {
            label: "update-job (UpdateJob)",
            target: "{{ job_name }}",
        }),
        output: OutputShape::Field("JobName"),
    },
    OperationDescriptor {
        command: "delete-job",
        operation: "DeleteJob",
        summary: "Delete a job definition.",
        fields: DELETE_JOB,
        pagination: None,
        confirmation: Some(Confirmation {
            label: "delete-job (DeleteJob)",
            target: "{{ job_name }}",
        }),
        output: OutputShape::Field("JobName"),
    },
    OperationDescriptor {
        command: "start-job-run",
        operation: "StartJobRun",
        summary: "Start a run of a job.",
        fields: START_JOB_RUN,
        pagination: None,
        confirmation: Some(Confirmation {
            label: "start-job-run (StartJobRun)",
            target: "{{ job_name }}",
        }),
        output: OutputShape::Field("JobRunId"),
    },
    OperationDescriptor {
        command: "get-job-runs",
        operation: "GetJobRuns",
        summary: "List the runs of a job.",
        fields: GET_JOB_RUNS,
        pagination: Some(PaginationSpec {
            input_token: "NextToken",
            output_token: "NextToken",
            limit: "MaxResults",
            items: "JobRuns",
            max_page_size: 200,
        }),
        confirmation: None,
        output: OutputShape::Field("JobRuns"),
    },
];
