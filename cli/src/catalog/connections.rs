//! Connection operations.
//!
use crate::engine::descriptor::{
    Confirmation, FieldSpec, OperationDescriptor, OutputShape, PaginationSpec,
};

const LIST_CONNECTIONS: &[FieldSpec] = &[
    FieldSpec::string("name-prefix", "Filter.NamePrefix")
        .help("Only connections whose name starts with this prefix."),
    FieldSpec::string("connection-type", "Filter.ConnectionType")
        .help("Only connections of this type (JDBC, KAFKA, NETWORK, ...)."),
    FieldSpec::switch("hide-password", "HidePassword")
        .help("Omit passwords from the returned connection properties."),
];

const GET_CONNECTION: &[FieldSpec] = &[
    FieldSpec::string("name", "Name").required().help("Connection name."),
    FieldSpec::switch("hide-password", "HidePassword")
        .help("Omit passwords from the returned connection properties."),
];

const CREATE_CONNECTION: &[FieldSpec] = &[
    FieldSpec::string("name", "ConnectionInput.Name").required().help("Connection name."),
    FieldSpec::string("connection-type", "ConnectionInput.ConnectionType")
        .required()
        .help("Connection type (JDBC, KAFKA, NETWORK, ...)."),
    FieldSpec::string("description", "ConnectionInput.Description"),
    FieldSpec::json("properties", "ConnectionInput.ConnectionProperties")
        .help("Connection properties as a JSON object."),
    FieldSpec::string_list("match-criteria", "ConnectionInput.MatchCriteria"),
    FieldSpec::string("subnet-id", "ConnectionInput.PhysicalConnectionRequirements.SubnetId"),
    FieldSpec::string_list(
        "security-group-id",
        "ConnectionInput.PhysicalConnectionRequirements.SecurityGroupIdList",
    ),
    FieldSpec::string(
        "availability-zone",
        "ConnectionInput.PhysicalConnectionRequirements.AvailabilityZone",
    ),
    FieldSpec::json("tags", "Tags").help("Tags as a JSON object of string values."),
];

const UPDATE_CONNECTION: &[FieldSpec] = &[
    FieldSpec::string("name", "Name").required().help("Connection to update."),
    FieldSpec::string("new-name", "ConnectionInput.Name"),
    FieldSpec::string("connection-type", "ConnectionInput.ConnectionType"),
    FieldSpec::string("description", "ConnectionInput.Description"),
    FieldSpec::json("properties", "ConnectionInput.ConnectionProperties"),
];

const DELETE_CONNECTION: &[FieldSpec] = &[
    FieldSpec::string("name", "ConnectionName").required().help("Connection to delete."),
];

pub const OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor {
        command: "list-connections",
        operation: "ListConnections",
        summary: "List connection definitions.",
        fields: LIST_CONNECTIONS,
        pagination: Some(PaginationSpec {
            input_token: "NextToken",
            output_token: "NextToken",
            limit: "MaxResults",
            items: "ConnectionList",
            max_page_size: 100,
        }),
        confirmation: None,
        output: OutputShape::Field("ConnectionList"),
    },
    OperationDescriptor {
        command: "get-connection",
        operation: "GetConnection",
        summary: "Show one connection definition.",
        fields: GET_CONNECTION,
        pagination: None,
        confirmation: None,
        output: OutputShape::Field("Connection"),
    },
    OperationDescriptor {
        command: "create-connection",
        operation: "CreateConnection",
        summary: "Create a connection definition.",
        fields: CREATE_CONNECTION,
        pagination: None,
        confirmation: Some(Confirmation {
            label: "create-connection (CreateConnection)",
            target: "{{ name }} ({{ connection_type }})",
        }),
        output: OutputShape::Field("CreateConnectionStatus"),
    },
    OperationDescriptor {
        command: "update-connection",
        operation: "UpdateConnection",
        summary: "Update a connection definition.",
        fields: UPDATE_CONNECTION,
        pagination: None,
        confirmation: Some(Confirmation {
            label: "update-connection (UpdateConnection)",
            target: "{{ name }}",
        }),
        output: OutputShape::Nothing,
    },
    OperationDescriptor {
        command: "delete-connection",
        operation: "DeleteConnection",
        summary: "Delete a connection definition.",
        fields: DELETE_CONNECTION,
        pagination: None,
        confirmation: Some(Confirmation {
            label: "delete-connection (DeleteConnection)",
            target: "{{ name }}",
        }),
        output: OutputShape::Nothing,
    },
];
