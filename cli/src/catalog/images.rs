//! Machine image operations.
//!
use crate::engine::descriptor::{
    Confirmation, FieldSpec, OperationDescriptor, OutputShape, PaginationSpec,
};
use crate::engine::paginate::HIGH_VOLUME_PAGE_SIZE;

const DESCRIBE_IMAGES: &[FieldSpec] = &[
    FieldSpec::string_list("image-id", "ImageIds").help("Only these image IDs."),
    FieldSpec::string_list("owner", "Owners")
        .help("Only images owned by these accounts (`self` for your own)."),
    FieldSpec::boolean("include-deprecated", "IncludeDeprecated"),
    FieldSpec::json("filters", "Filters")
        .help("Filters as a JSON array of {\"Name\": ..., \"Values\": [...]} objects."),
];

const COPY_IMAGE: &[FieldSpec] = &[
    FieldSpec::string("source-image-id", "SourceImageId")
        .required()
        .help("Image to copy."),
    FieldSpec::string("source-region", "SourceRegion")
        .required()
        .help("Region the source image lives in."),
    FieldSpec::string("name", "Name").required().help("Name of the new image."),
    FieldSpec::string("description", "Description"),
    FieldSpec::boolean("encrypted", "Encrypted").help("Encrypt the snapshots of the copy."),
    FieldSpec::string("kms-key-id", "KmsKeyId"),
    FieldSpec::string("client-token", "ClientToken").help("Idempotency token."),
];

const DEREGISTER_IMAGE: &[FieldSpec] = &[
    FieldSpec::string("image-id", "ImageId").required(),
];

pub const OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor {
        command: "describe-images",
        operation: "DescribeImages",
        summary: "Describe machine images.",
        fields: DESCRIBE_IMAGES,
        pagination: Some(PaginationSpec {
            input_token: "NextToken",
            output_token: "NextToken",
            limit: "MaxResults",
            items: "Images",
            max_page_size: HIGH_VOLUME_PAGE_SIZE,
        }),
        confirmation: None,
        output: OutputShape::Field("Images"),
    },
    OperationDescriptor {
        command: "copy-image",
        operation: "CopyImage",
        summary: "Copy a machine image, possibly across regions.",
        fields: COPY_IMAGE,
        pagination: None,
        confirmation: Some(Confirmation {
            label: "copy-image (CopyImage)",
            target: "{{ source_image_id }} ({{ source_region }})",
        }),
        output: OutputShape::Field("ImageId"),
    },
    OperationDescriptor {
        command: "deregister-image",
        operation: "DeregisterImage",
        summary: "Deregister a machine image.",
        fields: DEREGISTER_IMAGE,
        pagination: None,
        confirmation: Some(Confirmation {
            label: "deregister-image (DeregisterImage)",
            target: "{{ image_id }}",
        }),
        output: OutputShape::Nothing,
    },
];
