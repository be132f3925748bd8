//! # Operation Descriptors
//!
//! File: cli/src/engine/descriptor.rs
//!
//! ## Overview
//!
//! Declarative description of one service operation: which parameters it
//! takes and where they land in the request, whether it pages, whether it
//! mutates remote state (and so needs confirmation), and which part of the
//! response is its output. The catalog (`crate::catalog`) is a table of these;
//! the invocation engine never contains per-operation code.
//!
//! Descriptors are `const`-constructible so the catalog can live in statics:
//!
//! ```rust
//! const FIELDS: &[FieldSpec] = &[
//!     FieldSpec::string("name", "Name").required().help("Connection name."),
//!     FieldSpec::string("name-prefix", "Filter.NamePrefix"),
//! ];
//! ```
//!

/// Flags every operation may receive in addition to its own fields. The
/// global connection and output flags are repeated here because they are also
/// accepted after the operation name.
pub const COMMON_FLAGS: &[&str] = &[
    "next-token",
    "max-items",
    "force",
    "select",
    "help",
    "config",
    "profile",
    "endpoint",
    "region",
    "output",
    "verbose",
];

/// Value type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    /// Explicit `true`/`false` value.
    Boolean,
    /// One or more strings; the flag may be repeated.
    StringList,
    /// A structured object passed as a JSON document.
    Json,
    /// Presence flag: set means `true`, unset means absent (not `false`).
    Switch,
}

impl FieldKind {
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::StringList => "string[]",
            FieldKind::Json => "json",
            FieldKind::Switch => "switch",
        }
    }
}

/// One operation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Command-line flag without the leading dashes (`job-name`).
    pub flag: &'static str,
    /// Dotted location in the request (`JobUpdate.Command.Name`).
    pub path: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub help: &'static str,
}

impl FieldSpec {
    pub const fn new(flag: &'static str, path: &'static str, kind: FieldKind) -> Self {
        FieldSpec {
            flag,
            path,
            kind,
            required: false,
            help: "",
        }
    }

    pub const fn string(flag: &'static str, path: &'static str) -> Self {
        Self::new(flag, path, FieldKind::String)
    }

    pub const fn integer(flag: &'static str, path: &'static str) -> Self {
        Self::new(flag, path, FieldKind::Integer)
    }

    pub const fn boolean(flag: &'static str, path: &'static str) -> Self {
        Self::new(flag, path, FieldKind::Boolean)
    }

    pub const fn string_list(flag: &'static str, path: &'static str) -> Self {
        Self::new(flag, path, FieldKind::StringList)
    }

    pub const fn json(flag: &'static str, path: &'static str) -> Self {
        Self::new(flag, path, FieldKind::Json)
    }

    pub const fn switch(flag: &'static str, path: &'static str) -> Self {
        Self::new(flag, path, FieldKind::Switch)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn help(mut self, help: &'static str) -> Self {
        self.help = help;
        self
    }

    /// Name under which the value is visible to confirmation templates.
    pub fn template_key(&self) -> String {
        self.flag.replace('-', "_")
    }

    pub fn path_segments(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('.')
    }
}

/// Continuation-token paging of a list/describe operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSpec {
    /// Request member carrying the token to resume from.
    pub input_token: &'static str,
    /// Response member carrying the next token.
    pub output_token: &'static str,
    /// Request member carrying the page size hint.
    pub limit: &'static str,
    /// Response member holding the page's items.
    pub items: &'static str,
    /// Largest page the service accepts.
    pub max_page_size: u32,
}

/// Confirmation required before a mutating call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    /// Fixed label shown in the prompt.
    pub label: &'static str,
    /// Template rendered over the invocation values to name the target.
    pub target: &'static str,
}

/// Which part of the response is written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    Nothing,
    Whole,
    /// Dotted path into the response.
    Field(&'static str),
}

/// Everything the engine needs to know about one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Command name (`list-connections`).
    pub command: &'static str,
    /// Service operation name (`ListConnections`).
    pub operation: &'static str,
    pub summary: &'static str,
    pub fields: &'static [FieldSpec],
    pub pagination: Option<PaginationSpec>,
    pub confirmation: Option<Confirmation>,
    pub output: OutputShape,
}

impl OperationDescriptor {
    pub fn is_mutating(&self) -> bool {
        self.confirmation.is_some()
    }

    pub fn field(&self, flag: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.flag == flag)
    }
}
