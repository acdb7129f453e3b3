use crate::graph::ModuleId;
use crate::module::ModuleKind;

#[derive(Debug, thiserror::Error)]
pub enum NoiseError {
    #[error("{kind} module {module} has no source module in slot {index}")]
    MissingSourceModule {
        module: ModuleId,
        kind: ModuleKind,
        index: usize,
    },

    #[error("{kind} needs at least {required} control points, has {found}")]
    InsufficientControlPoints {
        kind: ModuleKind,
        required: usize,
        found: usize,
    },

    #[error("control point with input {input} already exists")]
    DuplicateControlPoint { input: f64 },

    #[error("unknown module kind: {0}")]
    UnknownModuleKind(String),

    #[error("unknown parameter `{name}` for {kind}")]
    UnknownParameter { kind: ModuleKind, name: String },

    #[error("invalid value `{value}` for parameter `{name}` of {kind}")]
    InvalidParameter {
        kind: ModuleKind,
        name: String,
        value: String,
    },

    #[error("malformed parameter `{0}`, expected key=value")]
    MalformedParameter(String),

    #[error("module `{module}` references unknown source module `{source_name}`")]
    UnresolvedSourceModule { module: String, source_name: String },

    #[error("module name `{0}` is used more than once")]
    DuplicateModuleName(String),

    #[error("module {module} has {count} source slots, slot {index} is out of range")]
    InvalidSourceSlot {
        module: ModuleId,
        index: usize,
        count: usize,
    },

    #[error("no module with id {0} in this graph")]
    UnknownModule(ModuleId),

    #[error("wiring {source_module} into {parent} would create a cycle")]
    CycleDetected {
        parent: ModuleId,
        source_module: ModuleId,
    },

    #[error("gradient needs at least two points")]
    EmptyGradient,

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, NoiseError>;
