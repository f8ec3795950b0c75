//! Named entities referenced by telematics records
//!
//! Diagnostics, failure modes, controllers, drivers, sources and units all
//! share the same naming capability: a user-defined entity carries its own
//! name, while a built-in system entity is identified by its type tag.

use std::fmt;

/// Entity with a display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamedEntity {
    /// Built-in entity without a user-assigned name
    System {
        /// Type tag used as display name (e.g. `UnknownDriver`)
        type_tag: String,
    },

    /// User-defined entity
    User {
        /// User-assigned name
        name: String,
    },
}

impl NamedEntity {
    pub fn system(type_tag: impl Into<String>) -> Self {
        Self::System {
            type_tag: type_tag.into(),
        }
    }

    pub fn user(name: impl Into<String>) -> Self {
        Self::User { name: name.into() }
    }

    /// Check if this is a built-in system entity
    pub fn is_system(&self) -> bool {
        matches!(self, Self::System { .. })
    }

    /// Name to show for this entity
    pub fn display_name(&self) -> &str {
        match self {
            Self::System { type_tag } => type_tag,
            Self::User { name } => name,
        }
    }
}

impl fmt::Display for NamedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Diagnostic variant
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DiagnosticKind {
    /// Boolean or event style diagnostic, no unit
    #[default]
    Event,

    /// Diagnostic carrying a measured value
    Measured {
        unit_of_measure: Option<NamedEntity>,
    },
}

/// Engine or device diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub entity: NamedEntity,

    /// Diagnostic code (e.g. J1939 SPN)
    pub code: Option<i32>,

    /// Where the diagnostic comes from (J1939, OBD, GO device, ...)
    pub source: Option<NamedEntity>,

    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(entity: NamedEntity) -> Self {
        Self {
            entity,
            code: None,
            source: None,
            kind: DiagnosticKind::Event,
        }
    }

    pub fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_source(mut self, source: NamedEntity) -> Self {
        self.source = Some(source);
        self
    }

    /// Make this a measured-data diagnostic reported in `unit`
    pub fn measured(mut self, unit: NamedEntity) -> Self {
        self.kind = DiagnosticKind::Measured {
            unit_of_measure: Some(unit),
        };
        self
    }

    /// Unit of measure, only ever present for measured diagnostics
    pub fn unit_of_measure(&self) -> Option<&NamedEntity> {
        match &self.kind {
            DiagnosticKind::Event => None,
            DiagnosticKind::Measured { unit_of_measure } => unit_of_measure.as_ref(),
        }
    }
}

/// Failure mode of a fault
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureMode {
    /// Resolved failure mode
    Resolved {
        entity: NamedEntity,
        code: Option<i32>,
        source: Option<NamedEntity>,
    },

    /// Sentinel meaning "no failure"
    NoFailureMode,
}

impl FailureMode {
    /// Type tag reported as display name of the sentinel
    pub const NO_FAILURE_MODE: &'static str = "NoFailureMode";

    pub fn resolved(entity: NamedEntity) -> Self {
        Self::Resolved {
            entity,
            code: None,
            source: None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::NoFailureMode)
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Resolved { entity, .. } => entity.display_name(),
            Self::NoFailureMode => Self::NO_FAILURE_MODE,
        }
    }

    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Resolved { code, .. } => *code,
            Self::NoFailureMode => None,
        }
    }

    pub fn source(&self) -> Option<&NamedEntity> {
        match self {
            Self::Resolved { source, .. } => source.as_ref(),
            Self::NoFailureMode => None,
        }
    }
}

/// Driver identification key (NFC, iButton, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    pub serial_number: String,
}

impl Key {
    pub fn new(serial_number: impl Into<String>) -> Self {
        Self {
            serial_number: serial_number.into(),
        }
    }
}

/// Driver with its identification keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    pub entity: NamedEntity,

    /// Keys in the order they were assigned
    pub keys: Vec<Key>,
}

impl Driver {
    pub fn new(entity: NamedEntity) -> Self {
        Self {
            entity,
            keys: Vec::new(),
        }
    }

    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }
}
