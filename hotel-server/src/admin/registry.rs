//! Admin model registry
//!
//! Each record type describes itself through [`ModelAdmin`]; an
//! [`AdminSite`] collects the descriptions in registration order so the
//! console can scaffold list and edit screens without per-model code.

use crate::utils::{AppError, AppResult, EntityCodes, ErrorCode};
use serde::Serialize;

/// Form widget / storage kind of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Char,
    Text,
    Email,
    Integer,
    Decimal,
    Date,
    DateTime,
    Choice,
    ForeignKey,
    Password,
    Boolean,
}

/// What happens to referencing rows when the target is deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OnDelete {
    /// Delete is rejected while references exist
    Protect,
    /// Referencing rows are deleted too
    Cascade,
}

/// One allowed value of a choice field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

/// Foreign key target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reference {
    /// Registry name of the referenced model
    pub model: &'static str,
    pub on_delete: OnDelete,
}

/// Field description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMeta {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub unique: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// `(max_digits, decimal_places)` for decimal fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<(u32, u32)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Reference>,
    /// Auto-set fields (timestamps) are shown but not editable
    pub editable: bool,
}

impl FieldMeta {
    fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            unique: false,
            max_length: None,
            precision: None,
            choices: Vec::new(),
            default: None,
            references: None,
            editable: true,
        }
    }

    pub fn char(name: &'static str, max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..Self::new(name, FieldKind::Char)
        }
    }

    pub fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn email(name: &'static str, max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..Self::new(name, FieldKind::Email)
        }
    }

    pub fn password(name: &'static str, max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..Self::new(name, FieldKind::Password)
        }
    }

    pub fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    pub fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    pub fn decimal(name: &'static str, max_digits: u32, decimal_places: u32) -> Self {
        Self {
            precision: Some((max_digits, decimal_places)),
            ..Self::new(name, FieldKind::Decimal)
        }
    }

    pub fn date(name: &'static str) -> Self {
        Self::new(name, FieldKind::Date)
    }

    pub fn datetime(name: &'static str) -> Self {
        Self::new(name, FieldKind::DateTime)
    }

    pub fn choice(name: &'static str, choices: Vec<Choice>) -> Self {
        Self {
            choices,
            ..Self::new(name, FieldKind::Choice)
        }
    }

    pub fn foreign_key(name: &'static str, model: &'static str, on_delete: OnDelete) -> Self {
        Self {
            references: Some(Reference { model, on_delete }),
            ..Self::new(name, FieldKind::ForeignKey)
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self.required = false;
        self
    }

    /// Set once on insert, read-only afterwards
    pub fn auto_now_add(mut self) -> Self {
        self.editable = false;
        self.required = false;
        self
    }
}

/// Admin description of a record type
pub trait ModelAdmin {
    /// Registry name, matches the `model` tag of `AdminIntent`
    const MODEL: &'static str;
    const TABLE: &'static str;
    const VERBOSE_NAME: &'static str;
    const VERBOSE_NAME_PLURAL: &'static str;
    /// Error codes reported for this model's storage failures
    const CODES: EntityCodes;

    /// Editable and displayed fields, in form order
    fn fields() -> Vec<FieldMeta>;

    fn meta() -> ModelMeta {
        ModelMeta {
            model: Self::MODEL,
            table: Self::TABLE,
            verbose_name: Self::VERBOSE_NAME,
            verbose_name_plural: Self::VERBOSE_NAME_PLURAL,
            fields: Self::fields(),
            codes: Self::CODES,
        }
    }
}

/// Registered model metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelMeta {
    pub model: &'static str,
    pub table: &'static str,
    pub verbose_name: &'static str,
    pub verbose_name_plural: &'static str,
    pub fields: Vec<FieldMeta>,
    #[serde(skip)]
    pub codes: EntityCodes,
}

impl ModelMeta {
    pub fn field(&self, name: &str) -> Option<&FieldMeta> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Ordered set of models exposed to the admin console
#[derive(Debug, Clone, Default)]
pub struct AdminSite {
    models: Vec<ModelMeta>,
}

impl AdminSite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model; each model may be registered once
    pub fn register<M: ModelAdmin>(&mut self) -> AppResult<()> {
        if self.is_registered(M::MODEL) {
            return Err(AppError::with_message(
                ErrorCode::ModelAlreadyRegistered,
                format!("Model '{}' is already registered", M::MODEL),
            )
            .with_detail("model", M::MODEL));
        }
        tracing::debug!(model = M::MODEL, "Admin model registered");
        self.models.push(M::meta());
        Ok(())
    }

    /// Registered models in registration order
    pub fn models(&self) -> &[ModelMeta] {
        &self.models
    }

    pub fn get(&self, model: &str) -> Option<&ModelMeta> {
        self.models.iter().find(|m| m.model == model)
    }

    pub fn is_registered(&self, model: &str) -> bool {
        self.get(model).is_some()
    }

    /// Look up a model, failing with `ModelNotRegistered`
    pub fn require(&self, model: &str) -> AppResult<&ModelMeta> {
        self.get(model).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ModelNotRegistered,
                format!("Model '{model}' is not registered"),
            )
            .with_detail("model", model)
        })
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
