//! Comparison options and the render directives they expand to.
//!
//! Options are plain data. A [`CompareOptions`] list is folded, in order,
//! into a single [`RenderDirectives`]; every option only ever adds to the
//! directives, so later options never undo earlier ones.

use std::any::type_name;
use std::collections::BTreeSet;
use std::fmt;

/// Indentation unit of canonical forms.
pub const DEFAULT_INDENT: &str = "  ";

/// Identifies a Rust type by its `std::any::type_name`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeKey(&'static str);

impl TypeKey {
    pub fn of<T: ?Sized>() -> Self {
        TypeKey(type_name::<T>())
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.0)
    }
}

/// A single comparison modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareOption {
    /// Drop fields of this declared type from comparison and rendering.
    Exclude(TypeKey),
    /// Drop fields holding an empty or default value.
    OmitEmpty,
    /// Render custom-formatted values by their structure.
    IgnoreCustomFormatting,
}

/// Exclude fields of type `T` from comparison.
pub fn exclude<T: ?Sized>() -> CompareOption {
    CompareOption::Exclude(TypeKey::of::<T>())
}

/// Omit empty fields from comparison.
pub fn omit_empty() -> CompareOption {
    CompareOption::OmitEmpty
}

/// Ignore custom formatting hooks when comparing.
pub fn ignore_custom_formatting() -> CompareOption {
    CompareOption::IgnoreCustomFormatting
}

/// An ordered list of [`CompareOption`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompareOptions {
    options: Vec<CompareOption>,
}

impl CompareOptions {
    /// No options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, option: CompareOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn exclude<T: ?Sized>(self) -> Self {
        self.with(exclude::<T>())
    }

    pub fn omit_empty(self) -> Self {
        self.with(CompareOption::OmitEmpty)
    }

    pub fn ignore_custom_formatting(self) -> Self {
        self.with(CompareOption::IgnoreCustomFormatting)
    }

    /// Concatenate two option lists.
    pub fn concat(mut self, other: &CompareOptions) -> Self {
        self.options.extend_from_slice(&other.options);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompareOption> {
        self.options.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Expand into render directives using the default indent.
    pub fn directives(&self) -> RenderDirectives {
        self.directives_with_indent(DEFAULT_INDENT)
    }

    /// Expand into render directives using `indent` as the indentation unit.
    pub fn directives_with_indent(&self, indent: &str) -> RenderDirectives {
        self.options
            .iter()
            .fold(RenderDirectives::with_indent(indent), |mut directives, option| {
                directives.apply(*option);
                directives
            })
    }
}

impl From<Vec<CompareOption>> for CompareOptions {
    fn from(options: Vec<CompareOption>) -> Self {
        Self { options }
    }
}

impl FromIterator<CompareOption> for CompareOptions {
    fn from_iter<I: IntoIterator<Item = CompareOption>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}

/// Everything the canonical renderer needs to know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderDirectives {
    pub indent: String,
    /// Declared field types that are not rendered.
    pub hidden_types: BTreeSet<&'static str>,
    pub omit_empty: bool,
    pub ignore_custom_formatting: bool,
}

impl Default for RenderDirectives {
    fn default() -> Self {
        Self::with_indent(DEFAULT_INDENT)
    }
}

impl RenderDirectives {
    pub fn with_indent(indent: &str) -> Self {
        Self {
            indent: indent.to_owned(),
            hidden_types: BTreeSet::new(),
            omit_empty: false,
            ignore_custom_formatting: false,
        }
    }

    fn apply(&mut self, option: CompareOption) {
        match option {
            CompareOption::Exclude(key) => {
                self.hidden_types.insert(key.name());
            }
            CompareOption::OmitEmpty => self.omit_empty = true,
            CompareOption::IgnoreCustomFormatting => self.ignore_custom_formatting = true,
        }
    }

    /// Whether a field of the given declared type is hidden.
    pub fn hides(&self, type_name: &str) -> bool {
        self.hidden_types.contains(type_name)
    }
}
