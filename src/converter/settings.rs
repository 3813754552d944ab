use crate::algebra::SparseFormat;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadField(&'static str),
}

/// Settings for a [`SparseConverter`](crate::converter::SparseConverter)
///
/// ```
/// use sparseconv::converter::*;
///
/// let settings = ConverterSettingsBuilder::default()
///     .format("csr".to_string())
///     .verbose(true)
///     .build()
///     .unwrap();
/// assert_eq!(settings.format, "csr");
/// ```

#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConverterSettings {
    ///output encoding ("auto", "coordinate", "triplet_list" or "csr")
    #[builder(default = r#""auto".to_string()"#)]
    pub format: String,

    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,
}

impl Default for ConverterSettings {
    fn default() -> ConverterSettings {
        ConverterSettingsBuilder::default().build().unwrap()
    }
}

impl ConverterSettings {
    /// Checks that the settings are valid.  This only ensures that fields
    /// specified by strings contain valid options.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_format(&self.format)?;
        Ok(())
    }

    /// The fixed output format, or `None` if chosen per matrix ("auto")
    pub(crate) fn fixed_format(&self) -> Result<Option<SparseFormat>, SettingsError> {
        parse_format(&self.format)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for ConverterSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        ConverterSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl ConverterSettingsBuilder {
    /// check that the specified format is valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(ref format) = self.format {
            validate_format(format)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn parse_format(format: &str) -> Result<Option<SparseFormat>, SettingsError> {
    match format {
        "auto" => Ok(None),
        "coordinate" => Ok(Some(SparseFormat::Coordinate)),
        "triplet_list" => Ok(Some(SparseFormat::TripletList)),
        "csr" => Ok(Some(SparseFormat::Csr)),
        _ => Err(SettingsError::BadField("format")),
    }
}

fn validate_format(format: &str) -> Result<(), SettingsError> {
    parse_format(format).map(|_| ())
}

#[test]
fn test_settings_validate() {
    // all standard settings
    assert!(ConverterSettings::default().validate().is_ok());
    assert_eq!(ConverterSettings::default().fixed_format(), Ok(None));

    for (name, format) in [
        ("coordinate", SparseFormat::Coordinate),
        ("triplet_list", SparseFormat::TripletList),
        ("csr", SparseFormat::Csr),
    ] {
        let settings = ConverterSettingsBuilder::default()
            .format(name.to_string())
            .build()
            .unwrap();
        assert_eq!(settings.fixed_format(), Ok(Some(format)));
    }

    // fail on unknown format
    assert!(ConverterSettingsBuilder::default()
        .format("csc".to_string())
        .build()
        .is_err());

    // direct construction bypasses the builder, so check explicitly
    let settings = ConverterSettings {
        format: "dense".to_string(),
        verbose: false,
    };
    assert_eq!(settings.validate(), Err(SettingsError::BadField("format")));
    assert_eq!(
        settings.fixed_format(),
        Err(SettingsError::BadField("format"))
    );
}
