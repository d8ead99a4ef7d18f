//! Loading descriptor text from a file, stdin or the environment.

use super::models::DescriptorSource;
use crate::utils::error::InputError;
use log::debug;
use std::io::Read;

/// Read the descriptor text from `source`
///
/// # Errors
/// * `InputError::ReadFailed` - file or stdin could not be read
/// * `InputError::MissingEnv` - environment variable not set
/// * `InputError::Empty` - descriptor contains only whitespace
pub fn read_descriptor(source: &DescriptorSource) -> Result<String, InputError> {
    let text = match source {
        DescriptorSource::File(path) => {
            debug!("Reading descriptor from {}", path.display());
            std::fs::read_to_string(path)?
        }
        DescriptorSource::Stdin => {
            debug!("Reading descriptor from stdin");
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
        DescriptorSource::Env(var) => {
            debug!("Reading descriptor from ${}", var);
            std::env::var(var).map_err(|_| InputError::MissingEnv(var.clone()))?
        }
    };

    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }

    Ok(text)
}
