//! Text output of parsed naming contexts.

use clap::ValueEnum;
use dsnaming_core::{Flattened, NamingContext, NamingError};

const ABSENT: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Labeled fields for one descriptor, tab separated columns for several
    #[default]
    Fields,
    /// `<GUID=...>;<SID=...>;dn`
    Extended,
    /// Distinguished name only
    Dn,
}

/// Renders the parsed contexts according to how many there are.
///
/// # Errors
///
/// [`NamingError::InvalidArgument`] when no descriptor was given.
pub fn render(
    contexts: Flattened<NamingContext>,
    format: OutputFormat,
) -> Result<String, NamingError> {
    match contexts {
        Flattened::Empty => {
            Err(NamingError::InvalidArgument("no naming context descriptor given"))
        }
        Flattened::Single(context) => Ok(match format {
            OutputFormat::Fields => field_block(&context),
            _ => line(&context, format),
        }),
        Flattened::Many(contexts) => Ok(contexts
            .iter()
            .map(|context| line(context, format))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn field_block(context: &NamingContext) -> String {
    let (dn, guid, sid) = columns(context);
    format!("distinguishedName: {dn}\nobjectGUID: {guid}\nobjectSid: {sid}")
}

fn line(context: &NamingContext, format: OutputFormat) -> String {
    match format {
        OutputFormat::Fields => {
            let (dn, guid, sid) = columns(context);
            format!("{dn}\t{guid}\t{sid}")
        }
        OutputFormat::Extended => context.extended_form(),
        OutputFormat::Dn => context.to_string(),
    }
}

fn columns(context: &NamingContext) -> (String, String, String) {
    (
        context.distinguished_name().unwrap_or(ABSENT).to_string(),
        context.global_id().map_or_else(|| ABSENT.to_string(), ToString::to_string),
        context.security_identifier().map_or_else(|| ABSENT.to_string(), ToString::to_string),
    )
}
