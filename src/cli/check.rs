use clap::Parser;
use credshape::{
    types::{form, FormKind, ValidatedForm},
    util::validator::IntoValidatorReport,
};
use error_stack::{Report, Result, ResultExt};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Validate a login or registration payload without starting a server
#[derive(Debug, Parser)]
pub struct CheckCommand {
    /// `login` or `registration`
    pub kind: FormKind,
    /// JSON file holding the payload, reads from stdin if omitted or `-`
    pub file: Option<PathBuf>,
}

#[derive(Debug, Error)]
#[error("Payload did not pass validation")]
pub struct CheckError;

pub fn run(args: &CheckCommand) -> Result<(), CheckError> {
    let input = read_input(args.file.as_deref())?;
    let form = check_str(args.kind, &input)?;

    println!("{}", summary(&form));
    Ok(())
}

/// Parses `input` as a JSON object and validates it as a `kind` form.
pub fn check_str(kind: FormKind, input: &str) -> Result<ValidatedForm, CheckError> {
    let payload = match serde_json::from_str::<Value>(input).change_context(CheckError)? {
        Value::Object(map) => map,
        other => {
            return Err(Report::new(CheckError).attach_printable(format!(
                "payload must be a JSON object, got {}",
                json_type(&other)
            )))
        }
    };

    form::validate(kind, &payload)
        .into_validator_report()
        .change_context(CheckError)
}

fn summary(form: &ValidatedForm) -> String {
    format!("valid {} form for {}", form.kind(), form.email())
}

fn read_input(file: Option<&Path>) -> Result<String, CheckError> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .change_context(CheckError)
            .attach_printable_lazy(|| format!("could not read {}", path.display())),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .change_context(CheckError)
                .attach_printable("could not read payload from stdin")?;
            Ok(input)
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(..) => "a boolean",
        Value::Number(..) => "a number",
        Value::String(..) => "a string",
        Value::Array(..) => "an array",
        Value::Object(..) => "an object",
    }
}
