//! Parsing of `--flag value` command arguments against an operation's parameters.

use mucli_core::{Operation, Parameter, ParameterIn};

/// Flag carrying the JSON request body of operations that accept one.
pub const BODY_FLAG: &str = "body";

/// Arguments of one API call, split by where they go in the request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallArgs {
    /// Values substituted into the `{name}` segments of the path template.
    pub path: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub cookies: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum FlagError {
    #[error("unexpected argument '{0}', expected --<flag> <value>")]
    UnexpectedArgument(String),

    #[error("flag --{0} requires a value")]
    MissingValue(String),

    #[error("unknown flag --{0}")]
    UnknownFlag(String),

    #[error("flag --{0} was given more than once")]
    DuplicateFlag(String),

    #[error("invalid value '{value}' for --{flag}, expected one of: {allowed}")]
    InvalidValue {
        flag: String,
        value: String,
        allowed: String,
    },

    #[error("--{BODY_FLAG} is not valid JSON")]
    InvalidBody(#[source] serde_json::Error),

    #[error("missing required flags: {}", .0.join(", "))]
    MissingRequired(Vec<String>),

    #[error("this command requires a request body, pass it with --{BODY_FLAG} <json>")]
    MissingBody,
}

/// Parses the arguments of a call to `operation`.
///
/// Flags are the parameter names with underscores replaced by hyphens; the raw
/// parameter name is accepted too. Both `--flag value` and `--flag=value` forms work.
pub fn parse_call_args(operation: &Operation, args: &[String]) -> Result<CallArgs, FlagError> {
    let mut values: Vec<(&Parameter, String)> = Vec::new();
    let mut body = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let flag = arg
            .strip_prefix("--")
            .ok_or_else(|| FlagError::UnexpectedArgument(arg.clone()))?;
        let (name, value) = match flag.split_once('=') {
            Some((name, value)) => (name, value.to_string()),
            None => {
                let value = iter
                    .next()
                    .ok_or_else(|| FlagError::MissingValue(flag.to_string()))?;
                (flag, value.clone())
            }
        };

        if name == BODY_FLAG && operation.request_body.is_some() {
            if body.is_some() {
                return Err(FlagError::DuplicateFlag(name.to_string()));
            }
            body = Some(serde_json::from_str(&value).map_err(FlagError::InvalidBody)?);
            continue;
        }

        let parameter = operation
            .named_parameters()
            .find(|parameter| parameter.flag_name() == name || parameter.name == name)
            .ok_or_else(|| FlagError::UnknownFlag(name.to_string()))?;
        if values.iter().any(|(seen, _)| seen.name == parameter.name) {
            return Err(FlagError::DuplicateFlag(parameter.flag_name()));
        }
        check_allowed(parameter, &value)?;
        values.push((parameter, value));
    }

    let missing: Vec<String> = operation
        .named_parameters()
        .filter(|parameter| parameter.required)
        .filter(|parameter| !values.iter().any(|(seen, _)| seen.name == parameter.name))
        .map(|parameter| format!("--{}", parameter.flag_name()))
        .collect();
    if !missing.is_empty() {
        return Err(FlagError::MissingRequired(missing));
    }
    if operation.request_body.as_ref().is_some_and(|rb| rb.required) && body.is_none() {
        return Err(FlagError::MissingBody);
    }

    let mut call = CallArgs {
        body,
        ..CallArgs::default()
    };
    for (parameter, value) in values {
        let pair = (parameter.name.clone(), value);
        match parameter.location() {
            ParameterIn::Path => call.path.push(pair),
            ParameterIn::Query => call.query.push(pair),
            ParameterIn::Header => call.headers.push(pair),
            ParameterIn::Cookie => call.cookies.push(pair),
        }
    }
    Ok(call)
}

fn check_allowed(parameter: &Parameter, value: &str) -> Result<(), FlagError> {
    let Some(allowed) = parameter
        .schema
        .enum_values
        .as_deref()
        .filter(|allowed| !allowed.is_empty())
    else {
        return Ok(());
    };
    let allowed: Vec<String> = allowed.iter().map(ToString::to_string).collect();
    if allowed.iter().any(|candidate| candidate == value) {
        return Ok(());
    }
    Err(FlagError::InvalidValue {
        flag: parameter.flag_name(),
        value: value.to_string(),
        allowed: allowed.join(", "),
    })
}

/// Substitutes `{name}` segments of a path template.
pub fn fill_path(template: &str, path: &[(String, String)]) -> String {
    path.iter().fold(template.to_string(), |filled, (name, value)| {
        filled.replace(&format!("{{{name}}}"), value)
    })
}
