mod error;

pub use self::error::ConfigurationError;
use crate::{
    ast,
    ir::{
        Alias, Compression, Configuration, Entry, Mode, Optimization, Output, Passthrough,
        Pattern, Resolution, Rule, RuleSet, ServerConfiguration, UnhandledPolicy, is_within,
    },
    transform::{TransformContext, TransformRegistry},
};
use std::{
    collections::{BTreeMap, HashMap, HashSet},
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};

const DEFAULT_OUTPUT_DIRECTORY: &str = "dist";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PUBLIC_PATH: &str = "/";
const DEFAULT_EXTENSIONS: &str = ".tsx .ts .js .jsx";
const DEFAULT_VENDOR_PATTERN: &str = r"[\\/]node_modules[\\/]";
const DEFAULT_COMPRESSION_PATTERN: &str = r"\.js$|\.css$|\.html$";
const DEFAULT_COMPRESSION_THRESHOLD: u64 = 10240;

const VARIABLES: &[&str] = &[
    "output",
    "port",
    "public_path",
    "template",
    "extensions",
    "vendor",
    "split_vendor",
    "deterministic_ids",
    "compress",
    "compression_threshold",
    "static",
    "unhandled",
    "history_fallback",
];

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub mode: Option<Mode>,
    pub output: Option<PathBuf>,
    pub port: Option<u16>,
}

pub fn compile(
    module: &ast::Module,
    root_directory: &Path,
    environment: &HashMap<String, String>,
    overrides: &Overrides,
    registry: &TransformRegistry,
) -> Result<Configuration, ConfigurationError> {
    let mut variables = HashMap::<&str, &str>::new();
    let mut entries = vec![];
    let mut aliases = vec![];
    let mut definitions = BTreeMap::new();
    let mut rules = vec![];

    for statement in module.statements() {
        match statement {
            ast::Statement::Alias(alias) => {
                aliases.push(Alias::new(alias.prefix(), root_directory.join(alias.path())))
            }
            ast::Statement::Define(define) => {
                definitions.insert(define.name().into(), define.value().into());
            }
            ast::Statement::Entry(entry) => {
                if entries
                    .iter()
                    .any(|other: &Entry| other.name().as_ref() == entry.name())
                {
                    return Err(ConfigurationError::DuplicateEntry(entry.name().into()));
                }

                entries.push(Entry::new(entry.name(), root_directory.join(entry.path())));
            }
            ast::Statement::Environment(variable) => {
                let value = environment
                    .get(variable.name())
                    .map(String::as_str)
                    .or(variable.default())
                    .ok_or_else(|| {
                        ConfigurationError::EnvironmentVariableNotFound(variable.name().into())
                    })?;

                definitions.insert(
                    format!("process.env.{}", variable.name()),
                    serde_json::Value::from(value).to_string(),
                );
            }
            ast::Statement::Rule(rule) => rules.push(compile_rule(rule, registry)?),
            ast::Statement::VariableDefinition(definition) => {
                if !VARIABLES.contains(&definition.name()) {
                    return Err(ConfigurationError::UnknownVariable(definition.name().into()));
                }

                variables.insert(definition.name(), definition.value());
            }
        }
    }

    if entries.is_empty() {
        return Err(ConfigurationError::MissingEntry);
    }

    let variable = |name: &str| variables.get(name).copied();
    let mode = overrides.mode.unwrap_or_default();
    let output = Output::new(
        overrides.output.clone().unwrap_or_else(|| {
            root_directory.join(variable("output").unwrap_or(DEFAULT_OUTPUT_DIRECTORY))
        }),
        variable("template").map(|path| root_directory.join(path)),
    );

    if let Some(source) = [root_directory]
        .into_iter()
        .chain(entries.iter().map(Entry::path))
        .chain(output.template())
        .find(|path| is_within(path, output.directory()))
    {
        return Err(ConfigurationError::OutputOverlapsSource {
            directory: output.directory().into(),
            source: source.into(),
        });
    }

    Ok(Configuration::new(
        root_directory,
        entries,
        Resolution::new(
            aliases,
            extensions(variable("extensions").unwrap_or(DEFAULT_EXTENSIONS)),
        ),
        RuleSet::new(rules),
        Passthrough::new(
            extensions(variable("static").unwrap_or_default())
                .into_iter()
                .map(|extension| extension.to_lowercase())
                .collect(),
            match variable("unhandled") {
                None | Some("error") => UnhandledPolicy::Error,
                Some("copy") => UnhandledPolicy::Copy,
                Some(value) => return Err(invalid_value("unhandled", value)),
            },
        ),
        output,
        Optimization::new(
            boolean(&variables, "split_vendor", true)?,
            pattern("vendor", variable("vendor").unwrap_or(DEFAULT_VENDOR_PATTERN))?,
            boolean(&variables, "deterministic_ids", true)?,
            Compression::new(
                pattern(
                    "compress",
                    variable("compress").unwrap_or(DEFAULT_COMPRESSION_PATTERN),
                )?,
                number(
                    &variables,
                    "compression_threshold",
                    DEFAULT_COMPRESSION_THRESHOLD,
                )?,
            ),
        ),
        ServerConfiguration::new(
            match overrides.port {
                Some(port) => port,
                None => number(&variables, "port", DEFAULT_PORT)?,
            },
            boolean(&variables, "history_fallback", true)?,
        ),
        TransformContext::new(
            mode,
            variable("public_path").unwrap_or(DEFAULT_PUBLIC_PATH),
            definitions,
        )
        .map_err(|error| ConfigurationError::InvalidRegex {
            name: "define".into(),
            message: error.to_string(),
        })?,
    ))
}

fn compile_rule(
    rule: &ast::Rule,
    registry: &TransformRegistry,
) -> Result<Rule, ConfigurationError> {
    let mut test = None;
    let mut exclude = None;
    let mut transforms = None;

    for definition in rule.variable_definitions() {
        match definition.name() {
            "test" => test = Some(pattern("test", definition.value())?),
            "exclude" => exclude = Some(pattern("exclude", definition.value())?),
            "use" => transforms = Some(definition.value()),
            name => {
                return Err(ConfigurationError::UnknownRuleVariable {
                    rule: rule.name().into(),
                    variable: name.into(),
                });
            }
        }
    }

    let test = test.ok_or_else(|| ConfigurationError::RuleTestMissing(rule.name().into()))?;
    let transforms = transforms
        .unwrap_or_default()
        .split_whitespace()
        .map(|name| {
            if registry.contains(name) {
                Ok(Arc::from(name))
            } else {
                Err(ConfigurationError::TransformNotFound {
                    rule: rule.name().into(),
                    transform: name.into(),
                })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    if transforms.is_empty() {
        return Err(ConfigurationError::EmptyTransforms(rule.name().into()));
    }

    Ok(Rule::new(rule.name(), test, exclude, transforms))
}

fn extensions(value: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    value
        .split_whitespace()
        .map(|extension| {
            if extension.starts_with('.') {
                extension.to_owned()
            } else {
                format!(".{extension}")
            }
        })
        .filter(|extension| seen.insert(extension.clone()))
        .collect()
}

fn pattern(name: &str, value: &str) -> Result<Pattern, ConfigurationError> {
    Pattern::new(value).map_err(|error| ConfigurationError::InvalidRegex {
        name: name.into(),
        message: error.to_string(),
    })
}

fn boolean(
    variables: &HashMap<&str, &str>,
    name: &str,
    default: bool,
) -> Result<bool, ConfigurationError> {
    match variables.get(name).copied() {
        None => Ok(default),
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(value) => Err(invalid_value(name, value)),
    }
}

fn number<T: FromStr>(
    variables: &HashMap<&str, &str>,
    name: &str,
    default: T,
) -> Result<T, ConfigurationError> {
    variables
        .get(name)
        .map(|value| value.parse().map_err(|_| invalid_value(name, value)))
        .unwrap_or(Ok(default))
}

fn invalid_value(name: &str, value: &str) -> ConfigurationError {
    ConfigurationError::InvalidValue {
        name: name.into(),
        value: value.into(),
    }
}
