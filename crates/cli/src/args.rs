use argh::FromArgs;
use log::warn;

use base::error::CreateError;
use base::options::WindowOptions;

#[derive(Debug, Eq, PartialEq)]
pub struct ArgumentParseError;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ValueKind {
    Int,
    Float,
}

pub fn kind_from_str(s: &str) -> Result<ValueKind, ArgumentParseError> {
    match s.trim() {
        "int" => Ok(ValueKind::Int),
        "float" => Ok(ValueKind::Float),
        _ => Err(ArgumentParseError),
    }
}

#[derive(FromArgs, Debug)]
/// `nthrank` reports the n-th highest value of a stream, one value per line
pub struct Arguments {
    /// the n in n-th highest
    #[argh(option, short = 'n')]
    pub capacity: Option<i64>,

    /// window options in a TOML file
    #[argh(option)]
    pub config: Option<String>,

    /// value type: [`int`, `float`]
    #[argh(option, default = "String::from(\"int\")")]
    pub kind: String,

    /// input file path, stdin if not given
    #[argh(option, short = 'i')]
    pub input: Option<String>,

    /// print the current answer after every value
    #[argh(switch, short = 'f')]
    pub follow: bool,

    /// verbose
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

impl Arguments {
    pub fn get_window_options(&self) -> Result<WindowOptions, CreateError> {
        if let Some(capacity) = self.capacity {
            if self.config.is_some() {
                warn!("both --capacity and --config are given, using --capacity");
            }
            return Ok(WindowOptions::new(capacity));
        }
        let Some(path) = &self.config else {
            return Err(CreateError::InvalidArgument {
                reason: "either --capacity or --config is required".to_string(),
            });
        };
        let text = std::fs::read_to_string(path).map_err(|e| CreateError::InvalidArgument {
            reason: format!("failed to read {path}: {e}"),
        })?;
        WindowOptions::from_toml(&text)
    }
}
