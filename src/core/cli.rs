use std::path::PathBuf;

/// Command line: global path flags first, then the command and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub paths: CliPaths,
    pub command: Option<String>,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliPaths {
    pub config_path: PathBuf,
    pub store_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl CliArgs {
    pub fn from_env() -> Result<Self, String> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut paths = CliPaths::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => paths.config_path = next_path(&mut args, "--config")?,
                "--store" => paths.store_path = next_path(&mut args, "--store")?,
                "--logs" => paths.logs_dir = next_path(&mut args, "--logs")?,
                flag if flag.starts_with("--") && flag != "--help" => {
                    return Err(format!("Unknown argument: {arg}"));
                }
                _ => {
                    return Ok(Self {
                        paths,
                        command: Some(arg),
                        args: args.collect(),
                    });
                }
            }
        }
        Ok(Self {
            paths,
            command: None,
            args: Vec::new(),
        })
    }
}

impl Default for CliPaths {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("config.json"),
            store_path: PathBuf::from("schedule.json"),
            logs_dir: PathBuf::from("logs"),
        }
    }
}

fn next_path<I>(args: &mut I, flag: &str) -> Result<PathBuf, String>
where
    I: Iterator<Item = String>,
{
    args.next()
        .map(PathBuf::from)
        .ok_or_else(|| format!("Missing value for {flag}"))
}
