use std::path::PathBuf;

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Reference sweep (10..=10000 step 10), charts on stdout.
    Defaults,
    /// Ask for each parameter interactively.
    Wizard,
    /// Load parameters from a JSON file.
    ConfigFile(PathBuf),
    Help,
    Version,
    /// Anything we could not make sense of, with the reason.
    Invalid(String),
}

impl Invocation {
    /// Accepts any iterator so tests need not touch `std::env::args()`.
    /// The program name must already be stripped.
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        match args.as_slice() {
            [] => Invocation::Defaults,
            [one] => match one.as_str() {
                "-h" | "--help" => Invocation::Help,
                "-V" | "--version" => Invocation::Version,
                "-w" | "--wizard" => Invocation::Wizard,
                flag if flag.starts_with('-') => {
                    Invocation::Invalid(format!("unknown option '{flag}'"))
                }
                path => Invocation::ConfigFile(PathBuf::from(path)),
            },
            _ => Invocation::Invalid(format!("expected at most one argument, got {}", args.len())),
        }
    }
}

pub fn usage() -> String {
    format!(
        "mcpi v{}\n\
         Monte Carlo estimation of pi over a sweep of sample counts.\n\n\
         Usage:\n  \
         mcpi                 run the reference sweep (10..=10000, step 10)\n  \
         mcpi <config.json>   load start/stop/step/seed/output from a JSON file\n  \
         mcpi --wizard        answer each parameter interactively\n  \
         mcpi --help | --version\n\n\
         Set RUST_LOG=info for progress on stderr.",
        env!("CARGO_PKG_VERSION")
    )
}
