use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("NOTEZ_GIT_HASH");
    const IS_RELEASE: &str = env!("NOTEZ_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "notez", version = get_version())]
#[command(about = "Note-taking HTTP service backed by a JSON file", long_about = None)]
pub struct Cli {
    /// JSON config file (missing file means defaults)
    #[arg(short, long, env = "NOTEZ_CONFIG")]
    pub config: Option<PathBuf>,

    /// Interface to bind [default: 127.0.0.1]
    #[arg(long, env = "NOTEZ_HOST")]
    pub host: Option<String>,

    /// Port to listen on [default: 3000]
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// File the notes are stored in [default: notes.json]
    #[arg(long, env = "NOTEZ_DB_FILE")]
    pub db_file: Option<PathBuf>,
}
