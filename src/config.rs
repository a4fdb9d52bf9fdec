use std::path::PathBuf;

/// The configuration parameters for the application.
#[derive(clap::Parser, Clone, Debug)]
pub struct Config {
    /// The connection URL for the database this application should use.
    #[clap(long, env = "MONGODB_URL")]
    pub database_url: String,

    /// The name for the database this application should use.
    #[clap(long, env, default_value = "fulbodb")]
    pub database_name: String,

    /// The directory holding the crest images, one `<slug>.png` per team.
    #[clap(long, env, default_value = "crests")]
    pub crest_dir: PathBuf,

    /// The PORT number for the server address.
    #[clap(long, env, default_value_t = 8000)]
    pub port: u16,
}
