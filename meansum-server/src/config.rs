use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "meansum-server")]
#[command(about = "HTTP server computing the mean and sum of a list of numbers")]
pub struct ServerConfig {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "MEANSUM_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "5001", env = "MEANSUM_PORT")]
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
