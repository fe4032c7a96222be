use crate::commands::Out;
use crate::{server, Config, Result};

/// Runs the web server until it receives Ctrl-C.
///
/// `host` and `port` override the values from `config.json` when given.
pub async fn serve(config: Config, host: Option<&str>, port: Option<u16>) -> Result<Out<()>> {
    let host = host.unwrap_or(config.host()).to_string();
    let port = port.unwrap_or(config.port());
    server::run(config, &host, port).await?;
    Ok("Server stopped".into())
}
